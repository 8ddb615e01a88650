//! # Message Padding
//!
//! Extends a message to a whole number of 64-byte blocks (FIPS 180-4 §5.1.1):
//! the message, a single `0x80` byte, zero bytes, and the message length in
//! bits as a 64-bit big-endian integer occupying the last 8 bytes.
//!
//! The length field always carries the full 64-bit bit count. Writing only
//! the low 16 bits would silently corrupt digests of messages of 8192 bytes
//! or more.

use crate::consts::BLOCK_LEN;

/// Offset within the final block where the length field starts.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Number of padding bytes appended to a message of `message_len` bytes.
///
/// With `r = message_len % 64`, this is `64 - r` when `r < 56`, otherwise
/// `128 - r`. The result is always in `9..=72`.
pub fn padding_len(message_len: usize) -> usize {
    let r = message_len % BLOCK_LEN;
    if r < LENGTH_OFFSET {
        BLOCK_LEN - r
    } else {
        2 * BLOCK_LEN - r
    }
}

/// The bytes appended after a message of `message_len` bytes.
///
/// Shared by [`pad`] and the incremental hasher, which only knows the total
/// length once the message has been fed in.
pub fn pad_suffix(message_len: u64) -> Vec<u8> {
    let count = padding_len((message_len % BLOCK_LEN as u64) as usize);
    let mut suffix = vec![0u8; count];
    suffix[0] = 0x80;
    let bit_len = message_len.wrapping_mul(8);
    suffix[count - 8..].copy_from_slice(&bit_len.to_be_bytes());
    suffix
}

/// Pad `message` into a fresh buffer whose length is a multiple of 64.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let suffix = pad_suffix(message.len() as u64);
    let mut padded = Vec::with_capacity(message.len() + suffix.len());
    padded.extend_from_slice(message);
    padded.extend_from_slice(&suffix);
    padded
}
