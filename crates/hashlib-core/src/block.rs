//! # Block Parsing
//!
//! Reinterprets a padded message as big-endian 32-bit words, sixteen words
//! per 512-bit block.

use crate::consts::BLOCK_LEN;
use crate::Block;

/// Parse one 64-byte chunk into a block of sixteen big-endian words.
pub fn parse_block(chunk: &[u8; BLOCK_LEN]) -> Block {
    let mut block = [0u32; 16];
    for (word, bytes) in block.iter_mut().zip(chunk.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    block
}

/// Split a padded message into blocks, preserving order.
///
/// The input length must be a multiple of 64, which [`crate::padding::pad`]
/// guarantees. Any trailing partial chunk is ignored.
pub fn parse_blocks(padded: &[u8]) -> Vec<Block> {
    debug_assert_eq!(padded.len() % BLOCK_LEN, 0);
    padded
        .chunks_exact(BLOCK_LEN)
        .map(|chunk| {
            let mut buf = [0u8; BLOCK_LEN];
            buf.copy_from_slice(chunk);
            parse_block(&buf)
        })
        .collect()
}
