//! # Incremental Hasher
//!
//! [`Sha256`] accepts input in pieces and produces the same digest as
//! [`crate::digest_bytes`] on the concatenated input. Full blocks are
//! compressed as soon as they are available, so memory use stays constant
//! regardless of input length.

use std::io;

use crate::block::parse_block;
use crate::compress::compress;
use crate::consts::{BLOCK_LEN, H0};
use crate::digest::Sha256Digest;
use crate::padding::pad_suffix;
use crate::State;

/// Streaming SHA-256 state.
#[derive(Debug, Clone)]
pub struct Sha256 {
    state: State,
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    total_len: u64,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256 {
    /// A hasher over the empty message.
    pub fn new() -> Self {
        Self {
            state: H0,
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            total_len: 0,
        }
    }

    /// Number of message bytes fed in so far.
    pub fn len(&self) -> u64 {
        self.total_len
    }

    /// True if no bytes have been fed in.
    pub fn is_empty(&self) -> bool {
        self.total_len == 0
    }

    /// Append `data` to the message.
    pub fn update(&mut self, mut data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
            if self.buffered < BLOCK_LEN {
                return;
            }
            compress(&mut self.state, &parse_block(&self.buffer));
            self.buffered = 0;
        }

        let mut chunks = data.chunks_exact(BLOCK_LEN);
        for chunk in &mut chunks {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            compress(&mut self.state, &parse_block(&block));
        }

        let rest = chunks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Pad the message and return its digest.
    pub fn finalize(mut self) -> Sha256Digest {
        let mut tail = self.buffer[..self.buffered].to_vec();
        tail.extend_from_slice(&pad_suffix(self.total_len));
        debug_assert_eq!(tail.len() % BLOCK_LEN, 0);

        for chunk in tail.chunks_exact(BLOCK_LEN) {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            compress(&mut self.state, &parse_block(&block));
        }
        Sha256Digest::from_state(&self.state)
    }
}

impl io::Write for Sha256 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Hash everything `reader` yields until EOF, returning the digest and the
/// number of bytes read.
///
/// # Errors
///
/// Propagates any read error; no digest is produced in that case.
pub fn digest_reader<R: io::Read>(mut reader: R) -> io::Result<(Sha256Digest, u64)> {
    let mut hasher = Sha256::new();
    let copied = io::copy(&mut reader, &mut hasher)?;
    tracing::trace!(bytes = copied, "hashed reader to EOF");
    let len = hasher.len();
    Ok((hasher.finalize(), len))
}
