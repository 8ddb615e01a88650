//! # Compression Function
//!
//! Message schedule expansion and the 64-round mixing function
//! (FIPS 180-4 §6.2.2). Every addition wraps modulo 2^32.

use crate::consts::{K, ROUNDS};
use crate::{Block, State};

#[inline]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Σ0
#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1
#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// σ0. The last term is a logical shift, not a rotation.
#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1
#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand a block into the 64-word message schedule.
pub fn message_schedule(block: &Block) -> [u32; ROUNDS] {
    let mut w = [0u32; ROUNDS];
    w[..16].copy_from_slice(block);
    for j in 16..ROUNDS {
        w[j] = small_sigma1(w[j - 2])
            .wrapping_add(w[j - 7])
            .wrapping_add(small_sigma0(w[j - 15]))
            .wrapping_add(w[j - 16]);
    }
    w
}

/// Compress one block into the running hash state.
///
/// The working variables start from `state`; after 64 rounds they are added
/// word-wise back into it.
pub fn compress(state: &mut State, block: &Block) {
    let w = message_schedule(block);
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for j in 0..ROUNDS {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[j])
            .wrapping_add(w[j]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, working) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(working);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::parse_blocks;
    use crate::consts::H0;
    use crate::padding::pad;

    #[test]
    fn choose_and_majority() {
        assert_eq!(ch(0xffff0000, 0x12345678, 0x9abcdef0), 0x1234def0);
        assert_eq!(maj(0xff00ff00, 0x0f0f0f0f, 0x00ff00ff), 0x0f0f0f0f);
    }

    #[test]
    fn small_sigma0_shifts_instead_of_rotating() {
        // Low bits fed into the shift term must not wrap around to the top.
        let x = 0x0000_0007;
        assert_eq!(small_sigma0(x), x.rotate_right(7) ^ x.rotate_right(18));
    }

    #[test]
    fn schedule_copies_block_words() {
        let block: Block = core::array::from_fn(|i| i as u32 + 1);
        let w = message_schedule(&block);
        assert_eq!(&w[..16], &block);
    }

    #[test]
    fn schedule_for_abc() {
        // Intermediate values from the FIPS 180-2 appendix B.1 example.
        let blocks = parse_blocks(&pad(b"abc"));
        let w = message_schedule(&blocks[0]);
        assert_eq!(w[16], 0x61626380);
        assert_eq!(w[17], 0x000f0000);
        assert_eq!(w[63], 0x12b1edeb);
    }

    #[test]
    fn compress_abc_block() {
        let blocks = parse_blocks(&pad(b"abc"));
        let mut state = H0;
        compress(&mut state, &blocks[0]);
        assert_eq!(
            state,
            [
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
                0xf20015ad,
            ]
        );
    }

    #[test]
    fn compress_accumulates_rather_than_replaces() {
        let block = [0u32; 16];
        let mut from_h0 = H0;
        compress(&mut from_h0, &block);
        let mut from_zero = [0u32; 8];
        compress(&mut from_zero, &block);
        assert_ne!(from_h0, from_zero);
    }
}
