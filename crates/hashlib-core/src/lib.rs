//! # hashlib-core: SHA-256 Message Digest
//!
//! Computes the SHA-256 digest (FIPS 180-4) of an arbitrary byte sequence.
//! The pipeline has four stages, each consuming only what the previous one
//! produced:
//!
//! 1. **Padding** ([`padding`]): extend the message to a multiple of 64 bytes.
//! 2. **Block parsing** ([`block`]): big-endian 32-bit words, 16 per block.
//! 3. **Compression** ([`compress`]): 64-word schedule and 64 rounds per
//!    block, accumulated into an 8-word hash state.
//! 4. **Serialization** ([`digest`]): 8 words to 64 lowercase hex characters.
//!
//! ## Entry Points
//!
//! ```
//! use hashlib_core::{hash_bytes, hash_text, hash_text_with, TextEncoding};
//!
//! assert_eq!(
//!     hash_text("Hello World!"),
//!     "7f83b1657ff1fc53b92dc18148a1d65dfc2d4b1fa3d677284addd200126d9069"
//! );
//! assert_eq!(hash_bytes(b"Hello World!"), hash_text("Hello World!"));
//! assert_ne!(
//!     hash_text_with("本", TextEncoding::Utf16Be).unwrap(),
//!     hash_text("本")
//! );
//! ```
//!
//! ## Crate Policy
//!
//! - Digest computation is total: it never fails for any finite input.
//! - All word arithmetic is native `u32` with wrapping semantics.
//! - No shared mutable state; the constant tables are `const`.
//! - No `unsafe` code. No `.unwrap()` outside tests.
//! - Not constant-time. Do not use where timing side channels matter.

pub mod block;
pub mod compress;
pub mod consts;
pub mod digest;
pub mod encoding;
pub mod error;
pub mod hasher;
pub mod hex;
pub mod padding;

pub use digest::Sha256Digest;
pub use encoding::TextEncoding;
pub use error::HashError;
pub use hasher::{digest_reader, Sha256};

/// One 512-bit message block as sixteen big-endian words.
pub type Block = [u32; 16];

/// The eight-word running hash state.
pub type State = [u32; 8];

/// Compute the SHA-256 digest of `data`.
pub fn digest_bytes(data: &[u8]) -> Sha256Digest {
    let padded = padding::pad(data);
    let blocks = block::parse_blocks(&padded);
    tracing::trace!(input_len = data.len(), blocks = blocks.len(), "computing sha256");

    let mut state = consts::H0;
    for block in &blocks {
        compress::compress(&mut state, block);
    }
    Sha256Digest::from_state(&state)
}

/// Hash a byte sequence to 64 lowercase hex characters.
pub fn hash_bytes(data: &[u8]) -> String {
    digest_bytes(data).to_hex()
}

/// Hash the UTF-8 encoding of `text`.
pub fn hash_text(text: &str) -> String {
    hash_bytes(text.as_bytes())
}

/// Hash `text` after encoding it with `encoding`.
///
/// # Errors
///
/// Returns [`HashError::UnmappableCharacter`] if `encoding` cannot represent
/// the text. Nothing is hashed in that case.
pub fn hash_text_with(text: &str, encoding: TextEncoding) -> Result<String, HashError> {
    let bytes = encoding.encode(text)?;
    Ok(hash_bytes(&bytes))
}

/// Hash `text` under an encoding given by name, e.g. `"UTF-16BE"`.
///
/// # Errors
///
/// Returns [`HashError::UnsupportedEncoding`] for an unknown name, and the
/// errors of [`hash_text_with`] otherwise.
pub fn hash_text_named(text: &str, encoding: &str) -> Result<String, HashError> {
    hash_text_with(text, encoding.parse()?)
}

/// Digest the bytes spelled by a hex string such as `"0a0c00090200"`,
/// returning the digest and the decoded byte count.
///
/// An optional `0x` prefix and whitespace between digits are ignored.
///
/// # Errors
///
/// Returns [`HashError::InvalidArgument`] for odd-length or non-hex input.
pub fn digest_hex(input: &str) -> Result<(Sha256Digest, u64), HashError> {
    let bytes = hex::decode_hex_lenient(input)?;
    Ok((digest_bytes(&bytes), bytes.len() as u64))
}

/// Hash the bytes spelled by a hex string to 64 lowercase hex characters.
///
/// # Errors
///
/// Same as [`digest_hex`].
pub fn hash_hex(input: &str) -> Result<String, HashError> {
    digest_hex(input).map(|(digest, _)| digest.to_hex())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use sha2::Digest as _;

    proptest! {
        /// Output is always 64 lowercase hex digits.
        #[test]
        fn digest_is_64_lowercase_hex(data in prop::collection::vec(any::<u8>(), 0..512)) {
            let hex = hash_bytes(&data);
            prop_assert_eq!(hex.len(), 64);
            prop_assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        }

        /// Same input, same digest.
        #[test]
        fn deterministic(data in prop::collection::vec(any::<u8>(), 0..512)) {
            prop_assert_eq!(hash_bytes(&data), hash_bytes(&data));
        }

        /// Agrees with the `sha2` crate.
        #[test]
        fn agrees_with_sha2(data in prop::collection::vec(any::<u8>(), 0..1024)) {
            let expected = sha2::Sha256::digest(&data);
            let actual = digest_bytes(&data);
            prop_assert_eq!(actual.as_bytes().as_slice(), expected.as_slice());
        }

        /// Flipping any single bit changes the digest.
        #[test]
        fn single_bit_flip_changes_digest(
            data in prop::collection::vec(any::<u8>(), 1..256),
            index in any::<prop::sample::Index>(),
            bit in 0u8..8,
        ) {
            let mut flipped = data.clone();
            let i = index.index(flipped.len());
            flipped[i] ^= 1 << bit;
            prop_assert_ne!(hash_bytes(&data), hash_bytes(&flipped));
        }

        /// Padded length is a positive multiple of 64 and the smallest that
        /// fits the message, the marker byte, and the length field.
        #[test]
        fn padded_length_is_minimal_block_multiple(len in 0usize..1024) {
            let padded = padding::pad(&vec![0u8; len]);
            prop_assert_eq!(padded.len() % 64, 0);
            prop_assert!(padded.len() >= len + 9);
            prop_assert!(padded.len() < len + 9 + 64);
        }

        /// Chunked incremental hashing matches the one-shot path.
        #[test]
        fn incremental_matches_one_shot(
            data in prop::collection::vec(any::<u8>(), 0..700),
            chunk in 1usize..100,
        ) {
            let mut hasher = Sha256::new();
            for piece in data.chunks(chunk) {
                hasher.update(piece);
            }
            prop_assert_eq!(hasher.finalize(), digest_bytes(&data));
        }

        /// Text hashing under any encoding equals hashing the encoded bytes.
        #[test]
        fn text_hash_is_hash_of_encoding(text in "\\PC{0,40}") {
            for encoding in [TextEncoding::Utf8, TextEncoding::Utf16Be, TextEncoding::Utf16Le] {
                let bytes = encoding.encode(&text).unwrap();
                prop_assert_eq!(hash_text_with(&text, encoding).unwrap(), hash_bytes(&bytes));
            }
        }
    }
}
