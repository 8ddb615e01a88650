//! # Error Types
//!
//! Digest computation itself never fails. These errors describe input that
//! is rejected at the boundary, before any hashing starts.

use thiserror::Error;

/// Errors from the text and hex entry points of `hashlib-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The requested text encoding is not supported.
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// The text contains a character the chosen encoding cannot represent.
    #[error("character {character:?} at index {index} cannot be encoded as {encoding}")]
    UnmappableCharacter {
        /// Canonical name of the encoding.
        encoding: &'static str,
        /// The offending character.
        character: char,
        /// Character index within the text.
        index: usize,
    },

    /// Malformed caller input, rejected before hashing.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
