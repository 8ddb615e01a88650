//! # Digest Serialization
//!
//! Defines [`Sha256Digest`], the 32-byte result of a hash computation, and
//! its rendering as 64 lowercase hexadecimal characters.
//!
//! The hex form is the canonical representation everywhere: `Display`,
//! `to_hex()`, and serde all use it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::DIGEST_LEN;
use crate::error::HashError;
use crate::State;

/// A SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sha256Digest([u8; DIGEST_LEN]);

impl Sha256Digest {
    /// Algorithm identifier used in tagged renderings.
    pub const ALGORITHM: &'static str = "sha256";

    /// Wrap raw digest bytes.
    pub fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Serialize the final hash state, each word big-endian, in state order.
    pub fn from_state(state: &State) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        for (out, word) in bytes.chunks_exact_mut(4).zip(state) {
            out.copy_from_slice(&word.to_be_bytes());
        }
        Self(bytes)
    }

    /// The raw 32 digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Render the digest as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Render as `sha256:<hex>`.
    pub fn tagged(&self) -> String {
        format!("{}:{}", Self::ALGORITHM, self.to_hex())
    }

    /// Parse a 64-character hex digest. Either letter case is accepted, and
    /// a leading `sha256:` tag is stripped.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidArgument`] if the input is not exactly 64
    /// hex digits.
    pub fn from_hex(s: &str) -> Result<Self, HashError> {
        let hex = s.trim();
        let hex = hex
            .strip_prefix(Self::ALGORITHM)
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(hex);
        if hex.len() != DIGEST_LEN * 2 {
            return Err(HashError::InvalidArgument(format!(
                "digest must be {} hex characters, got {}",
                DIGEST_LEN * 2,
                hex.len()
            )));
        }
        let bytes = crate::hex::decode_hex(hex)?;
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }
}

impl AsRef<[u8]> for Sha256Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Sha256Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Sha256Digest) -> Self {
        digest.0
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Sha256Digest {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Sha256Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Sha256Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
