//! # Text Encodings
//!
//! Turns text into the byte sequence that gets hashed. The digest of a
//! string depends on the encoding chosen, so the encoding is always explicit
//! at the API boundary (UTF-8 unless stated otherwise).
//!
//! Encoding names are matched case-insensitively against the canonical names
//! and their common aliases, e.g. `"UTF-16BE"`, `"utf_16be"`, `"latin1"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::HashError;

/// Supported text encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    /// UTF-8.
    #[default]
    Utf8,
    /// UTF-16, big-endian, no byte-order mark.
    Utf16Be,
    /// UTF-16, little-endian, no byte-order mark.
    Utf16Le,
    /// UTF-16, big-endian, preceded by the `FE FF` byte-order mark.
    Utf16,
    /// 7-bit US-ASCII.
    Ascii,
    /// ISO-8859-1.
    Latin1,
}

impl TextEncoding {
    /// Every supported encoding, in declaration order.
    pub const ALL: [TextEncoding; 6] = [
        Self::Utf8,
        Self::Utf16Be,
        Self::Utf16Le,
        Self::Utf16,
        Self::Ascii,
        Self::Latin1,
    ];

    /// Canonical identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16 => "UTF-16",
            Self::Ascii => "US-ASCII",
            Self::Latin1 => "ISO-8859-1",
        }
    }

    /// Encode `text` into bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::UnmappableCharacter`] when the text contains a
    /// character outside the range of a single-byte encoding. The Unicode
    /// encodings never fail.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, HashError> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
            Self::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            Self::Utf16 => {
                let mut out = Vec::with_capacity(2 + text.len() * 2);
                out.extend_from_slice(&[0xfe, 0xff]);
                out.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
                Ok(out)
            }
            Self::Ascii => self.encode_single_byte(text, 0x7f),
            Self::Latin1 => self.encode_single_byte(text, 0xff),
        }
    }

    fn encode_single_byte(&self, text: &str, max: u32) -> Result<Vec<u8>, HashError> {
        text.chars()
            .enumerate()
            .map(|(index, character)| {
                u8::try_from(character as u32)
                    .ok()
                    .filter(|&b| u32::from(b) <= max)
                    .ok_or_else(|| {
                        tracing::debug!(encoding = self.name(), index, "unmappable character");
                        HashError::UnmappableCharacter {
                            encoding: self.name(),
                            character,
                            index,
                        }
                    })
            })
            .collect()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "utf8" => Ok(Self::Utf8),
            "utf16be" | "unicodebigunmarked" => Ok(Self::Utf16Be),
            "utf16le" | "unicodelittleunmarked" => Ok(Self::Utf16Le),
            "utf16" => Ok(Self::Utf16),
            "ascii" | "usascii" => Ok(Self::Ascii),
            "iso88591" | "latin1" => Ok(Self::Latin1),
            _ => {
                tracing::debug!(encoding = s, "rejected encoding name");
                Err(HashError::UnsupportedEncoding(s.to_string()))
            }
        }
    }
}

impl Serialize for TextEncoding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TextEncoding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
