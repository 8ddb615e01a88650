//! Hex decoding for byte-string input.

use crate::error::HashError;

fn nibble(c: u8, position: usize) -> Result<u8, HashError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(HashError::InvalidArgument(format!(
            "invalid hex character {:?} at position {position}",
            c as char
        ))),
    }
}

/// Strictly decode a hex string: an even number of hex digits and nothing else.
pub fn decode_hex(hex: &str) -> Result<Vec<u8>, HashError> {
    let raw = hex.as_bytes();
    if raw.len() % 2 != 0 {
        return Err(HashError::InvalidArgument(format!(
            "odd number of hex digits: {}",
            raw.len()
        )));
    }
    raw.chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| -> Result<u8, HashError> {
            Ok(nibble(pair[0], 2 * i)? << 4 | nibble(pair[1], 2 * i + 1)?)
        })
        .collect()
}

/// Decode loosely formatted hex: an optional `0x` prefix and any whitespace
/// between digits are accepted.
pub fn decode_hex_lenient(input: &str) -> Result<Vec<u8>, HashError> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    decode_hex(&compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_mixed_case() {
        assert_eq!(decode_hex("0aFf10").unwrap(), vec![0x0a, 0xff, 0x10]);
    }

    #[test]
    fn decode_empty() {
        assert!(decode_hex("").unwrap().is_empty());
    }

    #[test]
    fn odd_length_rejected() {
        let err = decode_hex("abc").unwrap_err();
        assert!(format!("{err}").contains("odd number"));
    }

    #[test]
    fn bad_character_position_reported() {
        let err = decode_hex("00zz").unwrap_err();
        assert!(format!("{err}").contains("position 2"));
    }

    #[test]
    fn strict_decoder_rejects_whitespace() {
        assert!(decode_hex("0a 0c").is_err());
    }

    #[test]
    fn lenient_accepts_prefix_and_spaces() {
        assert_eq!(
            decode_hex_lenient(" 0x0a0c 0009\n0200 ").unwrap(),
            vec![0x0a, 0x0c, 0x00, 0x09, 0x02, 0x00]
        );
    }
}
