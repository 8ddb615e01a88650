//! # Hex Subcommand
//!
//! Hashes a byte string given as hex digits, e.g. `0a0c00090200`.

use anyhow::{Context, Result};
use clap::Args;

use hashlib_core::digest_hex;

use crate::config::Settings;
use crate::output::render;

/// Arguments for `hashlib hex`.
#[derive(Args, Debug)]
pub struct HexArgs {
    /// Hex-encoded bytes. A `0x` prefix and whitespace are allowed.
    pub bytes: String,
}

/// Execute `hashlib hex`.
pub fn run_hex(args: &HexArgs, settings: &Settings) -> Result<u8> {
    let (digest, len) = digest_hex(&args.bytes).context("could not decode hex input")?;
    tracing::debug!(len, "hashed hex input");
    println!("{}", render(&digest, len, None, settings.format)?);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_hex_valid() {
        let args = HexArgs {
            bytes: "0a0c00090200".to_string(),
        };
        assert_eq!(run_hex(&args, &Settings::default()).unwrap(), 0);
    }

    #[test]
    fn run_hex_invalid_has_context() {
        let args = HexArgs {
            bytes: "xyz".to_string(),
        };
        let err = run_hex(&args, &Settings::default()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("could not decode hex input"));
        assert!(msg.contains("odd number"));
    }
}
