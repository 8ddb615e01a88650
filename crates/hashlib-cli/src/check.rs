//! # Check Subcommand
//!
//! Compares the digest of a string against an expected value. Exits 0 on a
//! match and 1 on a mismatch, so it can gate shell pipelines.

use anyhow::{Context, Result};
use clap::Args;

use hashlib_core::{Sha256Digest, TextEncoding};

use crate::config::Settings;
use crate::text::digest_text;

/// Arguments for `hashlib check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Text to hash.
    pub text: String,

    /// Expected digest, 64 hex characters, optionally tagged `sha256:`.
    #[arg(long)]
    pub expected: String,

    /// Text encoding.
    #[arg(long, short)]
    pub encoding: Option<TextEncoding>,
}

/// Outcome of a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The computed digest equals the expected one.
    Match(Sha256Digest),
    /// The digests differ.
    Mismatch {
        /// Digest supplied by the caller.
        expected: Sha256Digest,
        /// Digest actually computed.
        actual: Sha256Digest,
    },
}

/// Hash `text` and compare it with `expected`.
pub fn check_text(text: &str, encoding: TextEncoding, expected: &str) -> Result<CheckOutcome> {
    let expected: Sha256Digest = expected.parse().context("invalid --expected digest")?;
    let (actual, _) = digest_text(text, encoding)?;
    Ok(if actual == expected {
        CheckOutcome::Match(actual)
    } else {
        CheckOutcome::Mismatch { expected, actual }
    })
}

/// Execute `hashlib check`.
pub fn run_check(args: &CheckArgs, settings: &Settings) -> Result<u8> {
    let encoding = settings.encoding_for(args.encoding);
    match check_text(&args.text, encoding, &args.expected)? {
        CheckOutcome::Match(digest) => {
            println!("OK {digest}");
            Ok(0)
        }
        CheckOutcome::Mismatch { expected, actual } => {
            tracing::warn!(%expected, %actual, "digest mismatch");
            println!("MISMATCH expected {expected} got {actual}");
            Ok(1)
        }
    }
}
