//! # Text Subcommand
//!
//! Hashes a string after encoding it with the selected text encoding.

use anyhow::Result;
use clap::Args;

use hashlib_core::{digest_bytes, Sha256Digest, TextEncoding};

use crate::config::Settings;
use crate::output::render;

/// Arguments for `hashlib text`.
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Text to hash.
    pub text: String,

    /// Text encoding (UTF-8, UTF-16BE, UTF-16LE, UTF-16, US-ASCII, ISO-8859-1).
    #[arg(long, short)]
    pub encoding: Option<TextEncoding>,
}

/// Encode `text` and hash it, returning the digest and the encoded length.
pub fn digest_text(text: &str, encoding: TextEncoding) -> Result<(Sha256Digest, u64)> {
    let bytes = encoding.encode(text)?;
    Ok((digest_bytes(&bytes), bytes.len() as u64))
}

/// Execute `hashlib text`.
pub fn run_text(args: &TextArgs, settings: &Settings) -> Result<u8> {
    let encoding = settings.encoding_for(args.encoding);
    tracing::debug!(%encoding, chars = args.text.chars().count(), "hashing text");

    let (digest, len) = digest_text(&args.text, encoding)?;
    println!("{}", render(&digest, len, Some(encoding), settings.format)?);
    Ok(0)
}
