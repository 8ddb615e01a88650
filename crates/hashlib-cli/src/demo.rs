//! # Demo Subcommand
//!
//! Prints one sample digest, showing the library's simplest use. Plain and
//! tagged formats print a sentence; JSON prints the usual digest report.

use anyhow::Result;

use hashlib_core::{digest_bytes, TextEncoding};

use crate::config::Settings;
use crate::output::{render, OutputFormat};

/// The sample string hashed by `hashlib demo`.
pub const DEMO_TEXT: &str = "Author by Disy!";

/// The output of `hashlib demo` in `format`.
pub fn demo_output(format: OutputFormat) -> Result<String> {
    let digest = digest_bytes(DEMO_TEXT.as_bytes());
    let len = DEMO_TEXT.len() as u64;
    let rendered = render(&digest, len, Some(TextEncoding::Utf8), format)?;
    Ok(match format {
        OutputFormat::Json => rendered,
        OutputFormat::Plain | OutputFormat::Tagged => {
            format!("SHA-256 of \"{DEMO_TEXT}\" is {rendered}")
        }
    })
}

/// Execute `hashlib demo`.
pub fn run_demo(settings: &Settings) -> Result<u8> {
    println!("{}", demo_output(settings.format)?);
    Ok(0)
}
