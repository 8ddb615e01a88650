//! # Output Formatting
//!
//! Renders a digest for stdout. Logs go to stderr, so stdout carries only
//! what is rendered here.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use hashlib_core::{Sha256Digest, TextEncoding};

/// How digests are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare 64-character hex digest.
    #[default]
    Plain,
    /// `sha256:<hex>`.
    Tagged,
    /// One JSON object per digest.
    Json,
}

/// JSON rendering of a single digest.
#[derive(Debug, Serialize)]
struct DigestReport<'a> {
    algorithm: &'static str,
    digest: &'a Sha256Digest,
    input_len: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    encoding: Option<TextEncoding>,
}

/// Render `digest` of an `input_len`-byte message in `format`.
///
/// `encoding` is reported in JSON output when the input was text.
pub fn render(
    digest: &Sha256Digest,
    input_len: u64,
    encoding: Option<TextEncoding>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Plain => digest.to_hex(),
        OutputFormat::Tagged => digest.tagged(),
        OutputFormat::Json => serde_json::to_string(&DigestReport {
            algorithm: Sha256Digest::ALGORITHM,
            digest,
            input_len,
            encoding,
        })?,
    })
}
