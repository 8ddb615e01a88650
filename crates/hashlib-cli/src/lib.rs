//! # hashlib-cli: Command-Line Front End
//!
//! Provides the `hashlib` binary on top of `hashlib-core`.
//!
//! ## Subcommands
//!
//! - `hashlib text`: hash a string under a chosen text encoding.
//! - `hashlib hex`: hash a hex-encoded byte string.
//! - `hashlib file`: hash a file or standard input.
//! - `hashlib check`: compare a string's digest against an expected value.
//! - `hashlib demo`: print a sample digest.
//!
//! ```bash
//! hashlib text "Hello World!"
//! hashlib text --encoding UTF-16BE "本插件作者"
//! hashlib --format tagged hex 0a0c00090200
//! hashlib file ./release.tar.gz
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; hashing lives in `hashlib-core`.
//! - Handlers return the process exit code; errors carry `anyhow` context.
//! - Digests go to stdout, diagnostics to stderr.

pub mod check;
pub mod config;
pub mod demo;
pub mod file;
pub mod hex;
pub mod output;
pub mod text;
