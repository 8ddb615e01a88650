//! # File Subcommand
//!
//! Streams a file (or stdin, given `-`) through the incremental hasher.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use hashlib_core::{digest_reader, Sha256Digest};

use crate::config::Settings;
use crate::output::render;

/// Arguments for `hashlib file`.
#[derive(Args, Debug)]
pub struct FileArgs {
    /// File to hash. Use `-` for standard input.
    pub path: PathBuf,
}

/// Hash the file at `path`, or stdin when `path` is `-`.
pub fn digest_path(path: &Path) -> Result<(Sha256Digest, u64)> {
    if path == Path::new("-") {
        return digest_reader(io::stdin().lock()).context("failed to read standard input");
    }
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    digest_reader(file).with_context(|| format!("failed to read {}", path.display()))
}

/// Execute `hashlib file`.
pub fn run_file(args: &FileArgs, settings: &Settings) -> Result<u8> {
    let (digest, len) = digest_path(&args.path)?;
    tracing::debug!(path = %args.path.display(), len, "hashed file");
    println!("{}", render(&digest, len, None, settings.format)?);
    Ok(0)
}
