//! # hashlib CLI entry point
//!
//! Parses command-line arguments, loads the optional configuration file,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hashlib_cli::check::{run_check, CheckArgs};
use hashlib_cli::config::{CliConfig, Settings};
use hashlib_cli::demo::run_demo;
use hashlib_cli::file::{run_file, FileArgs};
use hashlib_cli::hex::{run_hex, HexArgs};
use hashlib_cli::output::OutputFormat;
use hashlib_cli::text::{run_text, TextArgs};

/// hashlib: SHA-256 digests of text, bytes, and files.
#[derive(Parser, Debug)]
#[command(name = "hashlib", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hash a string.
    Text(TextArgs),

    /// Hash a hex-encoded byte string.
    Hex(HexArgs),

    /// Hash a file, or standard input with `-`.
    File(FileArgs),

    /// Verify a string against an expected digest.
    Check(CheckArgs),

    /// Print a sample digest.
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "hashlib starting");

    let result = load_settings(&cli).and_then(|settings| {
        tracing::debug!(?settings, "resolved settings");
        match &cli.command {
            Commands::Text(args) => run_text(args, &settings),
            Commands::Hex(args) => run_hex(args, &settings),
            Commands::File(args) => run_file(args, &settings),
            Commands::Check(args) => run_check(args, &settings),
            Commands::Demo => run_demo(&settings),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Merge the configuration file (if any) with the global flags.
fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    Ok(Settings::resolve(&config, cli.format))
}
