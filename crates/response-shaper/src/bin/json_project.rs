//! `json-project`: keep only selected fields of a JSON document.
//!
//! Usage:
//!   json-project [--compact] <path>...
//!   json-project --tool <name> [--configuration <file>] [--compact]
//!
//! The document is read from stdin; the result is written to stdout.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use response_shaper::cli::{run, Args};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read document from stdin")?;

    let output = run(&args, input.trim())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
