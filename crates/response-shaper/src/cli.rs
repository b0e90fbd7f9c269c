//! `json-project`: trim a JSON document from stdin to selected fields.
//!
//! Provides the logic behind the binary entry point so it can be tested
//! without spawning a process.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use field_projection::project_specs;
use serde_json::Value;
use thiserror::Error;

use crate::config::{ConfigError, FieldConfig};
use crate::formatter::ResponseFormatter;

#[derive(Debug, Parser)]
#[command(
    name = "json-project",
    version,
    about = "Project fields out of a JSON document read from stdin"
)]
pub struct Args {
    /// Field paths to keep, e.g. `user.name` or `items[*].id`.
    #[arg(required_unless_present = "tool", conflicts_with = "tool")]
    pub paths: Vec<String>,

    /// Use the field list configured for this tool instead of explicit paths.
    #[arg(long)]
    pub tool: Option<String>,

    /// Field configuration file (falls back to `FIELD_CONFIG_PATH`).
    #[arg(long, value_name = "FILE", requires = "tool")]
    pub configuration: Option<PathBuf>,

    /// Print the result on a single line.
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid JSON input: {0}")]
    Input(#[source] serde_json::Error),
    #[error("failed to render output: {0}")]
    Render(#[source] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Project `input` according to `args` and render the result.
pub fn run(args: &Args, input: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(input).map_err(CliError::Input)?;

    let shaped = match &args.tool {
        Some(tool) => {
            let config = FieldConfig::resolve(args.configuration.as_deref())?;
            ResponseFormatter::new(Arc::new(config)).shape(tool, &doc)
        }
        None => project_specs(&doc, &args.paths),
    };

    let text = if args.compact {
        serde_json::to_string(&shaped)
    } else {
        serde_json::to_string_pretty(&shaped)
    };
    text.map_err(CliError::Render)
}
