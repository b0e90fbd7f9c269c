//! Per-tool field allowlists.
//!
//! The configuration file maps tool names to the field paths their responses
//! are trimmed to:
//!
//! ```json
//! { "supported_fields": { "serp_organic_live": ["tasks[*].result[*].items[*].url"] } }
//! ```
//!
//! A tool without an entry is unrestricted.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable consulted when no configuration path is given.
pub const FIELD_CONFIG_ENV: &str = "FIELD_CONFIG_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read field configuration {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid field configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("field configuration has no `supported_fields` object")]
    MissingSupportedFields,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    supported_fields: Option<IndexMap<String, Vec<String>>>,
}

/// Field allowlists keyed by tool name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldConfig {
    tools: IndexMap<String, Vec<String>>,
}

impl FieldConfig {
    /// A configuration that restricts no tool.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_tools<I, K, P>(tools: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<P>)>,
        K: Into<String>,
        P: Into<String>,
    {
        let tools = tools
            .into_iter()
            .map(|(tool, paths)| (tool.into(), paths.into_iter().map(Into::into).collect()))
            .collect();
        Self { tools }
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(text)?;
        let tools = file
            .supported_fields
            .ok_or(ConfigError::MissingSupportedFields)?;
        Ok(Self { tools })
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            tools = config.len(),
            "loaded field configuration"
        );
        Ok(config)
    }

    /// Resolve the configuration for this process: an explicit path wins,
    /// then [`FIELD_CONFIG_ENV`], otherwise the empty configuration.
    pub fn resolve(cli_path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve_from(cli_path, std::env::var_os(FIELD_CONFIG_ENV))
    }

    fn resolve_from(cli_path: Option<&Path>, env_path: Option<OsString>) -> Result<Self, ConfigError> {
        if let Some(path) = cli_path {
            return Self::load_from_file(path);
        }
        match env_path {
            Some(path) if !path.is_empty() => Self::load_from_file(PathBuf::from(path)),
            _ => {
                debug!("no field configuration given, responses are unrestricted");
                Ok(Self::empty())
            }
        }
    }

    /// Paths configured for `tool`, or `None` when the tool is unrestricted.
    pub fn fields_for_tool(&self, tool: &str) -> Option<&[String]> {
        self.tools.get(tool).map(Vec::as_slice)
    }

    pub fn is_tool_configured(&self, tool: &str) -> bool {
        self.tools.contains_key(tool)
    }

    pub fn tool_names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
