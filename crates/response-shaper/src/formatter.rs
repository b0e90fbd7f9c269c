//! Response validation and shaping.

use std::ops::RangeInclusive;
use std::sync::Arc;

use field_projection::{format_field_path, parse_path_specs, Projector};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::FieldConfig;

/// Status codes the upstream API uses for success.
pub const STATUS_OK: RangeInclusive<i64> = 20000..=20099;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("API error: {message} (code: {code})")]
    Api { code: i64, message: String },
    #[error("failed to render response: {0}")]
    Render(#[from] serde_json::Error),
}

/// Check the `status_code` of a response envelope and of each of its `tasks`.
///
/// Nodes without a numeric `status_code` are accepted.
pub fn validate_response(response: &Value) -> Result<(), FormatError> {
    check_status(response)?;
    if let Some(tasks) = response.get("tasks").and_then(Value::as_array) {
        for task in tasks {
            check_status(task)?;
        }
    }
    Ok(())
}

fn check_status(node: &Value) -> Result<(), FormatError> {
    let code = match node.get("status_code").and_then(Value::as_i64) {
        Some(code) => code,
        None => return Ok(()),
    };
    if STATUS_OK.contains(&code) {
        return Ok(());
    }
    let message = node
        .get("status_message")
        .and_then(Value::as_str)
        .unwrap_or("unknown error")
        .to_string();
    Err(FormatError::Api { code, message })
}

/// Trims responses to the fields configured for the tool that produced them.
#[derive(Debug, Clone)]
pub struct ResponseFormatter {
    config: Arc<FieldConfig>,
    projector: Projector,
}

impl ResponseFormatter {
    pub fn new(config: Arc<FieldConfig>) -> Self {
        Self {
            config,
            projector: Projector::default(),
        }
    }

    pub fn with_projector(mut self, projector: Projector) -> Self {
        self.projector = projector;
        self
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Project `response` onto the fields configured for `tool`.
    ///
    /// Unconfigured tools, and tools configured with an empty list, get the
    /// full response back.
    pub fn shape(&self, tool: &str, response: &Value) -> Value {
        match self.config.fields_for_tool(tool) {
            Some(fields) if !fields.is_empty() => {
                let paths = parse_path_specs(fields);
                debug!(
                    tool,
                    paths = ?paths.iter().map(|p| format_field_path(p)).collect::<Vec<_>>(),
                    "projecting response"
                );
                self.projector.project(response, &paths)
            }
            Some(_) => {
                warn!(tool, "empty field list configured, returning full response");
                response.clone()
            }
            None => {
                debug!(tool, "no field configuration, returning full response");
                response.clone()
            }
        }
    }

    /// Validate, shape and render `response` as indented JSON text.
    pub fn format(&self, tool: &str, response: &Value) -> Result<String, FormatError> {
        validate_response(response)?;
        let shaped = self.shape(tool, response);
        Ok(serde_json::to_string_pretty(&shaped)?)
    }
}
