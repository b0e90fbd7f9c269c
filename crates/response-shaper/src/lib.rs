//! Response shaping around [`field_projection`].
//!
//! - [`config`]: per-tool field allowlists loaded once at startup and passed
//!   around as an immutable value.
//! - [`formatter`]: validates an upstream response envelope and trims it to
//!   the fields configured for the calling tool.
//! - [`cache`] / [`filters`]: TTL-cached available-filters discovery.
//! - [`cli`]: logic behind the `json-project` binary.

pub mod cache;
pub mod cli;
pub mod config;
pub mod filters;
pub mod formatter;

pub use cache::{Clock, SystemClock, TtlCache, DEFAULT_TTL};
pub use config::{ConfigError, FieldConfig, FIELD_CONFIG_ENV};
pub use filters::{AvailableFilters, FilterSource};
pub use formatter::{validate_response, FormatError, ResponseFormatter, STATUS_OK};
