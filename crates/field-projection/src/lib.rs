//! Field projection over JSON documents.
//!
//! Selects an arbitrary subset of fields out of a deeply nested
//! [`serde_json::Value`], with `*` fanning out over every key of an object or
//! every element of an array, while keeping the original container shape at
//! each matched level.
//!
//! # Example
//!
//! ```
//! use field_projection::{parse_path_specs, project};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "user": {"name": "Ada", "email": "ada@example.com", "age": 36},
//!     "items": [{"id": 1, "price": 9}, {"id": 2, "price": 8}]
//! });
//!
//! let paths = parse_path_specs(["user.name", "user.email", "items[*].id"]);
//! assert_eq!(
//!     project(&doc, &paths),
//!     json!({
//!         "user": {"name": "Ada", "email": "ada@example.com"},
//!         "items": [{"id": 1}, {"id": 2}]
//!     })
//! );
//! ```

pub mod types;
pub use types::{is_wildcard, FieldPath, PathSegment, PathSpec, WILDCARD};

pub mod parse;
pub use parse::{format_field_path, is_index, parse_index, parse_path_spec, parse_path_specs};

pub mod project;
pub use project::{project, project_specs, Projector, DEFAULT_MAX_PATH_LEN};

pub mod navigate;
pub use navigate::{get, get_dotted};

pub mod numbered;
pub use numbered::to_numbered_map;
