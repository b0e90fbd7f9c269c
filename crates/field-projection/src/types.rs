//! Type definitions for field paths.

/// A step in a field path: an object key, a string-encoded array index, or
/// the [`WILDCARD`].
pub type PathSegment = String;

/// An ordered list of segments identifying a node (or, with wildcards, a set
/// of nodes) in a JSON document.
pub type FieldPath = Vec<PathSegment>;

/// The reserved segment that matches every key of an object or every index of
/// an array.
pub const WILDCARD: &str = "*";

/// Check if a segment is the wildcard.
pub fn is_wildcard(segment: &str) -> bool {
    segment == WILDCARD
}

/// A field path as supplied by a caller: either a raw string such as
/// `"rating.value"` or `"tags[0]"`, or a list that is already segmented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    /// Dotted / bracketed text, parsed by [`crate::parse_path_spec`].
    Raw(String),
    /// Pre-segmented path, passed through unchanged.
    Segments(Vec<String>),
}

impl From<&str> for PathSpec {
    fn from(raw: &str) -> Self {
        PathSpec::Raw(raw.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(raw: String) -> Self {
        PathSpec::Raw(raw)
    }
}

impl From<&String> for PathSpec {
    fn from(raw: &String) -> Self {
        PathSpec::Raw(raw.clone())
    }
}

impl From<Vec<String>> for PathSpec {
    fn from(segments: Vec<String>) -> Self {
        PathSpec::Segments(segments)
    }
}

impl From<&[String]> for PathSpec {
    fn from(segments: &[String]) -> Self {
        PathSpec::Segments(segments.to_vec())
    }
}

impl From<&[&str]> for PathSpec {
    fn from(segments: &[&str]) -> Self {
        PathSpec::Segments(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathSpec {
    fn from(segments: [&str; N]) -> Self {
        PathSpec::Segments(segments.iter().map(|s| s.to_string()).collect())
    }
}
