//! Field-path specification parsing.
//!
//! Raw specifications use dots between names and brackets for array
//! positions: `rating.value`, `tags[0]`, `items[*].id`, `grid[1][2]`.
//! Parsing never fails; malformed text is segmented best-effort.

use crate::types::{is_wildcard, FieldPath, PathSpec};

/// Normalize a field-path specification into an ordered segment list.
///
/// Already-segmented input is returned unchanged.
///
/// # Example
///
/// ```
/// use field_projection::parse_path_spec;
///
/// assert_eq!(parse_path_spec("tags[0]"), vec!["tags", "0"]);
/// assert_eq!(parse_path_spec("rating.value"), vec!["rating", "value"]);
/// assert_eq!(parse_path_spec("items[0].id"), vec!["items", "0", "id"]);
/// assert_eq!(parse_path_spec(["already", "segmented"]), vec!["already", "segmented"]);
/// ```
pub fn parse_path_spec(spec: impl Into<PathSpec>) -> FieldPath {
    match spec.into() {
        PathSpec::Segments(segments) => segments,
        PathSpec::Raw(raw) => parse_raw(&raw),
    }
}

/// Parse a list of specifications.
pub fn parse_path_specs<I>(specs: I) -> Vec<FieldPath>
where
    I: IntoIterator,
    I::Item: Into<PathSpec>,
{
    specs.into_iter().map(parse_path_spec).collect()
}

fn parse_raw(raw: &str) -> FieldPath {
    let mut out = FieldPath::new();
    for token in raw.split('.') {
        push_token(token, &mut out);
    }
    out
}

/// Split one dot-delimited token into its base name and bracket suffixes.
fn push_token(token: &str, out: &mut FieldPath) {
    let open = match token.find('[') {
        Some(open) => open,
        None => {
            out.push(token.to_string());
            return;
        }
    };

    let base = &token[..open];
    if !base.is_empty() {
        out.push(base.to_string());
    }

    let mut rest = &token[open..];
    while let Some(inner) = rest.strip_prefix('[') {
        match inner.find(']') {
            Some(close) => {
                out.push(inner[..close].to_string());
                rest = &inner[close + 1..];
            }
            None => {
                // Unterminated: the remainder is the bracket content.
                out.push(inner.to_string());
                rest = "";
            }
        }
    }

    if !rest.is_empty() {
        push_token(rest, out);
    }
}

/// Check if a segment is a non-negative integer, i.e. usable as an array index.
pub fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a segment as a canonical array index: ASCII digits with no leading
/// zero (`"0"` is valid, `"01"` is not).
pub fn parse_index(segment: &str) -> Option<usize> {
    if !is_index(segment) || (segment.len() > 1 && segment.starts_with('0')) {
        return None;
    }
    segment.parse().ok()
}

/// Render a field path back into its raw textual form.
///
/// Index and wildcard segments after the first are rendered in brackets.
///
/// # Example
///
/// ```
/// use field_projection::format_field_path;
///
/// let path = vec!["items".to_string(), "*".to_string(), "id".to_string()];
/// assert_eq!(format_field_path(&path), "items[*].id");
/// ```
pub fn format_field_path(path: &[String]) -> String {
    let mut out = String::new();
    for (i, segment) in path.iter().enumerate() {
        if i > 0 && (is_index(segment) || is_wildcard(segment)) {
            out.push('[');
            out.push_str(segment);
            out.push(']');
        } else {
            if i > 0 {
                out.push('.');
            }
            out.push_str(segment);
        }
    }
    out
}
