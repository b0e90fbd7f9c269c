//! Recursive field projection.
//!
//! A projection copies only the sub-trees of a source document that are
//! reachable through a set of field paths. Every container created in the
//! result has the same kind (object or array) as the source node it mirrors,
//! and paths that share a prefix merge into the same nodes.

use serde_json::{Map, Value};

use crate::parse::{parse_index, parse_path_specs};
use crate::types::{is_wildcard, FieldPath, PathSpec};

/// Default bound on the number of segments in a single path.
pub const DEFAULT_MAX_PATH_LEN: usize = 256;

/// Projection settings.
///
/// Recursion depth equals the number of segments in the path being walked, so
/// bounding path length bounds the stack used by a projection. Paths longer
/// than the bound contribute nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projector {
    max_path_len: usize,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            max_path_len: DEFAULT_MAX_PATH_LEN,
        }
    }
}

impl Projector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_path_len(max_path_len: usize) -> Self {
        Self { max_path_len }
    }

    pub fn max_path_len(&self) -> usize {
        self.max_path_len
    }

    /// Project `source` onto `paths`.
    ///
    /// Returns an empty object when `source` is null or `paths` is empty.
    /// Otherwise the result is an array if `source` is an array and an object
    /// in every other case.
    pub fn project(&self, source: &Value, paths: &[FieldPath]) -> Value {
        if source.is_null() || paths.is_empty() {
            return Value::Object(Map::new());
        }

        let mut target = empty_like(source);
        for path in paths {
            if path.len() > self.max_path_len {
                continue;
            }
            write(source, &mut target, path);
        }
        target
    }
}

/// Project `source` onto `paths` with default settings.
///
/// # Example
///
/// ```
/// use field_projection::{parse_path_specs, project};
/// use serde_json::json;
///
/// let doc = json!({"a": 1, "b": {"c": 2, "d": 3}, "e": [{"f": 4}, {"f": 5}]});
/// let paths = parse_path_specs(["a", "b.c", "e[*].f"]);
/// assert_eq!(
///     project(&doc, &paths),
///     json!({"a": 1, "b": {"c": 2}, "e": [{"f": 4}, {"f": 5}]})
/// );
/// ```
pub fn project(source: &Value, paths: &[FieldPath]) -> Value {
    Projector::new().project(source, paths)
}

/// Parse raw specifications and project `source` onto them.
pub fn project_specs<I>(source: &Value, specs: I) -> Value
where
    I: IntoIterator,
    I::Item: Into<PathSpec>,
{
    let paths = parse_path_specs(specs);
    project(source, &paths)
}

fn empty_like(source: &Value) -> Value {
    match source {
        Value::Array(_) => Value::Array(Vec::new()),
        _ => Value::Object(Map::new()),
    }
}

/// Make `slot` a container that can receive the projection of `like`.
///
/// An unset slot becomes an empty container of `like`'s kind. Anything
/// already written there is kept.
fn ensure_container(slot: &mut Value, like: &Value) {
    if slot.is_null() {
        *slot = empty_like(like);
    }
}

/// Store `val` at `index`, padding skipped positions with `null`.
fn set_index(dst: &mut Vec<Value>, index: usize, val: Value) {
    if dst.len() <= index {
        dst.resize(index + 1, Value::Null);
    }
    dst[index] = val;
}

/// Return the slot at `index`, padding skipped positions with `null`.
fn slot_at(dst: &mut Vec<Value>, index: usize) -> &mut Value {
    if dst.len() <= index {
        dst.resize(index + 1, Value::Null);
    }
    &mut dst[index]
}

fn array_index(segment: &str, len: usize) -> Option<usize> {
    parse_index(segment).filter(|&i| i < len)
}

fn write(source: &Value, target: &mut Value, segments: &[String]) {
    let (head, rest) = match segments.split_first() {
        Some(split) => split,
        None => return,
    };

    if rest.is_empty() {
        write_leaf(source, target, head);
    } else if is_wildcard(head) {
        fan_out(source, target, rest);
    } else {
        descend(source, target, head, rest);
    }
}

/// Terminal segment: copy one child, or every child for a wildcard.
fn write_leaf(source: &Value, target: &mut Value, segment: &str) {
    match (source, target) {
        (Value::Object(src), Value::Object(dst)) => {
            if is_wildcard(segment) {
                for (key, val) in src {
                    dst.insert(key.clone(), val.clone());
                }
            } else if let Some(val) = src.get(segment) {
                dst.insert(segment.to_string(), val.clone());
            }
        }
        (Value::Array(src), Value::Array(dst)) => {
            if is_wildcard(segment) {
                for (i, val) in src.iter().enumerate() {
                    set_index(dst, i, val.clone());
                }
            } else if let Some(i) = array_index(segment, src.len()) {
                set_index(dst, i, src[i].clone());
            }
        }
        _ => {}
    }
}

/// Non-terminal wildcard: recurse into every child, keeping one result slot
/// per source child.
fn fan_out(source: &Value, target: &mut Value, rest: &[String]) {
    match (source, target) {
        (Value::Object(src), Value::Object(dst)) => {
            for (key, child) in src {
                let slot = dst.entry(key.clone()).or_insert(Value::Null);
                ensure_container(slot, child);
                write(child, slot, rest);
            }
        }
        (Value::Array(src), Value::Array(dst)) => {
            if dst.len() < src.len() {
                dst.resize(src.len(), Value::Null);
            }
            for (child, slot) in src.iter().zip(dst.iter_mut()) {
                ensure_container(slot, child);
                write(child, slot, rest);
            }
        }
        _ => {}
    }
}

/// Non-terminal literal: recurse into the named child if it is a container.
fn descend(source: &Value, target: &mut Value, segment: &str, rest: &[String]) {
    match (source, target) {
        (Value::Object(src), Value::Object(dst)) => {
            let child = match src.get(segment) {
                Some(child) if is_container(child) => child,
                _ => return,
            };
            let slot = dst.entry(segment.to_string()).or_insert(Value::Null);
            ensure_container(slot, child);
            write(child, slot, rest);
        }
        (Value::Array(src), Value::Array(dst)) => {
            let i = match array_index(segment, src.len()) {
                Some(i) if is_container(&src[i]) => i,
                _ => return,
            };
            let slot = slot_at(dst, i);
            ensure_container(slot, &src[i]);
            write(&src[i], slot, rest);
        }
        _ => {}
    }
}

fn is_container(val: &Value) -> bool {
    matches!(val, Value::Object(_) | Value::Array(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(raw: &str) -> FieldPath {
        crate::parse_path_spec(raw)
    }

    #[test]
    fn test_null_source() {
        assert_eq!(project(&Value::Null, &[path("a")]), json!({}));
    }

    #[test]
    fn test_empty_paths() {
        assert_eq!(project(&json!({"a": 1}), &[]), json!({}));
        assert_eq!(project(&json!([1, 2]), &[]), json!({}));
    }

    #[test]
    fn test_scalar_source() {
        assert_eq!(project(&json!(5), &[path("a")]), json!({}));
    }

    #[test]
    fn test_literal_leaf() {
        let doc = json!({"a": 1, "b": 2});
        assert_eq!(project(&doc, &[path("a")]), json!({"a": 1}));
    }

    #[test]
    fn test_missing_leaf() {
        let doc = json!({"a": 1});
        assert_eq!(project(&doc, &[path("z")]), json!({}));
        assert_eq!(project(&doc, &[path("z.y")]), json!({}));
    }

    #[test]
    fn test_leaf_copies_subtree() {
        let doc = json!({"a": {"b": [1, 2]}, "c": 3});
        assert_eq!(project(&doc, &[path("a")]), json!({"a": {"b": [1, 2]}}));
    }

    #[test]
    fn test_null_leaf_is_copied() {
        let doc = json!({"a": null, "b": 1});
        assert_eq!(project(&doc, &[path("a")]), json!({"a": null}));
    }

    #[test]
    fn test_scalar_intermediate_contributes_nothing() {
        let doc = json!({"a": 1});
        assert_eq!(project(&doc, &[path("a.b")]), json!({}));
    }

    #[test]
    fn test_terminal_wildcard_object() {
        let doc = json!({"x": {"p": 1, "q": {"r": 2}}});
        assert_eq!(
            project(&doc, &[path("x.*")]),
            json!({"x": {"p": 1, "q": {"r": 2}}})
        );
    }

    #[test]
    fn test_terminal_wildcard_array() {
        let doc = json!({"tags": ["a", "b", "c"]});
        assert_eq!(
            project(&doc, &[path("tags[*]")]),
            json!({"tags": ["a", "b", "c"]})
        );
    }

    #[test]
    fn test_root_array_source() {
        let doc = json!([{"id": 1, "x": 0}, {"id": 2, "x": 0}]);
        assert_eq!(project(&doc, &[path("*.id")]), json!([{"id": 1}, {"id": 2}]));
        assert_eq!(project(&doc, &[path("1.id")]), json!([null, {"id": 2}]));
    }

    #[test]
    fn test_index_keeps_position() {
        let doc = json!({"t": [1, 2, 3]});
        assert_eq!(project(&doc, &[path("t[2]")]), json!({"t": [null, null, 3]}));
        assert_eq!(project(&doc, &[path("t[0]")]), json!({"t": [1]}));
    }

    #[test]
    fn test_index_out_of_range() {
        let doc = json!({"t": [1, 2, 3]});
        assert_eq!(project(&doc, &[path("t[3]")]), json!({"t": []}));
        assert_eq!(project(&doc, &[path("t[01]")]), json!({"t": []}));
        assert_eq!(project(&doc, &[path("t.x")]), json!({"t": []}));
    }

    #[test]
    fn test_index_then_wildcard_merge() {
        let doc = json!({"items": [{"id": 1, "x": 9}, {"id": 2, "x": 8}]});
        let out = project(&doc, &[path("items[1].x"), path("items[*].id")]);
        assert_eq!(out, json!({"items": [{"id": 1}, {"id": 2, "x": 8}]}));
    }

    #[test]
    fn test_wildcard_over_scalar_elements() {
        let doc = json!({"items": [1, {"id": 2}]});
        assert_eq!(
            project(&doc, &[path("items[*].id")]),
            json!({"items": [{}, {"id": 2}]})
        );
    }

    #[test]
    fn test_wildcard_keeps_earlier_scalar() {
        let doc = json!({"items": [1, {"id": 2}]});
        assert_eq!(
            project(&doc, &[path("items[0]"), path("items[*].id")]),
            json!({"items": [1, {"id": 2}]})
        );
    }

    #[test]
    fn test_object_fan_out() {
        let doc = json!({"a": {"v": 1, "w": 0}, "b": {"v": 2}, "c": {"w": 3}});
        assert_eq!(
            project(&doc, &[path("*.v")]),
            json!({"a": {"v": 1}, "b": {"v": 2}, "c": {}})
        );
    }

    #[test]
    fn test_last_write_wins_on_leaf() {
        let doc = json!({"a": {"b": 1, "c": 2}});
        let out = project(&doc, &[path("a.b"), path("a")]);
        assert_eq!(out, json!({"a": {"b": 1, "c": 2}}));
    }

    #[test]
    fn test_result_does_not_alias_source() {
        let doc = json!({"a": {"b": [1, 2]}});
        let mut out = project(&doc, &[path("*")]);
        out["a"]["b"][0] = json!(100);
        assert_eq!(doc, json!({"a": {"b": [1, 2]}}));
    }

    #[test]
    fn test_max_path_len() {
        let doc = json!({"a": {"b": {"c": 1}}, "d": 2});
        let projector = Projector::with_max_path_len(2);
        assert_eq!(projector.max_path_len(), 2);
        assert_eq!(
            projector.project(&doc, &[path("a.b.c"), path("d")]),
            json!({"d": 2})
        );
    }

    #[test]
    fn test_empty_segment_list_is_noop() {
        let doc = json!({"a": 1});
        assert_eq!(project(&doc, &[Vec::new()]), json!({}));
    }

    #[test]
    fn test_project_specs() {
        let doc = json!({"rating": {"value": 4.5, "votes": 10}, "tags": ["x", "y"]});
        assert_eq!(
            project_specs(&doc, ["rating.value", "tags[0]"]),
            json!({"rating": {"value": 4.5}, "tags": ["x"]})
        );
    }
}
