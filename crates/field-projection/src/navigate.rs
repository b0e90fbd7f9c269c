//! Single-path lookup.
//!
//! The literal-only counterpart of [`crate::project`]: follows one path to
//! one node, without wildcards and without building a result tree.

use serde_json::Value;

use crate::parse::parse_index;

/// Get a value from a JSON document by path.
///
/// Array steps must be canonical indices. The empty path returns the document.
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => arr.get(parse_index(step)?)?,
            Value::Object(map) => map.get(step)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a value from a JSON document by a dot-separated path.
///
/// Only `.` is a separator; brackets and `*` are treated as literal key text.
///
/// # Example
///
/// ```
/// use field_projection::get_dotted;
/// use serde_json::json;
///
/// let doc = json!({"ranked_keywords": {"google": {"keyword_data": ["str"]}}});
/// assert_eq!(
///     get_dotted(&doc, "ranked_keywords.google"),
///     Some(&json!({"keyword_data": ["str"]}))
/// );
/// assert_eq!(get_dotted(&doc, "ranked_keywords.bing"), None);
/// ```
pub fn get_dotted<'a>(val: &'a Value, dotted: &str) -> Option<&'a Value> {
    if dotted.is_empty() {
        return Some(val);
    }
    let path: Vec<String> = dotted.split('.').map(str::to_string).collect();
    get(val, &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_nested() {
        let doc = json!({"a": {"b": [10, {"c": true}]}});
        let path = |p: &[&str]| p.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(get(&doc, &path(&[])), Some(&doc));
        assert_eq!(get(&doc, &path(&["a", "b", "0"])), Some(&json!(10)));
        assert_eq!(get(&doc, &path(&["a", "b", "1", "c"])), Some(&json!(true)));
        assert_eq!(get(&doc, &path(&["a", "b", "2"])), None);
        assert_eq!(get(&doc, &path(&["a", "b", "x"])), None);
        assert_eq!(get(&doc, &path(&["a", "b", "0", "z"])), None);
    }

    #[test]
    fn test_get_dotted() {
        let doc = json!({"a": {"b": {"c": 1}}, "x*": 2});
        assert_eq!(get_dotted(&doc, ""), Some(&doc));
        assert_eq!(get_dotted(&doc, "a.b.c"), Some(&json!(1)));
        assert_eq!(get_dotted(&doc, "x*"), Some(&json!(2)));
        assert_eq!(get_dotted(&doc, "a.*"), None);
    }
}
