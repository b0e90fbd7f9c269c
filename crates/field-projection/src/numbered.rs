//! Position-keyed maps built from string lists.

use serde_json::{Map, Value};

/// Convert a list of strings into an object keyed by 1-based position.
///
/// # Example
///
/// ```
/// use field_projection::to_numbered_map;
/// use serde_json::json;
///
/// assert_eq!(to_numbered_map(["a", "b"]), json!({"1": "a", "2": "b"}));
/// assert_eq!(to_numbered_map(Vec::<String>::new()), json!({}));
/// ```
pub fn to_numbered_map<I, S>(items: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut map = Map::new();
    for (i, item) in items.into_iter().enumerate() {
        map.insert((i + 1).to_string(), Value::String(item.into()));
    }
    Value::Object(map)
}
