//! Dotted-path access over dynamic JSON values.
//!
//! Mapper trees, switch effects, and end conditions all address into
//! function output with paths like `matchResult.result` or `cards.0.cardId`.
//! This module owns that one path dialect so every component resolves it
//! identically: segments are separated by `.`, object segments are plain
//! keys, and array segments are decimal indices.

use serde_json::{Map, Value};

/// Look up a dotted path inside a value.
///
/// Returns `None` as soon as any segment is absent or addresses into a
/// scalar. An empty path refers to the value itself.
///
/// ```
/// use serde_json::json;
/// use rulecard::values::lookup_path;
///
/// let value = json!({"matchResult": {"result": "matched"}, "cards": [{"cardId": "a#1"}]});
///
/// assert_eq!(lookup_path(&value, "matchResult.result"), Some(&json!("matched")));
/// assert_eq!(lookup_path(&value, "cards.0.cardId"), Some(&json!("a#1")));
/// assert_eq!(lookup_path(&value, "matchResult.missing"), None);
/// ```
#[must_use]
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }

    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => {
                let index: usize = segment.parse().ok()?;
                items.get(index)?
            }
            _ => return None,
        };
    }
    Some(current)
}

/// Write a value at a dotted path, creating intermediate objects.
///
/// Existing non-object values along the path are replaced by objects; the
/// final segment overwrites whatever was there.
pub fn insert_path(root: &mut Map<String, Value>, path: &str, value: Value) {
    let mut segments = path.split('.').peekable();
    let mut current = root;

    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            current.insert(segment.to_owned(), value);
            return;
        }

        let entry = current
            .entry(segment.to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        current = entry.as_object_mut().unwrap();
    }
}

/// Stringify a scalar for switch-case matching.
///
/// Strings match without quotes, numbers and booleans via their canonical
/// text form, null as `"null"`. Objects and arrays have no case form and
/// return `None`.
#[must_use]
pub fn case_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_owned()),
        Value::Object(_) | Value::Array(_) => None,
    }
}
