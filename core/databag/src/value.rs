//! Small helpers over `serde_json::Value` shared by the path components.

use databag_types::SEPARATOR;
use serde_json::{Map, Value};

/// Loose emptiness: null, `false`, `0`, `""`, `"0"`, `[]` and `{}` are empty.
///
/// Properties holding an empty value are treated as absent when addressed
/// by index.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Returns true if `node` is an object whose type field equals `tag`.
pub(crate) fn has_type(node: &Value, type_key: &str, tag: &str) -> bool {
    node.get(type_key).and_then(Value::as_str) == Some(tag)
}

/// Overwrites the type field of `value` when it is an object.
pub(crate) fn stamp_type(value: &mut Value, type_key: &str, tag: &str) {
    if let Value::Object(map) = value {
        map.insert(type_key.to_string(), Value::String(tag.to_string()));
    }
}

/// Splits `index[.field]`. The field keeps any further separators.
pub(crate) fn split_index(rest: &str) -> (&str, Option<&str>) {
    match rest.split_once(SEPARATOR) {
        Some((index, field)) => (index, Some(field)),
        None => (rest, None),
    }
}

/// Builds `{ field: value }`, tagged when a tag is given.
pub(crate) fn new_entry(field: &str, tag: Option<&str>, type_key: &str, value: Value) -> Value {
    let mut entry = Map::new();
    entry.insert(field.to_string(), value);
    if let Some(tag) = tag {
        entry.insert(type_key.to_string(), Value::String(tag.to_string()));
    }
    Value::Object(entry)
}
