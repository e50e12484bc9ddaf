//! Shared fixtures for bag tests.

#![allow(dead_code)]

use databag::DataBag;
use serde_json::{json, Map, Value};

/// Unwraps a `json!` object literal into an entity body.
pub fn body(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {other}"),
    }
}

/// A person with two tagged email addresses.
pub fn person() -> Map<String, Value> {
    body(json!({
        "firstName": "John",
        "emailAddresses": [
            {"emailAddress": "john@doe.com", "type": "private"},
            {"emailAddress": "john@doe2.com", "type": "privateGsm"}
        ]
    }))
}

pub fn person_bag() -> DataBag {
    DataBag::from_entity_data("person", person())
}

/// `foo` with a scalar and a list of three tagged entries.
pub fn foo() -> Map<String, Value> {
    body(json!({"a": 1, "b": [{"type": "f", "c": 2}, {"type": "s", "c": 3}, {"type": "t"}]}))
}

pub fn foo_bag() -> DataBag {
    DataBag::from_entity_data("foo", foo())
}

/// Malformed paths, named after the rule they break.
pub const INVALID_PATHS: &[(&str, &str)] = &[
    ("empty", ""),
    ("no separator", "invalidPath"),
    ("ends with .", "person."),
    ("ends with . on subpath", "person.firstName."),
    ("starting with .", ".person.firstName"),
    ("has ..", "person..firstName"),
    ("has .. and .", "person..firstName."),
];
