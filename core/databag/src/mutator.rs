//! Path writes.
//!
//! Writes create whatever is missing along the way: the entity body, the
//! property, and list entries addressed by a tag that is not present yet.
//! Existing list elements are never reordered or removed; new entries are
//! always appended.

use databag_types::{EntityPath, Index};
use serde_json::{Map, Value};
use tracing::warn;

use crate::value::{has_type, is_empty, new_entry, split_index, stamp_type};
use crate::Tree;

/// Writes values into a record tree.
#[derive(Debug, Clone, Copy)]
pub struct Mutator<'a> {
    type_key: &'a str,
}

impl<'a> Mutator<'a> {
    /// Creates a mutator matching and stamping tags on `type_key`.
    #[must_use]
    pub const fn new(type_key: &'a str) -> Self {
        Self { type_key }
    }

    /// Writes `value` at `path`. Null values are the remover's job.
    pub fn set_by_path(&self, tree: &mut Tree, path: &EntityPath<'_>, value: Value) {
        let entity = tree
            .entry(path.entity_type().to_string())
            .or_insert(Value::Null);
        make_object(entity, path);

        let (property, rest) = path.property_and_rest();
        let Some(rest) = rest else {
            entity[property] = value;
            return;
        };

        let (index, field) = split_index(rest);
        let index = Index::parse(index);
        let target = &mut entity[property];

        if let Value::Object(map) = target {
            if let (Index::Tag(key), None) = (index, field) {
                if !value.is_object() {
                    // Sub-path: plain child object updated by key.
                    map.insert(key.to_string(), value);
                    return;
                }
            }
            self.set_in_map(map, index, field, value);
            return;
        }

        if !target.is_array() {
            if !is_empty(target) {
                warn!(path = %path, "Replacing scalar property with a list");
            }
            *target = Value::Array(Vec::new());
        }
        if let Value::Array(items) = target {
            self.set_in_list(items, index, field, value);
        }
    }

    fn set_in_list(
        &self,
        items: &mut Vec<Value>,
        index: Index<'_>,
        field: Option<&str>,
        mut value: Value,
    ) {
        let tag = index.tag();
        if let (Some(tag), None) = (tag, field) {
            stamp_type(&mut value, self.type_key, tag);
        }

        let found = match index {
            Index::Position(position) => (position < items.len()).then_some(position),
            Index::Tag(tag) => items
                .iter()
                .position(|node| has_type(node, self.type_key, tag)),
        };

        match (found, field) {
            (Some(position), None) => items[position] = value,
            (Some(position), Some(field)) => set_field(&mut items[position], field, value),
            (None, None) => items.push(value),
            (None, Some(field)) => items.push(new_entry(field, tag, self.type_key, value)),
        }
    }

    /// Keyed counterpart of [`Self::set_in_list`] for properties holding an object.
    ///
    /// A tag first matches a key, then the first entry carrying that tag. New
    /// entries are stored under the tag (or the position, as a string key).
    /// An existing plain child matched by key is replaced as is, without a tag.
    fn set_in_map(
        &self,
        map: &mut Map<String, Value>,
        index: Index<'_>,
        field: Option<&str>,
        mut value: Value,
    ) {
        let tag = index.tag();
        let key = match index {
            Index::Position(position) => position.to_string(),
            Index::Tag(tag) => tag.to_string(),
        };
        let found = if map.contains_key(&key) {
            Some(key.clone())
        } else {
            tag.and_then(|tag| {
                map.iter()
                    .find(|(_, node)| has_type(node, self.type_key, tag))
                    .map(|(k, _)| k.clone())
            })
        };

        if let (Some(tag), None) = (tag, field) {
            let plain_child = found.as_deref().is_some_and(|found| {
                found == key
                    && map
                        .get(found)
                        .is_some_and(|node| !has_type(node, self.type_key, tag))
            });
            if !plain_child {
                stamp_type(&mut value, self.type_key, tag);
            }
        }

        match (found, field) {
            (Some(found), None) => {
                map.insert(found, value);
            }
            (Some(found), Some(field)) => {
                if let Some(node) = map.get_mut(&found) {
                    set_field(node, field, value);
                }
            }
            (None, None) => {
                map.insert(key, value);
            }
            (None, Some(field)) => {
                map.insert(key, new_entry(field, tag, self.type_key, value));
            }
        }
    }
}

/// Writes `node[field]`.
///
/// An empty node becomes an object first. A list keeps its elements under
/// their positions as keys. Any other scalar is left untouched.
fn set_field(node: &mut Value, field: &str, value: Value) {
    if is_empty(node) {
        *node = Value::Object(Map::new());
    } else if let Value::Array(items) = node {
        let keyed: Map<String, Value> = std::mem::take(items)
            .into_iter()
            .enumerate()
            .map(|(position, item)| (position.to_string(), item))
            .collect();
        *node = Value::Object(keyed);
    }

    match node {
        Value::Object(map) => {
            map.insert(field.to_string(), value);
        }
        _ => warn!(field, "Skipping field write on a scalar list element"),
    }
}

/// Ensures an entity body is an object.
fn make_object(entity: &mut Value, path: &EntityPath<'_>) {
    if !entity.is_object() {
        if !entity.is_null() {
            warn!(entity_type = path.entity_type(), "Replacing non-object entity body");
        }
        *entity = Value::Object(Map::new());
    }
}
