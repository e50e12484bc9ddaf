//! Read-only path resolution.

use databag_types::{EntityPath, Index};
use serde_json::Value;

use crate::value::{has_type, is_empty, split_index};
use crate::Tree;

/// Resolves paths against a record tree without touching it.
#[derive(Debug, Clone, Copy)]
pub struct Retriever<'a> {
    type_key: &'a str,
}

impl<'a> Retriever<'a> {
    /// Creates a retriever matching tags against `type_key`.
    #[must_use]
    pub const fn new(type_key: &'a str) -> Self {
        Self { type_key }
    }

    /// Returns the value at `path`, or `default` when nothing (or null) is there.
    #[must_use]
    pub fn get_by_path(&self, tree: &Tree, path: &EntityPath<'_>, default: &Value) -> Value {
        self.resolve(tree, path)
            .filter(|value| !value.is_null())
            .cloned()
            .unwrap_or_else(|| default.clone())
    }

    /// Borrows the value at `path`, if any.
    pub fn resolve<'t>(&self, tree: &'t Tree, path: &EntityPath<'_>) -> Option<&'t Value> {
        let entity = tree.get(path.entity_type())?;
        let (property, rest) = path.property_and_rest();
        let target = entity.get(property)?;

        let Some(rest) = rest else {
            return Some(target);
        };
        if is_empty(target) {
            return None;
        }

        let (index, field) = split_index(rest);
        let node = match target {
            // Sub-path: a plain child object is drilled into by key.
            Value::Object(map) if map.contains_key(index) => map.get(index)?,
            _ => self.find_node(target, Index::parse(index))?,
        };

        match field {
            None => Some(node),
            Some(field) => node.get(field),
        }
    }

    /// Locates the element addressed by `index`. Tags resolve to the first match.
    fn find_node<'t>(&self, target: &'t Value, index: Index<'_>) -> Option<&'t Value> {
        match (target, index) {
            (Value::Array(items), Index::Position(position)) => items.get(position),
            (Value::Array(items), Index::Tag(tag)) => {
                items.iter().find(|node| has_type(node, self.type_key, tag))
            }
            (Value::Object(map), Index::Position(position)) => map.get(&position.to_string()),
            (Value::Object(map), Index::Tag(tag)) => {
                map.values().find(|node| has_type(node, self.type_key, tag))
            }
            // A scalar behaves as a one-element list.
            (scalar, Index::Position(0)) => Some(scalar),
            _ => None,
        }
    }
}
