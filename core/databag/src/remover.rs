//! Path removal.
//!
//! Removing a direct property leaves it present with a null value, so the
//! removal survives a round trip to the store. List removal always leaves a
//! dense list, and a list that ends up empty becomes null.

use databag_types::{EntityPath, Index, SEPARATOR};
use serde_json::{Map, Value};

use crate::value::{has_type, is_empty};
use crate::Tree;

/// Removes values from a record tree. Removing something absent is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct Remover<'a> {
    type_key: &'a str,
}

impl<'a> Remover<'a> {
    /// Creates a remover matching tags against `type_key`.
    #[must_use]
    pub const fn new(type_key: &'a str) -> Self {
        Self { type_key }
    }

    /// Removes whatever `path` addresses.
    ///
    /// With `remove_all`, a numeric index drops that element and every element
    /// after it, so a later element can never slide into the removed slot. A
    /// tag index drops every element carrying the tag. Any field segment after
    /// the index is ignored for list removal.
    pub fn remove_by_path(&self, tree: &mut Tree, path: &EntityPath<'_>, remove_all: bool) {
        let Some(Value::Object(entity)) = tree.get_mut(path.entity_type()) else {
            return;
        };

        let (property, rest) = path.property_and_rest();
        let Some(rest) = rest else {
            if entity.get(property).is_some_and(|value| !value.is_null()) {
                entity.insert(property.to_string(), Value::Null);
            }
            return;
        };

        let Some(target) = entity.get_mut(property) else {
            return;
        };
        if is_empty(target) {
            return;
        }

        let mut segments = rest.split(SEPARATOR);
        let index = Index::parse(segments.next().unwrap_or(rest));
        let has_field = segments.next().is_some();

        match target {
            Value::Array(items) => self.remove_from_list(items, index, remove_all),
            Value::Object(map) => self.remove_from_map(map, index, has_field),
            // A scalar behaves as a one-element list.
            _ => {
                if index == Index::Position(0) {
                    *target = Value::Null;
                }
                return;
            }
        }

        if is_empty(target) {
            *target = Value::Null;
        }
    }

    fn remove_from_list(&self, items: &mut Vec<Value>, index: Index<'_>, remove_all: bool) {
        match index {
            Index::Position(position) if remove_all => items.truncate(position),
            Index::Position(position) => {
                if position < items.len() {
                    items.remove(position);
                }
            }
            Index::Tag(tag) => items.retain(|node| !has_type(node, self.type_key, tag)),
        }
    }

    fn remove_from_map(&self, map: &mut Map<String, Value>, index: Index<'_>, has_field: bool) {
        match index {
            Index::Tag(key) => {
                if !has_field && map.get(key).is_some_and(|value| !value.is_null()) {
                    // Sub-path: null the key in place, no re-indexing.
                    map.insert(key.to_string(), Value::Null);
                    return;
                }
                map.retain(|_, node| !has_type(node, self.type_key, key));
            }
            Index::Position(position) => {
                map.remove(&position.to_string());
            }
        }
    }
}
