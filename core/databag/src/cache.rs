//! Memoization of resolved reads.
//!
//! Entries are keyed by the literal path string. Invalidation evicts exactly
//! that string: writing `person.addresses` leaves a cached
//! `person.addresses.visit` in place.

use serde_json::Value;
use std::collections::HashMap;

/// Cache of path string → last resolved value.
#[derive(Debug, Clone)]
pub struct ReadCache {
    entries: HashMap<String, Value>,
    enabled: bool,
}

impl ReadCache {
    /// Creates an empty cache. A disabled cache never stores anything.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            entries: HashMap::new(),
            enabled,
        }
    }

    /// Returns the cached value for `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.entries.get(path)
    }

    /// Stores `value` for `path`, replacing any previous entry.
    pub fn insert(&mut self, path: &str, value: Value) {
        if self.enabled {
            self.entries.insert(path.to_string(), value);
        }
    }

    /// Evicts the entry for exactly `path`. Returns true if one was present.
    pub fn invalidate(&mut self, path: &str) -> bool {
        self.entries.remove(path).is_some()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ReadCache {
    fn default() -> Self {
        Self::new(true)
    }
}
