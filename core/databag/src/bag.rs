//! The entity bag.

use databag_types::{EntityPath, Fingerprint, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::cache::ReadCache;
use crate::config::BagConfig;
use crate::mutator::Mutator;
use crate::remover::Remover;
use crate::retriever::Retriever;
use crate::Tree;

/// A bag of raw entity data, addressable by dotted path.
///
/// A domain object typically keeps a `DataBag` as a private field, exposes
/// typed accessors on top of [`get`](Self::get) / [`set`](Self::set), and
/// hands [`entity_state`](Self::entity_state) back to the store when
/// [`is_dirty`](Self::is_dirty) says so.
///
/// Every operation validates its path before touching the tree, so a
/// rejected call never leaves a partial write behind. `get` takes `&mut self`
/// because it fills the read cache; share a bag across threads behind a lock.
#[derive(Debug, Clone)]
pub struct DataBag {
    /// Entity type → entity body.
    data: Tree,
    /// Fingerprint of each body as it was added.
    hashes: HashMap<String, Fingerprint>,
    /// Resolved reads by literal path.
    cache: ReadCache,
    config: BagConfig,
}

impl DataBag {
    /// Creates an empty bag with the default configuration.
    #[must_use]
    pub fn create() -> Self {
        Self::with_config(BagConfig::default())
    }

    /// Creates an empty bag with a custom configuration.
    #[must_use]
    pub fn with_config(config: BagConfig) -> Self {
        Self {
            data: Tree::new(),
            hashes: HashMap::new(),
            cache: ReadCache::new(config.cache_reads),
            config,
        }
    }

    /// Creates a bag holding a single entity.
    #[must_use]
    pub fn from_entity_data(entity_type: &str, body: Map<String, Value>) -> Self {
        let mut bag = Self::create();
        bag.add_entity_data(entity_type, body);
        bag
    }

    /// Adds (or replaces) an entity and records its baseline fingerprint.
    ///
    /// Cached reads are kept; use [`clear_cache`](Self::clear_cache) after
    /// replacing an entity that was read before.
    pub fn add_entity_data(&mut self, entity_type: &str, body: Map<String, Value>) -> &mut Self {
        let body = Value::Object(body);
        let fingerprint = Fingerprint::compute(&body, &self.config.identity_key);
        debug!(entity_type, fingerprint = %fingerprint, "Entity data added");
        self.data.insert(entity_type.to_string(), body);
        self.hashes.insert(entity_type.to_string(), fingerprint);
        self
    }

    /// Reads the value at `path`, or `default` when nothing is there.
    ///
    /// The first resolution of a path string is cached and returned by later
    /// calls until that exact path is written or removed, even if a different
    /// default is passed.
    pub fn get(&mut self, path: &str, default: impl Into<Value>) -> Result<Value> {
        let path = EntityPath::parse(path)?;

        if let Some(cached) = self.cache.get(path.as_str()) {
            trace!(path = %path, "Read cache hit");
            return Ok(cached.clone());
        }

        trace!(path = %path, "Read cache miss");
        let value = Retriever::new(&self.config.type_key).get_by_path(
            &self.data,
            &path,
            &default.into(),
        );
        self.cache.insert(path.as_str(), value.clone());
        Ok(value)
    }

    /// Reads and deserializes the value at `path`. Absent values yield `None`.
    pub fn get_as<T: DeserializeOwned>(&mut self, path: &str) -> Result<Option<T>> {
        match self.get(path, Value::Null)? {
            Value::Null => Ok(None),
            value => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    /// Writes `value` at `path`. Writing null removes the target instead.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        let path = EntityPath::parse(path)?;
        self.cache.invalidate(path.as_str());

        let value = value.into();
        if value.is_null() {
            self.remove_parsed(&path, true);
            return Ok(());
        }

        debug!(path = %path, "Setting value");
        Mutator::new(&self.config.type_key).set_by_path(&mut self.data, &path, value);
        Ok(())
    }

    /// Serializes `value` and writes it at `path`.
    pub fn set_as<T: Serialize + ?Sized>(&mut self, path: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.set(path, value)
    }

    /// Removes the value at `path`, dropping every later element for a numeric index.
    pub fn remove(&mut self, path: &str) -> Result<()> {
        self.remove_with(path, true)
    }

    /// Removes the value at `path`.
    ///
    /// With `remove_all` false, a numeric index removes only that element and
    /// the list closes the gap.
    pub fn remove_with(&mut self, path: &str, remove_all: bool) -> Result<()> {
        let path = EntityPath::parse(path)?;
        self.cache.invalidate(path.as_str());
        self.remove_parsed(&path, remove_all);
        Ok(())
    }

    fn remove_parsed(&mut self, path: &EntityPath<'_>, remove_all: bool) {
        debug!(path = %path, remove_all, "Removing value");
        Remover::new(&self.config.type_key).remove_by_path(&mut self.data, path, remove_all);
    }

    /// Returns true if the bag holds data for `entity_type`.
    #[must_use]
    pub fn has_entity_data(&self, entity_type: &str) -> bool {
        self.data
            .get(entity_type)
            .is_some_and(|body| !body.is_null())
    }

    /// Reports whether an entity changed since it was added.
    ///
    /// Returns `None` for an unknown entity type, and `Some(true)` for an
    /// entity that was created through `set` without a baseline. Identity
    /// fields are ignored at every depth.
    #[must_use]
    pub fn is_dirty(&self, entity_type: &str) -> Option<bool> {
        let body = self.data.get(entity_type).filter(|body| !body.is_null())?;
        let Some(baseline) = self.hashes.get(entity_type) else {
            return Some(true);
        };
        let current = Fingerprint::compute(body, &self.config.identity_key);
        Some(*baseline != current)
    }

    /// Borrows the whole tree.
    #[must_use]
    pub fn state(&self) -> &Tree {
        &self.data
    }

    /// Returns a copy of one entity body, or an empty object if it is unknown.
    #[must_use]
    pub fn entity_state(&self, entity_type: &str) -> Value {
        self.data
            .get(entity_type)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// Consumes the bag, returning the tree.
    #[must_use]
    pub fn into_state(self) -> Tree {
        self.data
    }

    /// Lists the entity types held by the bag.
    pub fn entity_types(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Drops every cached read.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BagConfig {
        &self.config
    }
}

impl Default for DataBag {
    fn default() -> Self {
        Self::create()
    }
}
