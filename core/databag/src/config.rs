//! Bag configuration.

use serde::{Deserialize, Serialize};

/// Default discriminator used for type-tag addressing.
pub const DEFAULT_TYPE_KEY: &str = "type";

/// Default identity field ignored by dirty tracking.
pub const DEFAULT_IDENTITY_KEY: &str = "_id";

/// Configuration for a [`crate::DataBag`].
///
/// Every field has a default, so a partial TOML or JSON document is enough:
///
/// ```toml
/// identity_key = "id"
/// cache_reads = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagConfig {
    /// Field that identifies list elements by content.
    #[serde(default = "default_type_key")]
    pub type_key: String,
    /// Field stripped at every depth before fingerprinting.
    #[serde(default = "default_identity_key")]
    pub identity_key: String,
    /// Whether `get` memoizes resolved values per path.
    #[serde(default = "default_cache_reads")]
    pub cache_reads: bool,
}

fn default_type_key() -> String {
    DEFAULT_TYPE_KEY.to_string()
}

fn default_identity_key() -> String {
    DEFAULT_IDENTITY_KEY.to_string()
}

fn default_cache_reads() -> bool {
    true
}

impl Default for BagConfig {
    fn default() -> Self {
        Self {
            type_key: default_type_key(),
            identity_key: default_identity_key(),
            cache_reads: default_cache_reads(),
        }
    }
}
