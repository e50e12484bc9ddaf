//! Identity-insensitive fingerprints of entity bodies.
//!
//! The fingerprint is a SHA-256 over the canonical JSON form of a body after
//! every occurrence of the identity key has been removed, at any depth.
//! Object keys serialize in sorted order, so two bodies that differ only in
//! key order or in identity fields hash identically.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt;

/// Hex-encoded SHA-256 digest of a stripped entity body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Computes the fingerprint of `body`, ignoring `identity_key` everywhere.
    #[must_use]
    pub fn compute(body: &Value, identity_key: &str) -> Self {
        let stripped = strip_key(body, identity_key);
        let digest = Sha256::digest(stripped.to_string().as_bytes());
        Self(hex::encode(digest))
    }

    /// Returns the hex digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns a copy of `value` with `key` removed from every object, recursively.
#[must_use]
pub fn strip_key(value: &Value, key: &str) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| (k.clone(), strip_key(v, key)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(|v| strip_key(v, key)).collect()),
        scalar => scalar.clone(),
    }
}
