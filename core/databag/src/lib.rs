//! Path-addressable entity bag.
//!
//! A [`DataBag`] holds the raw JSON bodies of one or more entities, keyed by
//! entity type, and lets callers read and write nested fields with a dotted
//! path:
//!
//! - `person.firstName`               direct property
//! - `person.emailAddresses.0`        list element by position
//! - `person.addresses.visit`         list element by `type` tag
//! - `person.addresses.visit.street`  field of a tagged list element
//!
//! The bag also fingerprints each body when it is added, so callers can ask
//! whether an entity changed (ignoring `_id` fields) before persisting it.
//!
//! Components:
//! - [`Retriever`] — read-only resolution with a caller default
//! - [`Mutator`] — writes, creating containers and tagged entries on demand
//! - [`Remover`] — removal with truncation, tag filtering and re-indexing
//! - [`ReadCache`] — per-path memoization of reads
//! - [`DataBag`] — composes the above behind a validated path API

mod bag;
mod cache;
mod config;
mod mutator;
mod remover;
mod retriever;
mod value;

pub use bag::DataBag;
pub use cache::ReadCache;
pub use config::{BagConfig, DEFAULT_IDENTITY_KEY, DEFAULT_TYPE_KEY};
pub use databag_types::{EntityPath, Error, Fingerprint, Index, Result};
pub use mutator::Mutator;
pub use remover::Remover;
pub use retriever::Retriever;
pub use value::is_empty;

/// The record tree: entity type → entity body.
pub type Tree = serde_json::Map<String, serde_json::Value>;
