//! Core type definitions for DataBag.
//!
//! This crate defines the path and digest types shared by the DataBag
//! engine and its front-ends:
//! - [`EntityPath`] — the validated dotted path (`person.addresses.visit.street`)
//! - [`Index`] — positional or type-tag addressing of a list element
//! - [`Fingerprint`] — identity-insensitive digest of an entity body
//!
//! Resolution of paths against record trees lives in the `databag` crate.

mod fingerprint;
mod path;

pub use fingerprint::{strip_key, Fingerprint};
pub use path::{EntityPath, Index, SEPARATOR};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in DataBag operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path string violates the path grammar.
    #[error("invalid path provided: {0}")]
    InvalidPath(String),

    /// A typed value could not be converted to or from JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if this error was raised by path validation.
    #[must_use]
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath(_))
    }
}
