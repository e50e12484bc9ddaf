//! Dotted path grammar.
//!
//! A path always starts with the entity type, followed by a property and
//! optionally an index (numeric position or type tag) and a trailing field:
//!
//! - `person.firstName`               direct property
//! - `person.emailAddresses.0`        indexed by numeric position
//! - `person.addresses.visit`         indexed by `type` tag
//! - `person.addresses.visit.street`  indexed by `type` tag + specific field
//!
//! Parsing only splits off the entity type. The remainder is exploded by the
//! retriever, mutator and remover, each according to its own rules.

use std::fmt;

use crate::{Error, Result};

/// Segment separator.
pub const SEPARATOR: char = '.';

/// A validated path. Borrows the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityPath<'a> {
    raw: &'a str,
    entity_type: &'a str,
    remainder: &'a str,
}

impl<'a> EntityPath<'a> {
    /// Validates `raw` and splits off the entity type.
    ///
    /// Rejects empty paths, paths without a separator, paths starting or
    /// ending with a separator and paths with an empty segment (`..`).
    pub fn parse(raw: &'a str) -> Result<Self> {
        if !Self::is_valid(raw) {
            return Err(Error::InvalidPath(raw.to_string()));
        }
        let (entity_type, remainder) = raw
            .split_once(SEPARATOR)
            .ok_or_else(|| Error::InvalidPath(raw.to_string()))?;
        Ok(Self {
            raw,
            entity_type,
            remainder,
        })
    }

    /// The validity predicate shared by every operation.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        !raw.is_empty()
            && !raw.starts_with(SEPARATOR)
            && !raw.ends_with(SEPARATOR)
            && raw.contains(SEPARATOR)
            && !raw.contains("..")
    }

    /// The full path string.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Segment 0.
    #[must_use]
    pub const fn entity_type(&self) -> &'a str {
        self.entity_type
    }

    /// Everything after the entity type, uninterpreted.
    #[must_use]
    pub const fn remainder(&self) -> &'a str {
        self.remainder
    }

    /// Splits the remainder into the property and whatever follows it.
    #[must_use]
    pub fn property_and_rest(&self) -> (&'a str, Option<&'a str>) {
        match self.remainder.split_once(SEPARATOR) {
            Some((property, rest)) => (property, Some(rest)),
            None => (self.remainder, None),
        }
    }
}

impl fmt::Display for EntityPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// How a list element is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Index<'a> {
    /// Zero-based position.
    Position(usize),
    /// First element (or, for removal, every element) whose type field equals the tag.
    Tag(&'a str),
}

impl<'a> Index<'a> {
    /// Classifies a segment. All-digit segments are positions; anything else is a tag.
    ///
    /// Positions too large for `usize` saturate, so they are simply out of range.
    #[must_use]
    pub fn parse(segment: &'a str) -> Self {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            Self::Position(segment.parse().unwrap_or(usize::MAX))
        } else {
            Self::Tag(segment)
        }
    }

    /// Returns the tag, if this is a tag index.
    #[must_use]
    pub const fn tag(&self) -> Option<&'a str> {
        match self {
            Self::Tag(tag) => Some(tag),
            Self::Position(_) => None,
        }
    }
}
