//! Keys that localize a decoding failure to one child of a compound input.
//!
//! This module provides the [`Key`] type used by `AtKey` errors to name
//! either a record key or a sequence index.

use std::fmt::{self, Display};

/// A coordinate into a compound input value.
///
/// Structural decoders wrap each child failure in an `AtKey` error carrying
/// a `Key`, so the error tree mirrors the nesting of the input.
///
/// # Example
///
/// ```rust
/// use customs::Key;
///
/// assert_eq!(Key::field("email").to_string(), "email");
/// assert_eq!(Key::index(3).to_string(), "[3]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A record key (e.g., `user`, `email`)
    Field(String),
    /// A sequence index (e.g., `[0]`, `[42]`)
    Index(usize),
}

impl Key {
    /// Creates a record-key coordinate.
    pub fn field(name: impl Into<String>) -> Self {
        Key::Field(name.into())
    }

    /// Creates a sequence-index coordinate.
    pub fn index(idx: usize) -> Self {
        Key::Index(idx)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Field(name) => write!(f, "{}", name),
            Key::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Field(name)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Field(name.to_string())
    }
}

impl From<usize> for Key {
    fn from(idx: usize) -> Self {
        Key::Index(idx)
    }
}
