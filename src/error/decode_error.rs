//! The decoding error tree.
//!
//! This module provides [`DecodeError`], a closed family of error variants
//! whose shape mirrors the nesting of the input that was being decoded, and
//! [`KeyErrors`], the non-empty accumulation produced by structural decoders.

use std::fmt::{self, Display};

use serde_json::Value;
use stillwater::prelude::*;

use crate::key::Key;

/// A structured description of why decoding failed.
///
/// Every failing decoder produces a `DecodeError`. Compound decoders wrap
/// their children's errors in `AtKey`/`KeyItemsFailed` nodes, so the tree is
/// a precise coordinate into the original input: `AtKey` nesting matches
/// record/sequence nesting exactly.
///
/// Rendering to text is the `Display` implementation; the error itself is
/// plain data and carries no formatting decisions.
///
/// # Example
///
/// ```rust
/// use customs::DecodeError;
/// use serde_json::json;
///
/// let error = DecodeError::key_items(vec![DecodeError::at_key(
///     "age",
///     DecodeError::unexpected("number", json!("old")),
/// )]);
///
/// assert_eq!(error.to_string(), "  age: expected number, got \"old\": string");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The input did not have the required shape.
    ///
    /// `expected` is a human-readable hint (`"number"`, `"IPAddress"`);
    /// `input` is the offending raw value.
    UnexpectedInput {
        /// Description of what was required.
        expected: String,
        /// The raw value that was rejected.
        input: Value,
    },

    /// A required record key was absent.
    ///
    /// Distinct from present-but-wrong-type, which is an `UnexpectedInput`
    /// under the same key.
    Missing,

    /// Localizes a child error to one record key or sequence index.
    AtKey {
        /// The coordinate of the failing child.
        key: Key,
        /// Why that child failed.
        error: Box<DecodeError>,
    },

    /// The accumulated failures of a structural decoder, one `AtKey` per
    /// failing child, in input order.
    KeyItemsFailed(KeyErrors),

    /// A free-form context tag attached at a decoder boundary
    /// (e.g. `"process.env"`, `"request.ip"`).
    Label {
        /// The boundary tag.
        label: String,
        /// The wrapped error, unaltered.
        error: Box<DecodeError>,
    },

    /// Both branches of an alternation failed; both diagnoses are kept.
    Neither {
        /// The first branch's error.
        first: Box<DecodeError>,
        /// The second branch's error.
        second: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Creates a leaf mismatch error.
    pub fn unexpected(expected: impl Into<String>, input: Value) -> Self {
        DecodeError::UnexpectedInput {
            expected: expected.into(),
            input,
        }
    }

    /// Localizes `error` to the child named by `key`.
    pub fn at_key(key: impl Into<Key>, error: DecodeError) -> Self {
        DecodeError::AtKey {
            key: key.into(),
            error: Box::new(error),
        }
    }

    /// Wraps accumulated child failures.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty. Structural decoders only construct this
    /// node after collecting at least one failure.
    pub fn key_items(errors: Vec<DecodeError>) -> Self {
        DecodeError::KeyItemsFailed(KeyErrors::from_vec(errors))
    }

    /// Tags `error` with a boundary label without altering its shape.
    pub fn label(label: impl Into<String>, error: DecodeError) -> Self {
        DecodeError::Label {
            label: label.into(),
            error: Box::new(error),
        }
    }

    /// Pairs the errors of two exhausted alternatives.
    pub fn neither(first: DecodeError, second: DecodeError) -> Self {
        DecodeError::Neither {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            DecodeError::UnexpectedInput { expected, input } => {
                write!(
                    f,
                    "expected {}, got {}: {}",
                    expected,
                    input,
                    value_type_name(input)
                )
            }
            DecodeError::Missing => write!(f, "missing"),
            DecodeError::AtKey { key, error } => {
                write!(f, "{:width$}{}", "", key, width = depth * 2)?;
                if matches!(error.as_ref(), DecodeError::KeyItemsFailed(_)) {
                    writeln!(f, ":")?;
                } else {
                    write!(f, ": ")?;
                }
                error.render(f, depth)
            }
            DecodeError::KeyItemsFailed(errors) => {
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    error.render(f, depth + 1)?;
                }
                Ok(())
            }
            DecodeError::Label { label, error } => {
                if matches!(error.as_ref(), DecodeError::KeyItemsFailed(_)) {
                    writeln!(f, "[{}]", label)?;
                } else {
                    write!(f, "[{}] ", label)?;
                }
                error.render(f, depth)
            }
            DecodeError::Neither { first, second } => {
                write!(f, "no alternative matched:")?;
                for branch in [first, second] {
                    writeln!(f)?;
                    match branch.as_ref() {
                        e @ (DecodeError::AtKey { .. } | DecodeError::KeyItemsFailed(_)) => {
                            e.render(f, depth)?
                        }
                        e => {
                            write!(f, "{:width$}", "", width = (depth + 1) * 2)?;
                            e.render(f, depth + 1)?;
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

impl std::error::Error for DecodeError {}

// DecodeError is Send + Sync since all fields are owned types. These
// assertions keep that true if the variants change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<DecodeError>();
    assert_sync::<DecodeError>();
};

/// A non-empty, ordered collection of child failures.
///
/// `KeyErrors` wraps a `NonEmptyVec<DecodeError>` so a `KeyItemsFailed` node
/// can never be constructed without at least one failure. Structural
/// decoders push one `AtKey` entry per failing child, in input order.
///
/// # Example
///
/// ```rust
/// use customs::{DecodeError, KeyErrors};
///
/// let errors = KeyErrors::from_vec(vec![
///     DecodeError::at_key("name", DecodeError::Missing),
///     DecodeError::at_key("age", DecodeError::Missing),
/// ]);
/// assert_eq!(errors.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KeyErrors(Box<NonEmptyVec<DecodeError>>);

impl KeyErrors {
    /// Creates a `KeyErrors` containing a single failure.
    pub fn single(error: DecodeError) -> Self {
        Self(Box::new(NonEmptyVec::singleton(error)))
    }

    /// Creates a `KeyErrors` from a `Vec<DecodeError>`.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec is empty.
    pub fn from_vec(errors: Vec<DecodeError>) -> Self {
        Self(Box::new(
            NonEmptyVec::from_vec(errors).expect("KeyErrors requires at least one error"),
        ))
    }

    /// Returns the number of failures in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false since this collection is guaranteed non-empty.
    ///
    /// This method exists for API consistency but always returns false.
    pub fn is_empty(&self) -> bool {
        false // NonEmptyVec is never empty
    }

    /// Returns an iterator over the contained failures.
    pub fn iter(&self) -> impl Iterator<Item = &DecodeError> {
        self.0.iter()
    }

    /// Returns the first failure in the collection.
    pub fn first(&self) -> &DecodeError {
        self.0.head()
    }

    /// Converts this collection into a `Vec<DecodeError>`.
    pub fn into_vec(self) -> Vec<DecodeError> {
        self.0.into_vec()
    }
}

impl IntoIterator for KeyErrors {
    type Item = DecodeError;
    type IntoIter = std::vec::IntoIter<DecodeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyErrors {
    type Item = &'a DecodeError;
    type IntoIter = Box<dyn Iterator<Item = &'a DecodeError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

/// Returns the JSON type name for a value.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
