//! Sequence decoding with full error accumulation.
//!
//! This module provides [`SequenceOf`], which applies one element decoder to
//! every element of a raw sequence and reports every failing index, not just
//! the first.

use serde_json::Value;
use stillwater::Validation;

use crate::decoder::traits::Decoder;
use crate::error::DecodeError;
use crate::Decoded;

/// A decoder that applies an element decoder to every element of a sequence.
///
/// See [`sequence_of`].
#[derive(Clone)]
pub struct SequenceOf<D> {
    element: D,
}

/// Creates a decoder over raw sequences that decodes every element.
///
/// Failing elements do not stop the pass: each one is recorded as an
/// `AtKey(index, error)` and the whole decode fails with a single
/// `KeyItemsFailed` listing every failure in ascending index order. A user
/// correcting a large input gets the complete list of problems in one pass.
/// Only when no element fails does the decoder succeed, with the decoded
/// elements in original order.
///
/// Pipe after [`sequence`](crate::sequence) to apply it to a JSON value.
///
/// # Example
///
/// ```rust
/// use customs::{number, sequence, sequence_of, Decoder};
/// use serde_json::json;
///
/// let decoder = sequence().pipe(sequence_of(number()));
///
/// let result = decoder.decode(&json!([1, 2, 3]));
/// assert_eq!(result.into_result().unwrap(), vec![1.0, 2.0, 3.0]);
///
/// // Both bad elements are reported, not just the first
/// let result = decoder.decode(&json!([1, "a", true]));
/// assert!(result.is_failure());
/// ```
pub fn sequence_of<D>(element: D) -> SequenceOf<D>
where
    D: Decoder<Input = Value>,
{
    SequenceOf { element }
}

impl<D> Decoder for SequenceOf<D>
where
    D: Decoder<Input = Value>,
{
    type Input = Vec<Value>;
    type Output = Vec<D::Output>;

    fn decode(&self, input: &Vec<Value>) -> Decoded<Vec<D::Output>> {
        let mut decoded = Vec::with_capacity(input.len());
        let mut failures = Vec::new();

        for (index, raw) in input.iter().enumerate() {
            match self.element.decode(raw) {
                Validation::Success(value) => decoded.push(value),
                Validation::Failure(error) => {
                    failures.push(DecodeError::at_key(index, error));
                }
            }
        }

        if failures.is_empty() {
            Validation::Success(decoded)
        } else {
            Validation::Failure(DecodeError::key_items(failures))
        }
    }
}
