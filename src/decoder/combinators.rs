//! Composition combinators.
//!
//! This module provides the decoders returned by the [`Decoder`] adapter
//! methods: fail-fast sequencing ([`Pipe`]), alternation that keeps both
//! diagnoses ([`Or`]), input, output, and error mapping, boundary labeling
//! ([`Context`]), and [`nullable`].
//!
//! `pipe` and `or` are short-circuiting by design; the structural decoders
//! in [`sequence`](crate::decoder::sequence) and
//! [`record`](crate::decoder::record) are exhaustive-accumulating. The two
//! policies are distinct on purpose and must not be unified.

use std::marker::PhantomData;

use serde_json::Value;
use stillwater::Validation;

use crate::decoder::primitives::exactly;
use crate::decoder::traits::Decoder;
use crate::error::DecodeError;
use crate::Decoded;

/// Fail-fast sequencing of two decoders.
///
/// Created by [`Decoder::pipe`]. The second decoder runs on the first's
/// output; the first decoder's failure passes through unchanged.
#[derive(Clone)]
pub struct Pipe<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pipe<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Decoder for Pipe<A, B>
where
    A: Decoder,
    B: Decoder<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn decode(&self, input: &Self::Input) -> Decoded<Self::Output> {
        match self.first.decode(input) {
            Validation::Success(mid) => self.second.decode(&mid),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

/// Alternation between two decoders over the same input.
///
/// Created by [`Decoder::or`]. The first success wins; when both branches
/// fail, the failure is a `Neither` node carrying both branch errors.
///
/// Both branches must share one input and output type. The original design
/// allowed an intersection of two input types; this is a deliberate
/// narrowing, not a bug fix.
#[derive(Clone)]
pub struct Or<A, B> {
    primary: A,
    fallback: B,
}

impl<A, B> Or<A, B> {
    pub(crate) fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A, B> Decoder for Or<A, B>
where
    A: Decoder,
    B: Decoder<Input = A::Input, Output = A::Output>,
{
    type Input = A::Input;
    type Output = A::Output;

    fn decode(&self, input: &Self::Input) -> Decoded<Self::Output> {
        let first = match self.primary.decode(input) {
            Validation::Success(value) => return Validation::Success(value),
            Validation::Failure(error) => error,
        };

        match self.fallback.decode(input) {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(second) => {
                Validation::Failure(DecodeError::neither(first, second))
            }
        }
    }
}

/// Applies a pure function to the decoded value.
///
/// Created by [`Decoder::map`]. Failures pass through unchanged.
#[derive(Clone)]
pub struct MapOutput<D, F> {
    inner: D,
    f: F,
}

impl<D, F> MapOutput<D, F> {
    pub(crate) fn new(inner: D, f: F) -> Self {
        Self { inner, f }
    }
}

impl<D, F, R> Decoder for MapOutput<D, F>
where
    D: Decoder,
    F: Fn(D::Output) -> R + Send + Sync,
{
    type Input = D::Input;
    type Output = R;

    fn decode(&self, input: &Self::Input) -> Decoded<R> {
        self.inner.decode(input).map(|value| (self.f)(value))
    }
}

/// Applies a pure function to the error.
///
/// Created by [`Decoder::map_err`]. Successes pass through unchanged.
#[derive(Clone)]
pub struct MapError<D, F> {
    inner: D,
    f: F,
}

impl<D, F> MapError<D, F> {
    pub(crate) fn new(inner: D, f: F) -> Self {
        Self { inner, f }
    }
}

impl<D, F> Decoder for MapError<D, F>
where
    D: Decoder,
    F: Fn(DecodeError) -> DecodeError + Send + Sync,
{
    type Input = D::Input;
    type Output = D::Output;

    fn decode(&self, input: &Self::Input) -> Decoded<Self::Output> {
        match self.inner.decode(input) {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure((self.f)(error)),
        }
    }
}

/// Adapts a decoder to a different input type.
///
/// Created by [`Decoder::map_input`]. The projection runs on the new input
/// before the wrapped decoder sees anything; errors and outputs pass
/// through unchanged.
pub struct MapInput<D, F, I> {
    inner: D,
    f: F,
    _input: PhantomData<fn(&I)>,
}

impl<D, F, I> MapInput<D, F, I> {
    pub(crate) fn new(inner: D, f: F) -> Self {
        Self {
            inner,
            f,
            _input: PhantomData,
        }
    }
}

impl<D: Clone, F: Clone, I> Clone for MapInput<D, F, I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            f: self.f.clone(),
            _input: PhantomData,
        }
    }
}

impl<D, F, I> Decoder for MapInput<D, F, I>
where
    D: Decoder,
    F: Fn(&I) -> D::Input + Send + Sync,
{
    type Input = I;
    type Output = D::Output;

    fn decode(&self, input: &I) -> Decoded<Self::Output> {
        self.inner.decode(&(self.f)(input))
    }
}

/// Wraps any failure in a `Label` node naming the boundary.
///
/// Created by [`Decoder::context`]. The wrapped error keeps its shape.
#[derive(Clone)]
pub struct Context<D> {
    label: String,
    inner: D,
}

impl<D> Context<D> {
    pub(crate) fn new(label: impl Into<String>, inner: D) -> Self {
        Self {
            label: label.into(),
            inner,
        }
    }
}

impl<D: Decoder> Decoder for Context<D> {
    type Input = D::Input;
    type Output = D::Output;

    fn decode(&self, input: &Self::Input) -> Decoded<Self::Output> {
        match self.inner.decode(input) {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => {
                Validation::Failure(DecodeError::label(self.label.clone(), error))
            }
        }
    }
}

/// Accepts either a value the given decoder accepts, or JSON null.
///
/// Decoded values come back as `Some`; null comes back as `None`. Built as
/// `or(map(d, Some), map(exactly(null), |_| None))`.
///
/// # Example
///
/// ```rust
/// use customs::{nullable, number, Decoder};
/// use serde_json::json;
///
/// let decoder = nullable(number());
///
/// assert_eq!(decoder.decode(&json!(5)).into_result().unwrap(), Some(5.0));
/// assert_eq!(decoder.decode(&json!(null)).into_result().unwrap(), None);
/// assert!(decoder.decode(&json!("x")).is_failure());
/// ```
pub fn nullable<D>(decoder: D) -> impl Decoder<Input = Value, Output = Option<D::Output>>
where
    D: Decoder<Input = Value>,
{
    decoder.map(Some).or(exactly(Value::Null).map(|_| None))
}
