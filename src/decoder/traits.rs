//! The decoder abstraction.
//!
//! This module provides the [`Decoder`] trait that every primitive and
//! combinator implements, and the type-erased [`ValueDecoder`] trait used to
//! mix field decoders with different output types in one record schema.

use std::sync::Arc;

use serde_json::Value;

use crate::decoder::combinators::{Context, MapError, MapInput, MapOutput, Or, Pipe};
use crate::error::DecodeError;
use crate::Decoded;

/// A pure conversion from an untyped input into a typed output or a
/// structured error.
///
/// A decoder is an immutable value: it is composed once, at configuration
/// time, and then invoked per input. Decoding never blocks, performs I/O, or
/// mutates shared state, so a composed decoder can be shared freely across
/// threads (the `Send + Sync` bounds make this usable behind `Arc` and in
/// trait objects).
///
/// Composition is done with the provided adapter methods, which consume
/// their operands and return a new decoder value.
///
/// # Example
///
/// ```rust
/// use customs::{keyed_record, number, properties, Decoder};
/// use serde_json::json;
///
/// let decoder = keyed_record().pipe(properties().key("port", number()));
///
/// let result = decoder.decode(&json!({ "port": 8080 }));
/// assert!(result.is_success());
/// ```
pub trait Decoder: Send + Sync {
    /// The input type this decoder inspects.
    type Input;

    /// The output type produced on success.
    type Output;

    /// Decodes one input value.
    ///
    /// Returns `Validation::Success` with the exactly-typed value, or
    /// `Validation::Failure` with an error tree that pinpoints what part of
    /// the input was invalid and why.
    fn decode(&self, input: &Self::Input) -> Decoded<Self::Output>;

    /// Sequences `next` after this decoder, fail-fast.
    ///
    /// `next` runs on this decoder's output; if this decoder fails, its
    /// error passes through unchanged and `next` never runs. Used to chain
    /// "check shape" into "check content":
    ///
    /// ```rust
    /// use customs::{keyed_record, properties, string, Decoder};
    /// use serde_json::json;
    ///
    /// let decoder = keyed_record().pipe(properties().key("name", string()));
    /// assert!(decoder.decode(&json!({ "name": "Ada" })).is_success());
    /// assert!(decoder.decode(&json!(42)).is_failure());
    /// ```
    fn pipe<D>(self, next: D) -> Pipe<Self, D>
    where
        Self: Sized,
        D: Decoder<Input = Self::Output>,
    {
        Pipe::new(self, next)
    }

    /// Tries this decoder first, then `other` on the same input.
    ///
    /// The first success wins. When both alternatives fail, the failure
    /// carries both branch errors so the caller can report why each
    /// interpretation was rejected.
    fn or<D>(self, other: D) -> Or<Self, D>
    where
        Self: Sized,
        D: Decoder<Input = Self::Input, Output = Self::Output>,
    {
        Or::new(self, other)
    }

    /// Applies `f` to the decoded value; failures pass through unchanged.
    fn map<F, R>(self, f: F) -> MapOutput<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> R + Send + Sync,
    {
        MapOutput::new(self, f)
    }

    /// Adapts this decoder to a different input type.
    ///
    /// `f` projects the new input into the input this decoder understands,
    /// running before the decoder itself. This is how a decoder written
    /// against one representation is reused at a boundary that hands over
    /// another, for example pulling a single field out of a parsed query:
    ///
    /// ```rust
    /// use customs::{string, Decoder};
    ///
    /// struct Query {
    ///     name: String,
    /// }
    ///
    /// let decoder = string()
    ///     .map_input(|query: &Query| serde_json::Value::String(query.name.clone()));
    ///
    /// let query = Query { name: "Luna".to_string() };
    /// assert!(decoder.decode(&query).is_success());
    /// ```
    fn map_input<F, I>(self, f: F) -> MapInput<Self, F, I>
    where
        Self: Sized,
        F: Fn(&I) -> Self::Input + Send + Sync,
    {
        MapInput::new(self, f)
    }

    /// Applies `f` to the error; successes pass through unchanged.
    fn map_err<F>(self, f: F) -> MapError<Self, F>
    where
        Self: Sized,
        F: Fn(DecodeError) -> DecodeError + Send + Sync,
    {
        MapError::new(self, f)
    }

    /// Tags any failure with a boundary label (e.g. `"process.env"`).
    ///
    /// The wrapped error keeps its shape; the label only identifies which
    /// top-level source the failure came from.
    fn context(self, label: impl Into<String>) -> Context<Self>
    where
        Self: Sized,
    {
        Context::new(label, self)
    }
}

impl<'a, D: Decoder + ?Sized> Decoder for &'a D {
    type Input = D::Input;
    type Output = D::Output;

    fn decode(&self, input: &Self::Input) -> Decoded<Self::Output> {
        (**self).decode(input)
    }
}

impl<D: Decoder + ?Sized> Decoder for Box<D> {
    type Input = D::Input;
    type Output = D::Output;

    fn decode(&self, input: &Self::Input) -> Decoded<Self::Output> {
        (**self).decode(input)
    }
}

impl<D: Decoder + ?Sized> Decoder for Arc<D> {
    type Input = D::Input;
    type Output = D::Output;

    fn decode(&self, input: &Self::Input) -> Decoded<Self::Output> {
        (**self).decode(input)
    }
}

/// A type-erased decoder over JSON values.
///
/// `ValueDecoder` lets decoders with different output types live together in
/// one record schema by converting each output back into a
/// `serde_json::Value`. Any `Decoder` over `Value` whose output converts
/// into `Value` implements it automatically.
///
/// # Example
///
/// ```rust
/// use customs::{number, string, ValueDecoder};
///
/// let fields: Vec<Box<dyn ValueDecoder>> = vec![
///     Box::new(string()),
///     Box::new(number()),
/// ];
/// ```
pub trait ValueDecoder: Send + Sync {
    /// Decodes one input and returns the result as a `serde_json::Value`.
    fn decode_value(&self, input: &Value) -> Decoded<Value>;
}

/// Blanket implementation: every JSON-input decoder with a
/// `Value`-convertible output is a `ValueDecoder`.
impl<D> ValueDecoder for D
where
    D: Decoder<Input = Value>,
    D::Output: Into<Value>,
{
    fn decode_value(&self, input: &Value) -> Decoded<Value> {
        self.decode(input).map(Into::into)
    }
}
