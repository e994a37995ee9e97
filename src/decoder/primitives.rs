//! Primitive decoders.
//!
//! Leaf decoders that test the shape of a JSON value and either yield the
//! correspondingly typed value or fail with a single `UnexpectedInput`
//! mismatch. Everything else in the crate is built by composing these.

use regex::Regex;
use serde_json::{Map, Value};
use stillwater::Validation;
use url::Url;

use crate::decoder::traits::Decoder;
use crate::error::DecodeError;
use crate::Decoded;

/// A decoder built from a hint and a refinement function.
///
/// See [`is`].
#[derive(Clone)]
pub struct Is<F> {
    hint: String,
    refine: F,
}

/// Creates a decoder from a human-readable hint and a refinement.
///
/// The refinement plays the role of a type-narrowing predicate: it returns
/// `Some` with the typed view of the input when the input has the required
/// shape, and `None` otherwise. On `None` the decoder fails with
/// `UnexpectedInput { expected: hint, input }`.
///
/// # Example
///
/// ```rust
/// use customs::{is, Decoder};
/// use serde_json::{json, Value};
///
/// let even = is("even number", |v: &Value| {
///     v.as_i64().filter(|n| n % 2 == 0)
/// });
///
/// assert!(even.decode(&json!(4)).is_success());
/// assert!(even.decode(&json!(3)).is_failure());
/// ```
pub fn is<O, F>(hint: impl Into<String>, refine: F) -> Is<F>
where
    F: Fn(&Value) -> Option<O> + Send + Sync,
{
    Is {
        hint: hint.into(),
        refine,
    }
}

impl<O, F> Decoder for Is<F>
where
    F: Fn(&Value) -> Option<O> + Send + Sync,
{
    type Input = Value;
    type Output = O;

    fn decode(&self, input: &Value) -> Decoded<O> {
        match (self.refine)(input) {
            Some(value) => Validation::Success(value),
            None => Validation::Failure(DecodeError::unexpected(
                self.hint.clone(),
                input.clone(),
            )),
        }
    }
}

/// Decodes a JSON number into an `f64`.
///
/// Every JSON number is coerced to `f64`, including integers: `36` decodes
/// as `36.0`, and integers above 2^53 lose precision. This matches the JSON
/// number model the inputs come from.
pub fn number() -> impl Decoder<Input = Value, Output = f64> + Clone {
    is("number", Value::as_f64)
}

/// Decodes a JSON string into an owned `String`.
pub fn string() -> impl Decoder<Input = Value, Output = String> + Clone {
    is("string", |v: &Value| v.as_str().map(str::to_string))
}

/// Decodes a JSON boolean into a `bool`.
pub fn boolean() -> impl Decoder<Input = Value, Output = bool> + Clone {
    is("boolean", Value::as_bool)
}

/// Decodes a JSON array into its raw elements.
///
/// Checks shape only; pipe into [`sequence_of`](crate::sequence_of) to
/// decode the elements.
pub fn sequence() -> impl Decoder<Input = Value, Output = Vec<Value>> + Clone {
    is("sequence", |v: &Value| v.as_array().cloned())
}

/// Decodes a JSON object into its raw key/value entries.
///
/// Checks shape only; pipe into [`properties`](crate::properties) to decode
/// the declared keys.
pub fn keyed_record() -> impl Decoder<Input = Value, Output = Map<String, Value>> + Clone {
    is("keyed record", |v: &Value| v.as_object().cloned())
}

/// A decoder that accepts one fixed value.
///
/// See [`exactly`].
#[derive(Clone)]
pub struct Exactly {
    expected: Value,
}

/// Creates a decoder that succeeds only when the input equals `expected`.
///
/// # Example
///
/// ```rust
/// use customs::{exactly, Decoder};
/// use serde_json::json;
///
/// let null_only = exactly(json!(null));
/// assert!(null_only.decode(&json!(null)).is_success());
/// assert!(null_only.decode(&json!(0)).is_failure());
/// ```
pub fn exactly(expected: Value) -> Exactly {
    Exactly { expected }
}

impl Decoder for Exactly {
    type Input = Value;
    type Output = Value;

    fn decode(&self, input: &Value) -> Decoded<Value> {
        if *input == self.expected {
            Validation::Success(input.clone())
        } else {
            Validation::Failure(DecodeError::unexpected(
                format!("exactly {}", self.expected),
                input.clone(),
            ))
        }
    }
}

/// A string decoder refined by a regular expression.
///
/// See [`matching`].
#[derive(Clone)]
pub struct Matching {
    hint: String,
    regex: Regex,
}

/// Creates a decoder over strings that requires a regex match.
///
/// The hint names the refined type for error reporting (e.g. `"IPAddress"`).
/// Returns an error if the pattern is invalid. Pipe after
/// [`string`] to apply it to a JSON value.
///
/// # Example
///
/// ```rust
/// use customs::{matching, string, Decoder};
/// use serde_json::json;
///
/// let ip = string().pipe(matching("IPAddress", r"^([0-9A-Fa-f:]+|[0-9.]+)$").unwrap());
///
/// assert!(ip.decode(&json!("72.65.255.176")).is_success());
/// assert!(ip.decode(&json!("not an ip")).is_failure());
/// ```
pub fn matching(hint: impl Into<String>, pattern: &str) -> Result<Matching, regex::Error> {
    Ok(Matching {
        hint: hint.into(),
        regex: Regex::new(pattern)?,
    })
}

impl Decoder for Matching {
    type Input = String;
    type Output = String;

    fn decode(&self, input: &String) -> Decoded<String> {
        if self.regex.is_match(input) {
            Validation::Success(input.clone())
        } else {
            Validation::Failure(DecodeError::unexpected(
                self.hint.clone(),
                Value::String(input.clone()),
            ))
        }
    }
}

/// A decoder for numeric strings.
///
/// See [`float`].
#[derive(Clone)]
pub struct Float;

/// Creates a decoder that parses a string into an `f64`.
///
/// Boundary inputs like environment variables and query parameters arrive
/// as strings even when they mean numbers; this is the content check that
/// follows the shape check.
///
/// # Example
///
/// ```rust
/// use customs::{float, string, Decoder};
/// use serde_json::json;
///
/// let latitude = string().pipe(float());
///
/// assert_eq!(latitude.decode(&json!("59.9")).into_result().unwrap(), 59.9);
/// assert!(latitude.decode(&json!("north")).is_failure());
/// ```
pub fn float() -> Float {
    Float
}

impl Decoder for Float {
    type Input = String;
    type Output = f64;

    fn decode(&self, input: &String) -> Decoded<f64> {
        match input.parse::<f64>() {
            Ok(value) => Validation::Success(value),
            Err(_) => Validation::Failure(DecodeError::unexpected(
                "float",
                Value::String(input.clone()),
            )),
        }
    }
}

/// A decoder for URL strings.
///
/// See [`url`].
#[derive(Clone)]
pub struct UrlString;

/// Creates a decoder that parses a string into a [`Url`].
///
/// # Example
///
/// ```rust
/// use customs::{string, url, Decoder};
/// use serde_json::json;
///
/// let base = string().pipe(url());
///
/// assert!(base.decode(&json!("https://example.com/pets")).is_success());
/// assert!(base.decode(&json!("not a url")).is_failure());
/// ```
pub fn url() -> UrlString {
    UrlString
}

impl Decoder for UrlString {
    type Input = String;
    type Output = Url;

    fn decode(&self, input: &String) -> Decoded<Url> {
        match Url::parse(input) {
            Ok(parsed) => Validation::Success(parsed),
            Err(_) => Validation::Failure(DecodeError::unexpected(
                "URL",
                Value::String(input.clone()),
            )),
        }
    }
}
