//! Keyed-record decoding with full error accumulation.
//!
//! This module provides [`Properties`], which decodes a declared set of keys
//! out of a raw record and reports every failing key, not just the first.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::Validation;

use crate::decoder::traits::{Decoder, ValueDecoder};
use crate::error::DecodeError;
use crate::Decoded;

/// A decoder for keyed records with one declared decoder per key.
///
/// Keys are checked in declaration order. For each declared key: an absent
/// key records `AtKey(key, Missing)` (distinct from present-but-wrong-type);
/// a present key is decoded with its decoder and a failure records
/// `AtKey(key, error)`. All failures accumulate into one `KeyItemsFailed`.
/// Keys present in the input but not declared are ignored; they appear in
/// neither the output nor any error. On success the output record contains
/// precisely the declared keys with their decoded values.
///
/// Pipe after [`keyed_record`](crate::keyed_record) to apply it to a JSON
/// value.
///
/// # Example
///
/// ```rust
/// use customs::{keyed_record, number, properties, string, Decoder};
/// use serde_json::json;
///
/// let decoder = keyed_record().pipe(
///     properties()
///         .key("name", string())
///         .key("age", number()),
/// );
///
/// let result = decoder.decode(&json!({ "name": "Ada", "age": 36 }));
/// assert!(result.is_success());
///
/// // Missing key and wrong-typed key are both reported
/// let result = decoder.decode(&json!({ "age": "old" }));
/// assert!(result.is_failure());
/// ```
pub struct Properties {
    fields: IndexMap<String, Box<dyn ValueDecoder>>,
}

/// Creates an empty record schema; declare keys with [`Properties::key`].
pub fn properties() -> Properties {
    Properties::new()
}

impl Properties {
    /// Creates a record schema with no declared keys.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Declares a key and the decoder for its value.
    ///
    /// The decoder's output is stored back as a `serde_json::Value`, which
    /// is what lets keys with different output types share one schema.
    pub fn key<D>(mut self, name: impl Into<String>, decoder: D) -> Self
    where
        D: Decoder<Input = Value> + 'static,
        D::Output: Into<Value>,
    {
        self.fields.insert(name.into(), Box::new(decoder));
        self
    }
}

impl Default for Properties {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for Properties {
    type Input = Map<String, Value>;
    type Output = Map<String, Value>;

    fn decode(&self, input: &Map<String, Value>) -> Decoded<Map<String, Value>> {
        let mut decoded = Map::new();
        let mut failures = Vec::new();

        for (name, field) in &self.fields {
            match input.get(name) {
                None => failures.push(DecodeError::at_key(name.clone(), DecodeError::Missing)),
                Some(raw) => match field.decode_value(raw) {
                    Validation::Success(value) => {
                        decoded.insert(name.clone(), value);
                    }
                    Validation::Failure(error) => {
                        failures.push(DecodeError::at_key(name.clone(), error));
                    }
                },
            }
        }

        if failures.is_empty() {
            Validation::Success(decoded)
        } else {
            Validation::Failure(DecodeError::key_items(failures))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::primitives::{number, string};
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().expect("test fixture must be an object").clone()
    }

    #[test]
    fn test_empty_schema_accepts_anything() {
        let result = properties().decode(&record(json!({ "extra": 1 })));
        assert_eq!(result.into_result().unwrap(), Map::new());
    }

    #[test]
    fn test_missing_key_reported() {
        let error = properties()
            .key("name", string())
            .decode(&record(json!({})))
            .into_result()
            .unwrap_err();

        assert_eq!(
            error,
            DecodeError::key_items(vec![DecodeError::at_key("name", DecodeError::Missing)])
        );
    }

    #[test]
    fn test_missing_distinct_from_wrong_type() {
        let schema = properties().key("age", number());

        let missing = schema.decode(&record(json!({}))).into_result().unwrap_err();
        let wrong = schema
            .decode(&record(json!({ "age": "old" })))
            .into_result()
            .unwrap_err();

        assert_eq!(
            missing,
            DecodeError::key_items(vec![DecodeError::at_key("age", DecodeError::Missing)])
        );
        assert_eq!(
            wrong,
            DecodeError::key_items(vec![DecodeError::at_key(
                "age",
                DecodeError::unexpected("number", json!("old")),
            )])
        );
    }

    #[test]
    fn test_failures_accumulate_in_declaration_order() {
        let error = properties()
            .key("name", string())
            .key("age", number())
            .decode(&record(json!({ "age": true })))
            .into_result()
            .unwrap_err();

        assert_eq!(
            error,
            DecodeError::key_items(vec![
                DecodeError::at_key("name", DecodeError::Missing),
                DecodeError::at_key("age", DecodeError::unexpected("number", json!(true))),
            ])
        );
    }

    #[test]
    fn test_undeclared_keys_ignored() {
        let result = properties()
            .key("name", string())
            .decode(&record(json!({ "name": "Ada", "extra": 42 })));

        let decoded = result.into_result().unwrap();
        assert_eq!(Value::Object(decoded), json!({ "name": "Ada" }));
    }

    #[test]
    fn test_output_contains_precisely_declared_keys() {
        let result = properties()
            .key("name", string())
            .key("age", number())
            .decode(&record(json!({ "name": "Ada", "age": 36, "extra": true })));

        let decoded = result.into_result().unwrap();
        assert_eq!(Value::Object(decoded), json!({ "name": "Ada", "age": 36.0 }));
    }
}
