//! Parsing raw text into untyped JSON values.
//!
//! Decoders operate on already-parsed values; this is the thin parse step
//! that boundary code (response bodies, request fields) feeds them from.

use serde_json::Value;

/// The raw text was not valid JSON.
#[derive(Debug, thiserror::Error)]
#[error("invalid json: {0}")]
pub struct JsonParseError(#[from] serde_json::Error);

/// Parses raw text into an untyped [`Value`] ready for decoding.
///
/// # Example
///
/// ```rust
/// use customs::{json, keyed_record, Decoder};
///
/// let value = json::parse(r#"{ "a": 1 }"#).unwrap();
/// assert!(keyed_record().decode(&value).is_success());
///
/// assert!(json::parse("{ not json").is_err());
/// ```
pub fn parse(raw: &str) -> Result<Value, JsonParseError> {
    Ok(serde_json::from_str(raw)?)
}
