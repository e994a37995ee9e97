//! # Customs
//!
//! A decoding library that turns untyped boundary data (environment
//! variables, query parameters, JSON response bodies) into precisely typed
//! values, reporting every failure at its exact location.
//!
//! ## Overview
//!
//! Every boundary needs the same two guarantees: the conversion result is
//! provably well-typed, and a failure says exactly which part of the nested
//! input was invalid and why, not just "invalid input". Decoders here are
//! immutable values built by hand composition; each invocation produces a
//! [`Decoded`] result whose error is a structured tree ([`DecodeError`])
//! mirroring the input's nesting.
//!
//! Sequencing (`pipe`) and alternation (`or`) are fail-fast; the structural
//! decoders (`sequence_of`, `properties`) accumulate every child failure so
//! a user correcting a large input gets the complete list of problems in
//! one pass.
//!
//! ## Core Types
//!
//! - [`Decoder`]: a pure function from an untyped input to a typed output or
//!   a structured error
//! - [`DecodeError`]: the error tree; its shape is a coordinate into the input
//! - [`Key`]: a record key or sequence index localizing a child failure
//! - [`Decoded`]: the two-variant success/failure container every decoder
//!   returns
//!
//! ## Example
//!
//! ```rust
//! use customs::{keyed_record, number, properties, string, Decoder};
//! use serde_json::json;
//!
//! // Composed once, at configuration time
//! let address = keyed_record().pipe(
//!     properties()
//!         .key("latitude", number())
//!         .key("longitude", number())
//!         .key("city", string()),
//! );
//!
//! // Invoked per input at runtime
//! let result = address.decode(&json!({
//!     "latitude": 59.9, "longitude": 10.7, "city": "Oslo"
//! }));
//! assert!(result.is_success());
//!
//! // Every problem is reported, localized to its key
//! let result = address.decode(&json!({ "latitude": "far", "city": "Oslo" }));
//! assert!(result.is_failure());
//! ```

pub mod decoder;
pub mod error;
pub mod json;
pub mod key;

pub use decoder::{
    assert, boolean, exactly, float, is, keyed_record, matching, nullable, number, properties,
    sequence, sequence_of, string, url, Context, Decoder, Exactly, Float, Is, MapError, MapInput,
    MapOutput, Matching, Or, Pipe, Properties, SequenceOf, UrlString, ValueDecoder,
};
pub use error::{value_type_name, DecodeError, KeyErrors};
pub use json::JsonParseError;
pub use key::Key;

/// Type alias for decoding results carrying a [`DecodeError`] tree.
pub type Decoded<T> = stillwater::Validation<T, DecodeError>;
