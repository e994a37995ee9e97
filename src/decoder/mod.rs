//! Decoders and their composition.
//!
//! This module provides the [`Decoder`] trait, the primitive decoders, the
//! composition combinators, the accumulating structural decoders, and the
//! [`assert`] adapter for hard boundaries.
//!
//! # Example
//!
//! ```rust
//! use customs::{keyed_record, number, properties, string, Decoder};
//! use serde_json::json;
//!
//! let decoder = keyed_record()
//!     .pipe(properties().key("city", string()).key("latitude", number()))
//!     .context("geocoder response");
//!
//! assert!(decoder.decode(&json!({ "city": "Oslo", "latitude": 59.9 })).is_success());
//! ```

mod combinators;
mod primitives;
mod record;
mod sequence;
mod traits;

pub use combinators::{nullable, Context, MapError, MapInput, MapOutput, Or, Pipe};
pub use primitives::{
    boolean, exactly, float, is, keyed_record, matching, number, sequence, string, url, Exactly,
    Float, Is, Matching, UrlString,
};
pub use record::{properties, Properties};
pub use sequence::{sequence_of, SequenceOf};
pub use traits::{Decoder, ValueDecoder};

use stillwater::Validation;

/// Adapts a decoder into a value-or-abort function for hard boundaries.
///
/// The returned closure yields the decoded value directly on success and
/// panics on failure with the rendered error tree as the message. Use it
/// only where there is no further result-based handling and failure must
/// stop the operation, such as reading configuration at process startup;
/// everywhere else, stay with [`Decoder::decode`].
///
/// # Example
///
/// ```rust
/// use customs::{assert, number};
/// use serde_json::json;
///
/// let require_number = assert(number());
/// assert_eq!(require_number(&json!(5)), 5.0);
/// ```
///
/// ```rust,should_panic
/// use customs::{assert, number};
/// use serde_json::json;
///
/// let require_number = assert(number());
/// require_number(&json!("x")); // panics: expected number, got "x": string
/// ```
pub fn assert<D: Decoder>(decoder: D) -> impl Fn(&D::Input) -> D::Output {
    move |input| match decoder.decode(input) {
        Validation::Success(value) => value,
        Validation::Failure(error) => panic!("decoding failed:\n{}", error),
    }
}
