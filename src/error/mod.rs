//! Error types for decoding failures.
//!
//! This module provides the structured error tree produced by failing
//! decoders, along with its text renderer.

mod decode_error;

pub use decode_error::{value_type_name, DecodeError, KeyErrors};
