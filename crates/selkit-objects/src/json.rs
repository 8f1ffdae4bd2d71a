//! JSON passthrough.
//!
//! Both functions hand straight to `serde_json`. Decoding targets a concrete
//! type, so the result carries that type's methods (e.g. a decoded
//! [`Rectangle`](crate::Rectangle) has `area()`).

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure to encode or decode JSON.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value could not be represented as JSON.
    #[error("failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// The text was not valid JSON for the requested type.
    #[error("failed to decode JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Encode `value` as compact JSON.
///
/// # Errors
///
/// Returns [`JsonError::Encode`] if serialization fails, e.g. for a map with
/// non-string keys.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Encode)
}

/// Decode `text` into a `T`.
///
/// # Errors
///
/// Returns [`JsonError::Decode`] if `text` is not valid JSON or does not
/// match the shape of `T`.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    serde_json::from_str(text).map_err(JsonError::Decode)
}
