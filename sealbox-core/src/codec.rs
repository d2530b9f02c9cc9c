//! Value codec: application values to and from the stored string form.
//!
//! Structured values (objects, arrays) are serialized as JSON text;
//! bare strings are stored as their raw contents so a stored `"abc"` is
//! the three bytes `abc`, not the five-byte JSON string literal. Other
//! scalars use their JSON representation (`42`, `true`, `null`).
//!
//! Decoding is the inverse with a deliberate fallback: anything that
//! does not parse as JSON is returned unchanged as a string value. The
//! store may hold heterogeneous historical data, so a malformed payload
//! is a valid opaque string, not an error — no error ever propagates
//! from [`decode`].

use serde::Serialize;
use serde_json::Value;

use crate::error::StorageResult;

/// Encodes a JSON value into its stored string form.
#[must_use]
pub fn encode(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Serializes any value and encodes it into its stored string form.
///
/// # Errors
///
/// Returns [`crate::StorageError::Serialization`] when the value cannot
/// be represented as JSON.
pub fn encode_serialize<T: Serialize>(value: &T) -> StorageResult<String> {
    let value = serde_json::to_value(value)?;
    Ok(encode(&value))
}

/// Decodes a stored string back into a JSON value.
///
/// Attempts a JSON parse first; on failure the raw string comes back
/// unchanged as `Value::String`. Infallible by policy.
#[must_use]
pub fn decode(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| {
        tracing::trace!("stored value is not JSON; returning it as an opaque string");
        Value::String(raw.to_owned())
    })
}
