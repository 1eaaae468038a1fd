//! Cache Entry Codec
//!
//! Serializes domain records and lists to the cache's string value type and
//! back. Cached payloads are always structured JSON; they are never
//! interpreted as anything other than data.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encodes a value for storage in the cache.
pub fn encode<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Decodes a cached payload back into a domain value.
pub fn decode<T: DeserializeOwned>(raw: &str) -> serde_json::Result<T> {
    serde_json::from_str(raw)
}
