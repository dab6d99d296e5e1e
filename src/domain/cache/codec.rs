//! Value codec shared by every cache adapter
//!
//! Backing stores only guarantee durable storage of text, so values are
//! encoded to JSON on write and decoded on read.

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::DomainError;

/// Encodes a value to its stored text form
pub fn encode<V>(value: &V) -> Result<String, DomainError>
where
    V: Serialize + ?Sized,
{
    serde_json::to_string(value).map_err(|e| DomainError::serialization(e.to_string()))
}

/// Decodes stored text back into a value
///
/// Malformed text is reported, never mapped to an absent value.
pub fn decode<V>(key: &str, data: &str) -> Result<V, DomainError>
where
    V: DeserializeOwned,
{
    serde_json::from_str(data).map_err(|e| DomainError::deserialization(key, e.to_string()))
}
