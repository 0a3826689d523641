//! JSON codec for entity records.
//!
//! # Design
//! Thin wrappers over serde_json that map failures into `ApiError`. The
//! original demo parsed responses positionally by string splitting; a real
//! JSON parser keeps the same permissive closed-world behavior (unknown
//! fields ignored, no referential checks) while handling escaping and
//! whitespace correctly. Key order in encoded output follows struct field
//! declaration order.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// Encode a single entity as a JSON object.
pub fn encode<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Encode a slice of entities as a JSON array.
pub fn encode_many<T: Serialize>(values: &[T]) -> Result<String, ApiError> {
    serde_json::to_string(values).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Decode a single entity from a JSON object.
pub fn decode_one<T: DeserializeOwned>(json: &str) -> Result<T, ApiError> {
    serde_json::from_str(json).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a list of entities from a JSON array.
pub fn decode_many<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, ApiError> {
    serde_json::from_str(json).map_err(|e| ApiError::Decode(e.to_string()))
}
