//! Pure functions for serializing/deserializing cached views to/from bytes.
//!
//! Values are stored as JSON so cache contents stay human-readable and easy to
//! inspect while debugging.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Serializes a cached view to JSON bytes.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, SerializationError> {
    serde_json::to_vec(value).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes back into a cached view.
pub fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Photo, Product};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn fixed_product() -> Product {
        Product::new("Mechanical Keyboard", 120, 7, "electronics", "Tenkeyless")
            .with_id(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap())
            .with_created_at(Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap())
            .with_photos(vec![Photo::new("kb-1", "https://img.example/kb-1.png")])
    }

    #[test]
    fn test_product_survives_cache_encoding() {
        let product = fixed_product();

        let bytes = serialize(&product).expect("serialize should succeed");
        let decoded: Product = deserialize(&bytes).expect("deserialize should succeed");

        assert_eq!(product, decoded);
    }

    #[test]
    fn test_categories_encode_as_json_array() {
        let categories = vec!["books".to_string(), "electronics".to_string()];

        let bytes = serialize(&categories).expect("serialize should succeed");

        assert_eq!(bytes, br#"["books","electronics"]"#);
    }

    #[test]
    fn test_serialize_empty_slice() {
        let products: Vec<Product> = vec![];
        let bytes = serialize(&products).expect("serialize should succeed");
        assert_eq!(bytes, b"[]");
    }

    #[test]
    fn test_deserialize_malformed_bytes() {
        let result: Result<Product, _> = deserialize(b"not valid json");

        assert!(matches!(
            result.unwrap_err(),
            SerializationError::DeserializeFailed(_)
        ));
    }

    #[test]
    fn test_deserialize_wrong_shape() {
        let result: Result<Vec<Product>, _> = deserialize(b"{\"invalid\": true}");
        assert!(result.is_err());
    }
}
