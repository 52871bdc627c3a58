// ⚠️ Error Types - One failure mode per utility
// Degenerate inputs (empty sequences, empty words) never land here

use thiserror::Error;

/// Result type alias using the library's error type.
pub type Result<T> = std::result::Result<T, UtilError>;

#[derive(Error, Debug)]
pub enum UtilError {
    /// Requested key is not a field of the record
    #[error("Invalid key: '{key}' is not present on the record")]
    InvalidKey { key: String },

    /// Shape discriminant matched neither known variant
    #[error("Unrecognized shape variant: '{tag}'")]
    UnrecognizedVariant { tag: String },

    /// Shape value carried no discriminant field at all
    #[error("Shape has no 'kind' (or legacy 'shape') discriminant")]
    MissingDiscriminant,

    /// Variant fields could not be read
    #[error("Invalid shape payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// Dynamic accessor was handed something other than an object
    #[error("Expected a record (JSON object), got {0}")]
    NotARecord(String),
}

impl UtilError {
    pub fn invalid_key(key: impl Into<String>) -> Self {
        UtilError::InvalidKey { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = UtilError::invalid_key("address");
        assert_eq!(err.to_string(), "Invalid key: 'address' is not present on the record");

        let err = UtilError::UnrecognizedVariant { tag: "triangle".to_string() };
        assert!(err.to_string().contains("triangle"));

        let err = UtilError::MissingDiscriminant;
        assert!(err.to_string().contains("'kind'"));
        assert!(err.to_string().contains("'shape'"));
    }
}
