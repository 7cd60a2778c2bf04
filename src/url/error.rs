//! Error types for query string and filter codec operations
//!
//! None of these escape the codec's read path: a failed decode falls back
//! to the initial filters and the error is handed back for reporting.

use thiserror::Error;

/// Errors that can occur while decoding the location
#[derive(Debug, Error)]
pub enum CodecError {
    /// The query string could not be parsed
    #[error("Invalid query string: {0}")]
    Query(String),

    /// The filters parameter is not valid JSON
    #[error("Invalid filters JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The filters parameter is JSON of an unsupported shape
    #[error("Unexpected filters shape: {0}")]
    UnexpectedShape(String),
}

impl From<serde_urlencoded::de::Error> for CodecError {
    fn from(err: serde_urlencoded::de::Error) -> Self {
        Self::Query(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_display() {
        let err: CodecError = serde_json::from_str::<serde_json::Value>("not-json")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("Invalid filters JSON"));
    }

    #[test]
    fn test_unexpected_shape_display() {
        let err = CodecError::UnexpectedShape("expected an object or array".to_string());
        assert_eq!(
            err.to_string(),
            "Unexpected filters shape: expected an object or array"
        );
    }
}
