//! Error types for tokenmock
//!
//! Generation itself cannot fail. These variants cover the layers around it:
//! configuration checks, JSON serialization and writing the report out.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "message")]
pub enum GenError {
    /// Configuration rejected by validation
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GenError>;

impl From<std::io::Error> for GenError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: GenError = io.into();
        assert_eq!(err, GenError::IoError("pipe closed".to_string()));
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }

    #[test]
    fn test_serde_error_conversion() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: GenError = bad.into();
        assert!(matches!(err, GenError::SerializationError(_)));
    }

    #[test]
    fn test_error_serializes_tagged() {
        let err = GenError::ConfigError("chart_points must be at least 1".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "ConfigError");
        assert_eq!(json["message"], "chart_points must be at least 1");
    }
}
