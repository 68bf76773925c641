//! Error handling for renderc-store
//!
//! Wraps renderc-core ExError with import-specific helpers

use renderc_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a snapshot validation error
pub fn snapshot_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("snapshot_parse")
        .with_message(reason.to_string())
}

/// Create an unsupported schema version error
pub fn unsupported_version(found: u32) -> ExError {
    ExError::new(ExErrorKind::UnsupportedVersion)
        .with_op("snapshot_parse")
        .with_message(format!(
            "Unsupported schema_version: {}. Expected 0",
            found
        ))
}

/// Create a YAML deserialization error
pub fn from_yaml(err: serde_yaml::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("snapshot_parse")
        .with_message(format!("YAML parse error: {}", err))
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
