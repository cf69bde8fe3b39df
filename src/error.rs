//! Unified error types for category-picker.
//!
//! Errors only arise at the edges of the crate: loading a category payload
//! from JSON or disk, and rejecting bad configuration. The picker state
//! machine itself never returns errors to the embedding form; malformed
//! input degrades to inert outcomes instead (see
//! [`PickerEvent`](crate::picker::PickerEvent)).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for category-picker operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PickerError {
    /// Errors while parsing a category payload
    #[error("Failed to parse category payload: {context}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenient Result type for category-picker operations
pub type Result<T> = std::result::Result<T, PickerError>;

impl PickerError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<std::io::Error> for PickerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for PickerError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse("JSON deserialization", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<Vec<u32>>("{").unwrap_err()
    }

    #[test]
    fn test_error_display() {
        let err = PickerError::parse("at categories.json", json_error());
        let display = err.to_string();
        assert!(
            display.contains("parse") && display.contains("categories.json"),
            "Error message should mention parsing and the source: {}",
            display
        );

        let err = PickerError::validation("duplicate id 42");
        assert!(err.to_string().contains("duplicate id 42"));
    }

    #[test]
    fn test_error_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = PickerError::io("/path/to/categories.json", io_err);

        assert!(err.to_string().contains("/path/to/categories.json"));
    }

    #[test]
    fn test_from_serde_json() {
        let err: PickerError = json_error().into();
        match err {
            PickerError::Parse { context, .. } => {
                assert_eq!(context, "JSON deserialization");
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }
}
