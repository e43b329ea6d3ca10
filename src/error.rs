// src/error.rs

//! Unified error handling for the archive browser.

use std::fmt;

use thiserror::Error;

/// Result type alias for archive browser operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Dataset could not be fetched or parsed
    #[error("Load error for {location}: {message}")]
    Load { location: String, message: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a dataset load error with the source location.
    pub fn load(location: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Load {
            location: location.into(),
            message: message.to_string(),
        }
    }

    /// Whether this error belongs to the dataset load category.
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let err = AppError::load("db.json", "missing field `posts`");
        assert!(err.is_load());
        assert_eq!(
            err.to_string(),
            "Load error for db.json: missing field `posts`"
        );
    }

    #[test]
    fn test_other_errors_are_not_load() {
        assert!(!AppError::config("bad").is_load());
        assert!(!AppError::validation("bad").is_load());
    }
}
