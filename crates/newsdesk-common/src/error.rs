//! Error types and utilities for newsdesk analytics

use thiserror::Error;

/// Result type alias for newsdesk operations
pub type Result<T> = std::result::Result<T, NewsdeskError>;

/// Main error type for newsdesk operations
#[derive(Error, Debug)]
pub enum NewsdeskError {
    /// Configuration related errors, including invalid chart source setups
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Label or vocabulary lookup failures
    #[error("Translation error: {message}")]
    Translation {
        /// Human readable description
        message: String,
        /// Source field whose labels were being loaded
        field: Option<String>,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for request parameters or data
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
        /// Offending parameter, if known
        field: Option<String>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NewsdeskError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new translation error with source
    pub fn translation_with_source(
        msg: impl Into<String>,
        field: Option<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Translation {
            message: msg.into(),
            field,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Whether this error came from the chart setup rather than from data or I/O
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}
