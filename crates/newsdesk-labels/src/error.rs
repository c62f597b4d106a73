//! Error types for label lookup operations

use newsdesk_common::NewsdeskError;
use thiserror::Error;

/// Errors that can occur while loading labels from a vocabulary store
#[derive(Error, Debug)]
pub enum LabelError {
    /// The store document could not be read
    #[error("Failed to load vocabulary store: {path}")]
    StoreLoadError {
        /// Path of the document
        path: String,
        /// Read failure
        #[source]
        source: std::io::Error,
    },

    /// The store document is not a valid vocabulary document
    #[error("Failed to parse vocabulary store: {0}")]
    StoreParseError(String),

    /// The backing store failed to answer a lookup
    #[error("Vocabulary store lookup failed for '{field}': {message}")]
    LookupFailed {
        /// Field being translated
        field: String,
        /// Store-specific description
        message: String,
    },
}

impl LabelError {
    /// Create a lookup failure for a field
    pub fn lookup(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LookupFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field the error relates to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            LabelError::LookupFailed { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<LabelError> for NewsdeskError {
    fn from(err: LabelError) -> Self {
        let field = err.field().map(str::to_string);
        NewsdeskError::translation_with_source("Label lookup failed", field, err)
    }
}

/// Result type for label operations
pub type LabelResult<T> = Result<T, LabelError>;
