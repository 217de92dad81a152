//! Storage-level errors

use thiserror::Error;

/// Failures at the persistence boundary.
///
/// At load time both variants are recoverable: the caller starts with an
/// empty store. At save time `Io` propagates to the user as a command
/// failure.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed planner data: {message}")]
    Format { message: String },
}

impl StorageError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
