//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Errors raised while parsing or executing a command.
///
/// Parse-time failures (`UnknownCommand`, `InvalidFormat`, value validation
/// surfaced through `Domain`) leave the store untouched. Execution failures
/// are all-or-nothing per entity. `SaveFailed` is special: the in-memory
/// mutation has already succeeded and is not rolled back.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("unknown command: {word}")]
    UnknownCommand { word: String },

    #[error("invalid command format\nusage: {usage}")]
    InvalidFormat { usage: &'static str },

    #[error("index {index} is out of range: the list has {len} entries")]
    InvalidIndex { index: usize, len: usize },

    #[error("the change was applied but saving failed: {source}")]
    SaveFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
