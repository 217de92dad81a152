//! CLI-level errors (wraps lower layers)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::StorageError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::SaveFailed { .. } => crate::exitcode::IOERR,
                ApplicationError::Domain(_)
                | ApplicationError::UnknownCommand { .. }
                | ApplicationError::InvalidFormat { .. }
                | ApplicationError::InvalidIndex { .. } => crate::exitcode::USAGE,
            },
            CliError::Storage(e) => match e {
                StorageError::Io { .. } => crate::exitcode::IOERR,
                StorageError::Format { .. } => crate::exitcode::DATAERR,
            },
            CliError::Config(_) => crate::exitcode::CONFIG,
        }
    }
}
