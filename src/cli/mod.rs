//! CLI layer: argument parsing, the interactive prompt and output helpers

pub mod args;
pub mod error;
pub mod output;
pub mod repl;

pub use args::Cli;
pub use error::{CliError, CliResult};
