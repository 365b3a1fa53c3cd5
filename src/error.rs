//! Error types for cli-template
//!
//! Every failure the dispatcher can hit is an invocation problem detected
//! before a handler runs, or an I/O failure while writing output.

use crate::cli::common::{EXIT_FAILURE, EXIT_USAGE};

/// Top-level error type for cli-template
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Argument parsing failed (unknown subcommand, missing or malformed value)
    #[error("{0}")]
    InvalidInvocation(#[from] clap::Error),

    /// Matches reached dispatch without any subcommand selected
    #[error("No command given")]
    MissingCommand,

    /// Subcommand parsed but no handler is registered for it
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Writing to the output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidInvocation(_)
            | CliError::MissingCommand
            | CliError::UnknownCommand(_) => EXIT_USAGE,
            CliError::Io(_) => EXIT_FAILURE,
        }
    }
}
