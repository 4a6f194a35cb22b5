//! CLI-specific error types
//!
//! Any CLI error ends the process with a non-zero exit code.

use std::io;

use thiserror::Error;

/// CLI error, displayed as `CODE: message`
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file or override error
    #[error("RECIPE_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// I/O error (socket, file)
    #[error("RECIPE_CLI_IO_ERROR: {0}")]
    Io(#[from] io::Error),

    /// Startup failed before the server could run
    #[error("RECIPE_CLI_BOOT_FAILED: {0}")]
    Boot(String),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "RECIPE_CLI_CONFIG_ERROR",
            Self::Io(_) => "RECIPE_CLI_IO_ERROR",
            Self::Boot(_) => "RECIPE_CLI_BOOT_FAILED",
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
