//! CLI error types

use std::io;

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Server failed to bind or serve
    #[error("server error: {0}")]
    Server(#[from] io::Error),

    /// Logging subscriber could not be installed
    #[error("logging setup failed: {0}")]
    Logging(String),
}
