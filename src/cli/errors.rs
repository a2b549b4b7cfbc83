//! CLI-specific error types.

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors. All are fatal; main prints them and exits non-zero.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
