//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

use bopm_config::ConfigError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Contract inputs outside the configured limits.
    #[error("Invalid input: {0}")]
    InvalidInput(#[source] ConfigError),

    /// Refused to replace an existing file.
    #[error("{} already exists; pass --force to overwrite", .0.display())]
    FileExists(PathBuf),

    /// Binary output requested without a target file.
    #[error("xlsx output needs --output <FILE>")]
    BinaryToStdout,

    /// Output file could not be written.
    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        /// Target path.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
