//! Error types for the CLI layer

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by the `jsonbox` binary
#[derive(Debug, Error)]
pub enum CliError {
    /// Store initialization or operation failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Filesystem or server I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
