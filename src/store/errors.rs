//! Error types for the drop store

use thiserror::Error;

use super::drop::DropId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// No active (non-deleted) drop with the given id
    #[error("no such drop: {0}")]
    NotFound(DropId),

    /// Payload could not be serialized or a stored payload could not be
    /// decoded
    #[error("payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored timestamp was not valid RFC 3339 text
    #[error("malformed stored timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    /// Database connection or statement failure
    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl StoreError {
    /// Returns true when the error is a missing-drop condition rather
    /// than a storage fault
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
