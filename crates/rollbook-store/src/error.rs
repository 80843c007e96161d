//! Error types for blob store operations.

use thiserror::Error;

/// Errors from blob store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend is unavailable or in a broken state.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
