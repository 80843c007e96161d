//! Error types for session operations.

use thiserror::Error;

use rollbook_state::ValidationError;

/// Errors from the session facade.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The global session was accessed before [`init_global`](crate::init_global).
    ///
    /// This is a programming error in the caller, not a data problem.
    #[error("session not initialized: call init_global first")]
    NotInitialized,

    /// [`init_global`](crate::init_global) was called twice.
    #[error("global session already initialized")]
    AlreadyInitialized,

    /// The command failed the dispatch-time duplicate re-check.
    #[error(transparent)]
    Rejected(#[from] ValidationError),
}

/// Result alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
