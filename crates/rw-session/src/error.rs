//! Error types for sessions and history storage.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while persisting roll history.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backing file could not be written.
    #[error("history storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The history could not be encoded.
    #[error("history could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}
