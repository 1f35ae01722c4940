//! Session store error types
//!
//! Defines all errors that can occur while reading or writing the
//! persisted session record.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in a session store backend
#[derive(Error, Debug)]
pub enum SessionError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored key/value file could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Session file exists but does not hold a key/value object
    #[error("Corrupt session file {path:?}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// Backend is not reachable (e.g. browser storage disabled)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::Serialization(err.to_string())
    }
}

/// Result type alias for session store operations
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SessionError::Unavailable("localStorage disabled".to_string());
        assert_eq!(err.to_string(), "Storage unavailable: localStorage disabled");

        let err = SessionError::Corrupt {
            path: PathBuf::from("session.json"),
            reason: "expected object".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Corrupt session file \"session.json\": expected object"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let session_err: SessionError = io_err.into();
        assert!(matches!(session_err, SessionError::Io(_)));
    }
}
