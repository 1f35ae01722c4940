//! Dashboard controller error types

use thiserror::Error;

use crate::session::SessionError;

/// Login form rejected before anything is stored
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter both username and password")]
    MissingCredentials,
}

/// Errors surfaced by controller operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Login form validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Session store could not be written or cleared
    #[error("Session store error: {0}")]
    Session(#[from] SessionError),
}

impl DashboardError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DashboardError::Validation(_))
    }
}

/// Result type alias for controller operations
pub type DashboardResult<T> = Result<T, DashboardError>;
