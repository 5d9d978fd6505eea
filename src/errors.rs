// ============================================================================
// ERRORS - Typed failures of the login flow
// ============================================================================

use thiserror::Error;

use crate::state::FailureReason;

/// Local form validation. Never reaches the network layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("username is empty")]
    EmptyUsername,
    #[error("password is empty")]
    EmptyPassword,
}

/// Access to the persistent credential store failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("failed to read key {key}")]
    Read { key: String },
    #[error("failed to write key {key}")]
    Write { key: String },
    #[error("failed to remove key {key}")]
    Remove { key: String },
}

/// The token request did not yield a usable 2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to read response body: {0}")]
    Body(String),
}

impl AuthError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Everything a submission can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("invalid form: {0}")]
    Validation(#[from] ValidationError),
    #[error("token request failed: {0}")]
    Auth(#[from] AuthError),
    #[error("could not persist credential: {0}")]
    Storage(#[from] StorageError),
}

impl LoginError {
    /// What the user gets to see. Request and storage failures collapse
    /// into one message; the detail only goes to the log.
    pub fn reason(&self) -> FailureReason {
        match self {
            Self::Validation(_) => FailureReason::MissingFields,
            Self::Auth(_) | Self::Storage(_) => FailureReason::Rejected,
        }
    }
}
