//! Domain and service error model.

use thiserror::Error;

/// Domain-level error.
///
/// Deterministic value failures (parsing, malformed identifiers). Failures raised by the
/// user service travel as [`ServiceFailure`] instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Business failure raised by the user service.
///
/// `status` is the HTTP status the caller should see and `message` is echoed
/// verbatim. Status-code policy lives with whoever raises the error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message} (status {status})")]
pub struct ServiceError {
    pub status: u16,
    pub message: String,
}

impl ServiceError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(401, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, message)
    }
}

/// Everything a `UserService` call can fail with.
///
/// Callers must match both arms: a `Service` failure carries its own status,
/// an `Unexpected` one never does.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceFailure {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl ServiceFailure {
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }
}
