//! Shared error type across navGuard crates.
//!
//! Credential decode failures are not part of this type: they are absorbed by
//! the validator (see [`crate::credential::DecodeError`]) and never reach a
//! caller of the decision engine.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request or config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, NavGuardError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum NavGuardError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl NavGuardError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            NavGuardError::BadRequest(_) => ClientCode::BadRequest,
            NavGuardError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            NavGuardError::Internal(_) => ClientCode::Internal,
        }
    }
}
