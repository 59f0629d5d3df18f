//! Domain-level error type and normalization.
//!
//! These errors are transport agnostic. The inbound HTTP adapter maps them to
//! status codes and the shared `{"error":{"message":…}}` envelope; the domain
//! only records the failure category and the human-readable message(s).

use serde::{Deserialize, Serialize};

use super::ports::{AuthenticatorError, CourseRepositoryError, UserRepositoryError};

/// Stable machine-readable code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Authentication failed or is missing.
    Unauthorized,
    /// Authenticated but not the owner of the targeted resource.
    Forbidden,
    /// No route or resource matched the request.
    NotFound,
    /// The request collides with existing state (duplicate create).
    Conflict,
    /// An unexpected failure in the storage layer or elsewhere.
    InternalError,
}

/// Message payload carried by an error: a single string, or an ordered list
/// of per-field messages for validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Many(Vec<String>),
}

/// Domain error payload.
///
/// # Examples
/// ```
/// use courses_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Route Not Found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: ErrorMessage,
}

impl Error {
    /// Create a new error with a single message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: ErrorMessage::Single(message.into()),
        }
    }

    /// Validation failure carrying one ordered message per failing field.
    pub fn validation(messages: Vec<String>) -> Self {
        Self {
            code: ErrorCode::InvalidRequest,
            message: ErrorMessage::Many(messages),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Message payload returned to adapters.
    pub fn message(&self) -> &ErrorMessage {
        &self.message
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::Forbidden`].
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            ErrorMessage::Single(message) => f.write_str(message),
            ErrorMessage::Many(messages) => f.write_str(&messages.join("; ")),
        }
    }
}

impl std::error::Error for Error {}

// Normalization of collaborator failures into the domain taxonomy. Handlers
// translate known conditions themselves; everything that reaches these
// conversions is terminal for the request.

impl From<CourseRepositoryError> for Error {
    fn from(error: CourseRepositoryError) -> Self {
        Self::internal(error.to_string())
    }
}

impl From<UserRepositoryError> for Error {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::DuplicateEmail { .. } => {
                Self::conflict("Email address already in use")
            }
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<AuthenticatorError> for Error {
    fn from(error: AuthenticatorError) -> Self {
        match error {
            AuthenticatorError::InvalidCredentials => Self::unauthorized("invalid credentials"),
            AuthenticatorError::Backend { message } => Self::internal(message),
        }
    }
}
