//! Driving port for request authentication.
//!
//! The core consumes this contract, not an implementation: any identity
//! provider that resolves a credential pair to a user identity (or fails
//! with a status-bearing error) satisfies it.

use async_trait::async_trait;

use crate::domain::{Credentials, User};

/// Errors raised by authenticator implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticatorError {
    /// The credentials do not resolve to a known identity.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The backing identity store failed.
    #[error("authentication backend failed: {message}")]
    Backend { message: String },
}

impl AuthenticatorError {
    /// Create a backend error with the given message.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Resolve request credentials to a user identity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Return the identity matching the credentials, or fail.
    async fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthenticatorError>;
}
