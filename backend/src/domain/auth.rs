//! Credential-pair authenticator backed by the user store.
//!
//! Implements the [`Authenticator`] port by resolving the email address
//! through [`UserRepository`] and comparing SHA-256 password digests. The
//! port stays provider-agnostic; swapping in a token- or session-based
//! implementation requires no change to the handlers.

use std::sync::Arc;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use super::ports::{Authenticator, AuthenticatorError, UserRepository};
use super::user::{Credentials, User};

/// Compute the hex-encoded SHA-256 digest stored for a password.
pub fn password_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// [`Authenticator`] resolving Basic credential pairs against stored users.
#[derive(Clone)]
pub struct CredentialAuthenticator {
    users: Arc<dyn UserRepository>,
}

impl CredentialAuthenticator {
    /// Create an authenticator backed by the given user store.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl Authenticator for CredentialAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthenticatorError> {
        let user = self
            .users
            .find_by_email(&credentials.email_address)
            .await
            .map_err(|err| AuthenticatorError::backend(err.to_string()))?
            .ok_or(AuthenticatorError::InvalidCredentials)?;

        if password_digest(&credentials.password) == user.password_digest {
            Ok(user)
        } else {
            Err(AuthenticatorError::InvalidCredentials)
        }
    }
}
