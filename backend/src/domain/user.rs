//! User identity and registration payloads.
//!
//! The course core needs the user identifier for ownership comparisons and
//! the minimal projection joined onto course reads. The registration flow
//! additionally validates and persists full profiles.

use std::fmt;

use super::validation::required_string;

/// Stable user identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a store-assigned identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Underlying integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted user record.
///
/// Deliberately not serializable: the digest must never reach a response
/// body, so adapters build explicit DTOs from the fields they expose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password_digest: String,
}

/// Credential pair extracted from a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email_address: String,
    pub password: String,
}

/// Raw registration payload before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub password: Option<String>,
}

/// Validated registration payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
}

impl NewUserDraft {
    /// Validate a raw registration payload.
    ///
    /// # Errors
    /// Returns one ordered message per failing required field, using the
    /// wire-facing field names (`firstName`, `lastName`, `emailAddress`,
    /// `password`).
    pub fn try_from_payload(payload: UserPayload) -> Result<Self, Vec<String>> {
        let mut messages = Vec::new();
        let first_name = required_string(payload.first_name, "firstName", &mut messages);
        let last_name = required_string(payload.last_name, "lastName", &mut messages);
        let email_address = required_string(payload.email_address, "emailAddress", &mut messages);
        let password = required_string(payload.password, "password", &mut messages);

        match (first_name, last_name, email_address, password) {
            (Some(first_name), Some(last_name), Some(email_address), Some(password))
                if messages.is_empty() =>
            {
                Ok(Self {
                    first_name,
                    last_name,
                    email_address,
                    password,
                })
            }
            _ => Err(messages),
        }
    }
}

/// Insert payload handed to the user store; the password has already been
/// digested by the time it reaches the port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password_digest: String,
}
