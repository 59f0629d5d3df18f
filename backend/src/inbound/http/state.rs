//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they only depend on
//! domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{Authenticator, CourseRepository, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub courses: Arc<dyn CourseRepository>,
    pub users: Arc<dyn UserRepository>,
    pub authenticator: Arc<dyn Authenticator>,
}

impl HttpState {
    /// Bundle port implementations for handler injection.
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        users: Arc<dyn UserRepository>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            courses,
            users,
            authenticator,
        }
    }
}
