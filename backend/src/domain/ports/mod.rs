//! Domain ports implemented by adapters.
//!
//! Inbound adapters depend on these traits instead of concrete storage or
//! identity providers, keeping handlers testable without I/O.

mod authenticator;
mod course_repository;
mod user_repository;

pub use authenticator::{Authenticator, AuthenticatorError};
pub use course_repository::{CourseRepository, CourseRepositoryError, FindOrCreateOutcome};
pub use user_repository::{UserRepository, UserRepositoryError};

#[cfg(test)]
pub use authenticator::MockAuthenticator;
#[cfg(test)]
pub use course_repository::MockCourseRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
