//! Domain entities, validation, and ports.
//!
//! Purpose: define the course and user types used by the API and
//! persistence layers, the validation applied to incoming payloads, the
//! transport-agnostic error taxonomy, and the ports adapters implement.

pub mod auth;
pub mod course;
pub mod error;
pub mod ports;
pub mod user;
mod validation;

pub use self::course::{
    Course, CourseDraft, CourseId, CourseOwner, CoursePayload, CourseWithOwner,
};
pub use self::error::{Error, ErrorCode, ErrorMessage};
pub use self::user::{Credentials, NewUser, NewUserDraft, User, UserId, UserPayload};

/// Convenient API result alias.
pub type ApiResult<T> = Result<T, Error>;
