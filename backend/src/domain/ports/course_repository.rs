//! Port for course persistence.
//!
//! Sole owner of persistence semantics for the course entity. Adapters back
//! it with a relational store offering transactional single-row operations;
//! tests use mocks or deterministic in-memory implementations.

use async_trait::async_trait;

use crate::domain::{Course, CourseDraft, CourseId, CourseWithOwner, UserId};

/// Errors raised by course repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseRepositoryError {
    /// Repository connection could not be established.
    #[error("course repository connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("course repository query failed: {message}")]
    Query { message: String },
}

impl CourseRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Result of the find-or-create primitive.
///
/// `created` is `false` when a row matching the full field tuple already
/// existed and no write was performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindOrCreateOutcome {
    pub course: Course,
    pub created: bool,
}

/// Port for course storage and retrieval.
///
/// Ownership enforcement lives in the query predicate: the scoped mutations
/// filter by id AND owner together, so "no such row" and "row owned by
/// someone else" both surface as an unaffected mutation. Callers that must
/// distinguish 404 from 403 probe [`CourseRepository::exists`] first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Return every course joined with its owner's projection, ordered by
    /// ascending course id. Audit timestamps never appear in the result.
    async fn list_all(&self) -> Result<Vec<CourseWithOwner>, CourseRepositoryError>;

    /// Fetch a single course with its owner projection.
    async fn find_by_id(
        &self,
        course_id: CourseId,
    ) -> Result<Option<CourseWithOwner>, CourseRepositoryError>;

    /// Find-or-create keyed on the exact tuple of all draft fields plus the
    /// owner. An identical tuple returns the existing row without writing;
    /// any differing field inserts a distinct course. This is deliberately
    /// not a uniqueness constraint on any field subset.
    async fn find_or_create(
        &self,
        draft: CourseDraft,
        owner_id: UserId,
    ) -> Result<FindOrCreateOutcome, CourseRepositoryError>;

    /// Apply a validated draft to the course matching both id and owner,
    /// reporting whether a row was affected. Optional draft fields left as
    /// `None` keep their stored values (partial update, not a replace).
    async fn update_scoped(
        &self,
        course_id: CourseId,
        owner_id: UserId,
        draft: CourseDraft,
    ) -> Result<bool, CourseRepositoryError>;

    /// Irreversibly delete the course matching both id and owner, reporting
    /// whether a row was affected.
    async fn delete_scoped(
        &self,
        course_id: CourseId,
        owner_id: UserId,
    ) -> Result<bool, CourseRepositoryError>;

    /// Lightweight unscoped existence probe (id only), used where the
    /// not-found/forbidden distinction is contractually required.
    async fn exists(&self, course_id: CourseId) -> Result<bool, CourseRepositoryError>;
}
