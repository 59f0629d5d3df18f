//! Course aggregate and payload validation.
//!
//! A course always belongs to exactly one owner; `title` and `description`
//! are never empty in persisted state. The surrogate identifier and the
//! owner are immutable once the row exists.

use std::fmt;

use super::user::UserId;
use super::validation::required_string;

/// Surrogate course identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourseId(i32);

impl CourseId {
    /// Wrap a store-assigned identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Underlying integer value.
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Parse a path segment into a course identifier.
    ///
    /// Non-numeric or out-of-range input yields `None`; callers resolve that
    /// to the not-found path rather than an error.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<i32>().ok().map(Self)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted course entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub owner_id: UserId,
}

/// Minimal owner projection joined onto course reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseOwner {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
}

/// A course together with its owner's projection, as returned by reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseWithOwner {
    pub course: Course,
    pub owner: CourseOwner,
}

/// Raw course payload before validation. Fields that were absent, null, or
/// not JSON strings arrive as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

/// Validated course payload used for both creation and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

impl CourseDraft {
    /// Validate a raw payload into a draft.
    ///
    /// # Errors
    /// Returns one ordered message per failing required field
    /// (`"title is required"`, `"description is required"`).
    pub fn try_from_payload(payload: CoursePayload) -> Result<Self, Vec<String>> {
        let mut messages = Vec::new();
        let title = required_string(payload.title, "title", &mut messages);
        let description = required_string(payload.description, "description", &mut messages);

        match (title, description) {
            (Some(title), Some(description)) if messages.is_empty() => Ok(Self {
                title,
                description,
                estimated_time: payload.estimated_time,
                materials_needed: payload.materials_needed,
            }),
            _ => Err(messages),
        }
    }
}
