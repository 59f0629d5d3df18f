//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer, never exposed to the
//! domain. The read structs deliberately omit the audit timestamp columns
//! so they are excluded at query level rather than filtered afterwards.

use diesel::prelude::*;

use super::schema::{courses, users};

/// Row struct for reading courses without audit columns.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CourseRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i32,
}

/// Insertable struct for creating course records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = courses)]
pub(crate) struct NewCourseRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub estimated_time: Option<&'a str>,
    pub materials_needed: Option<&'a str>,
    pub user_id: i32,
}

/// Changeset for ownership-scoped course updates.
///
/// Optional fields left as `None` are skipped by Diesel, implementing the
/// partial-update policy; title and description are always present after
/// validation.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = courses)]
pub(crate) struct CourseChangeset<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub estimated_time: Option<&'a str>,
    pub materials_needed: Option<&'a str>,
}

/// Owner projection joined onto course reads.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CourseOwnerRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Row struct for reading full user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password_digest: String,
}

/// Insertable struct for creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email_address: &'a str,
    pub password_digest: &'a str,
}
