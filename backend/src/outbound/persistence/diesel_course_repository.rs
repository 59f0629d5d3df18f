//! PostgreSQL-backed `CourseRepository` implementation using Diesel.
//!
//! Ownership checks live in the SQL predicates: scoped mutations filter on
//! id and owner together and report the affected-row count, so the adapter
//! never loads a row just to decide whether a caller may touch it.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{CourseRepository, CourseRepositoryError, FindOrCreateOutcome};
use crate::domain::{Course, CourseDraft, CourseId, CourseOwner, CourseWithOwner, UserId};

use super::models::{CourseChangeset, CourseOwnerRow, CourseRow, NewCourseRow};
use super::pool::{DbPool, PoolError};
use super::schema::{courses, users};

/// Diesel-backed implementation of the `CourseRepository` port.
#[derive(Clone)]
pub struct DieselCourseRepository {
    pool: DbPool,
}

impl DieselCourseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain course repository errors.
fn map_pool_error(error: PoolError) -> CourseRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            CourseRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain course repository errors.
fn map_diesel_error(error: diesel::result::Error) -> CourseRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    debug!(error = %error, "diesel course operation failed");

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            CourseRepositoryError::connection(info.message().to_owned())
        }
        other => CourseRepositoryError::query(other.to_string()),
    }
}

/// Convert a database row to a domain course.
fn row_to_course(row: CourseRow) -> Course {
    Course {
        id: CourseId::new(row.id),
        title: row.title,
        description: row.description,
        estimated_time: row.estimated_time,
        materials_needed: row.materials_needed,
        owner_id: UserId::new(row.user_id),
    }
}

/// Convert a joined (course, owner) row pair to the domain read model.
fn rows_to_course_with_owner((course, owner): (CourseRow, CourseOwnerRow)) -> CourseWithOwner {
    CourseWithOwner {
        course: row_to_course(course),
        owner: CourseOwner {
            id: UserId::new(owner.id),
            first_name: owner.first_name,
            last_name: owner.last_name,
        },
    }
}

#[async_trait]
impl CourseRepository for DieselCourseRepository {
    async fn list_all(&self) -> Result<Vec<CourseWithOwner>, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(CourseRow, CourseOwnerRow)> = courses::table
            .inner_join(users::table)
            .order(courses::id.asc())
            .select((CourseRow::as_select(), CourseOwnerRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(rows_to_course_with_owner).collect())
    }

    async fn find_by_id(
        &self,
        course_id: CourseId,
    ) -> Result<Option<CourseWithOwner>, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<(CourseRow, CourseOwnerRow)> = courses::table
            .inner_join(users::table)
            .filter(courses::id.eq(course_id.get()))
            .select((CourseRow::as_select(), CourseOwnerRow::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(rows_to_course_with_owner))
    }

    async fn find_or_create(
        &self,
        draft: CourseDraft,
        owner_id: UserId,
    ) -> Result<FindOrCreateOutcome, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let draft = &draft;
        let (row, created) = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                async move {
                    // Tuple match over every field, NULL-safe for the
                    // optionals. Rows differing in any single field are
                    // distinct courses.
                    let existing: Option<CourseRow> = courses::table
                        .filter(courses::title.eq(&draft.title))
                        .filter(courses::description.eq(&draft.description))
                        .filter(
                            courses::estimated_time
                                .is_not_distinct_from(draft.estimated_time.as_deref()),
                        )
                        .filter(
                            courses::materials_needed
                                .is_not_distinct_from(draft.materials_needed.as_deref()),
                        )
                        .filter(courses::user_id.eq(owner_id.get()))
                        .select(CourseRow::as_select())
                        .first(conn)
                        .await
                        .optional()?;

                    match existing {
                        Some(row) => Ok((row, false)),
                        None => {
                            let new_row = NewCourseRow {
                                title: &draft.title,
                                description: &draft.description,
                                estimated_time: draft.estimated_time.as_deref(),
                                materials_needed: draft.materials_needed.as_deref(),
                                user_id: owner_id.get(),
                            };
                            let row = diesel::insert_into(courses::table)
                                .values(&new_row)
                                .returning(CourseRow::as_returning())
                                .get_result(conn)
                                .await?;
                            Ok((row, true))
                        }
                    }
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(FindOrCreateOutcome {
            course: row_to_course(row),
            created,
        })
    }

    async fn update_scoped(
        &self,
        course_id: CourseId,
        owner_id: UserId,
        draft: CourseDraft,
    ) -> Result<bool, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = CourseChangeset {
            title: &draft.title,
            description: &draft.description,
            estimated_time: draft.estimated_time.as_deref(),
            materials_needed: draft.materials_needed.as_deref(),
        };

        let affected = diesel::update(
            courses::table
                .filter(courses::id.eq(course_id.get()))
                .filter(courses::user_id.eq(owner_id.get())),
        )
        .set(&changes)
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }

    async fn delete_scoped(
        &self,
        course_id: CourseId,
        owner_id: UserId,
    ) -> Result<bool, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(
            courses::table
                .filter(courses::id.eq(course_id.get()))
                .filter(courses::user_id.eq(owner_id.get())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }

    async fn exists(&self, course_id: CourseId) -> Result<bool, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let found: Option<i32> = courses::table
            .filter(courses::id.eq(course_id.get()))
            .select(courses::id)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(found.is_some())
    }
}
