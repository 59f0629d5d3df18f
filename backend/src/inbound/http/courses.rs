//! Course API handlers.
//!
//! ```text
//! GET    /api/courses
//! GET    /api/courses/{course_id}
//! POST   /api/courses
//! PUT    /api/courses/{course_id}
//! DELETE /api/courses/{course_id}
//! ```
//!
//! Ordering is part of the observable contract: create and update validate
//! the payload before attempting authentication, and update/delete resolve
//! existence only after authentication, so a malformed unauthenticated
//! request sees the validation failure first.

use actix_web::http::header;
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CourseDraft, CourseId, CoursePayload, CourseWithOwner, Error};

use super::auth::authenticate_request;
use super::error::route_not_found;
use super::state::HttpState;
use super::validation::lenient_string;
use super::ApiResult;

/// Request payload for creating or updating a course.
///
/// Required fields are checked by the validation component, not the
/// deserializer; non-string values collapse to absent fields.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequestBody {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub estimated_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub materials_needed: Option<String>,
}

impl From<CourseRequestBody> for CoursePayload {
    fn from(body: CourseRequestBody) -> Self {
        Self {
            title: body.title,
            description: body.description,
            estimated_time: body.estimated_time,
            materials_needed: body.materials_needed,
        }
    }
}

/// Owner projection embedded in course responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerBody {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Course representation returned by reads; audit timestamps never appear.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseBody {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i32,
    pub user: OwnerBody,
}

impl From<CourseWithOwner> for CourseBody {
    fn from(value: CourseWithOwner) -> Self {
        let CourseWithOwner { course, owner } = value;
        Self {
            id: course.id.get(),
            title: course.title,
            description: course.description,
            estimated_time: course.estimated_time,
            materials_needed: course.materials_needed,
            user_id: course.owner_id.get(),
            user: OwnerBody {
                id: owner.id.get(),
                first_name: owner.first_name,
                last_name: owner.last_name,
            },
        }
    }
}

/// Response wrapper for the course collection.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CoursesResponse {
    pub courses: Vec<CourseBody>,
}

/// Response wrapper for a single course.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseResponse {
    pub course: CourseBody,
}

fn validate(body: CourseRequestBody) -> ApiResult<CourseDraft> {
    CourseDraft::try_from_payload(body.into()).map_err(Error::validation)
}

/// List every course with its owner's projection.
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses", body = CoursesResponse),
        (status = 500, description = "Internal server error", body = super::schemas::ErrorEnvelopeSchema)
    ),
    tags = ["courses"],
    operation_id = "listCourses",
    security([])
)]
#[get("")]
pub async fn list_courses(state: web::Data<HttpState>) -> ApiResult<web::Json<CoursesResponse>> {
    let courses = state.courses.list_all().await?;
    Ok(web::Json(CoursesResponse {
        courses: courses.into_iter().map(CourseBody::from).collect(),
    }))
}

/// Fetch a single course by identifier.
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}",
    params(("course_id" = String, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "Course detail", body = CourseResponse),
        (status = 404, description = "No such course", body = super::schemas::ErrorEnvelopeSchema)
    ),
    tags = ["courses"],
    operation_id = "getCourse",
    security([])
)]
#[get("/{course_id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CourseResponse>> {
    // Non-numeric identifiers resolve to the not-found path, they are not
    // an error distinct from a missing row.
    let course_id = CourseId::parse(&path).ok_or_else(route_not_found)?;

    match state.courses.find_by_id(course_id).await? {
        Some(course) => Ok(web::Json(CourseResponse {
            course: course.into(),
        })),
        None => Err(route_not_found()),
    }
}

/// Create a course owned by the authenticated user.
///
/// Creation is find-or-create on the full field tuple: resubmitting an
/// identical payload performs no write and surfaces as a client error.
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CourseRequestBody,
    responses(
        (status = 201, description = "Course created", headers(("Location" = String, description = "Path of the new course"))),
        (status = 400, description = "Validation failure or duplicate course", body = super::schemas::ErrorEnvelopeSchema),
        (status = 401, description = "Authentication failure", body = super::schemas::ErrorEnvelopeSchema)
    ),
    tags = ["courses"],
    operation_id = "createCourse",
    security(("BasicAuth" = []))
)]
#[post("")]
pub async fn create_course(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Json<CourseRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = validate(payload.into_inner())?;
    let user = authenticate_request(&state, &req).await?;

    let outcome = state.courses.find_or_create(draft, user.id).await?;
    if outcome.created {
        Ok(HttpResponse::Created()
            .insert_header((
                header::LOCATION,
                format!("/api/courses/{}", outcome.course.id),
            ))
            .finish())
    } else {
        Err(Error::conflict("Course already exists"))
    }
}

/// Update a course owned by the authenticated user.
#[utoipa::path(
    put,
    path = "/api/courses/{course_id}",
    params(("course_id" = String, Path, description = "Course identifier")),
    request_body = CourseRequestBody,
    responses(
        (status = 204, description = "Course updated"),
        (status = 400, description = "Validation failure", body = super::schemas::ErrorEnvelopeSchema),
        (status = 401, description = "Authentication failure", body = super::schemas::ErrorEnvelopeSchema),
        (status = 403, description = "Course owned by another user", body = super::schemas::ErrorEnvelopeSchema),
        (status = 404, description = "No such course", body = super::schemas::ErrorEnvelopeSchema)
    ),
    tags = ["courses"],
    operation_id = "updateCourse",
    security(("BasicAuth" = []))
)]
#[put("/{course_id}")]
pub async fn update_course(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<String>,
    payload: web::Json<CourseRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = validate(payload.into_inner())?;
    let user = authenticate_request(&state, &req).await?;

    // Unscoped probe first: it decides between "truly absent" (404) and
    // "exists but not owned" (403) once the scoped update reports no row.
    let course_id = CourseId::parse(&path).ok_or_else(route_not_found)?;
    if !state.courses.exists(course_id).await? {
        return Err(route_not_found());
    }

    if state
        .courses
        .update_scoped(course_id, user.id, draft)
        .await?
    {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::forbidden("Forbidden"))
    }
}

/// Delete a course owned by the authenticated user.
#[utoipa::path(
    delete,
    path = "/api/courses/{course_id}",
    params(("course_id" = String, Path, description = "Course identifier")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 401, description = "Authentication failure", body = super::schemas::ErrorEnvelopeSchema),
        (status = 403, description = "Course owned by another user", body = super::schemas::ErrorEnvelopeSchema),
        (status = 404, description = "No such course", body = super::schemas::ErrorEnvelopeSchema)
    ),
    tags = ["courses"],
    operation_id = "deleteCourse",
    security(("BasicAuth" = []))
)]
#[delete("/{course_id}")]
pub async fn delete_course(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user = authenticate_request(&state, &req).await?;

    let course_id = CourseId::parse(&path).ok_or_else(route_not_found)?;
    if !state.courses.exists(course_id).await? {
        return Err(route_not_found());
    }

    if state.courses.delete_scoped(course_id, user.id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::forbidden("Forbidden"))
    }
}
