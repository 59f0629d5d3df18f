//! User API handlers.
//!
//! ```text
//! GET  /api/users   -> authenticated user's profile
//! POST /api/users   -> register a new user
//! ```

use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::auth::password_digest;
use crate::domain::{Error, NewUser, NewUserDraft, User, UserPayload};

use super::auth::authenticate_request;
use super::state::HttpState;
use super::validation::lenient_string;
use super::ApiResult;

/// Registration payload.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequestBody {
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: Option<String>,
}

impl From<UserRequestBody> for UserPayload {
    fn from(body: UserRequestBody) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
            email_address: body.email_address,
            password: body.password,
        }
    }
}

/// Profile representation; the password digest never appears here.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            first_name: user.first_name,
            last_name: user.last_name,
            email_address: user.email_address,
        }
    }
}

/// Response wrapper for the authenticated user.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub user: UserBody,
}

/// Return the authenticated user's profile.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Authenticated user", body = UserResponse),
        (status = 401, description = "Authentication failure", body = super::schemas::ErrorEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "currentUser",
    security(("BasicAuth" = []))
)]
#[get("")]
pub async fn current_user(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<UserResponse>> {
    let user = authenticate_request(&state, &req).await?;
    Ok(web::Json(UserResponse { user: user.into() }))
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserRequestBody,
    responses(
        (status = 201, description = "User created", headers(("Location" = String, description = "Root path"))),
        (status = 400, description = "Validation failure or duplicate email", body = super::schemas::ErrorEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser",
    security([])
)]
#[post("")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = NewUserDraft::try_from_payload(payload.into_inner().into())
        .map_err(Error::validation)?;

    let new_user = NewUser {
        password_digest: password_digest(&draft.password),
        first_name: draft.first_name,
        last_name: draft.last_name,
        email_address: draft.email_address,
    };

    state.users.create(new_user).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, "/"))
        .finish())
}
