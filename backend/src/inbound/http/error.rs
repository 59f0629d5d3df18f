//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving every
//! failure the same JSON envelope: `{"error":{"message":…}}`, where the
//! message is a string or, for validation failures, an ordered array.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use tracing::error;

use crate::domain::{Error, ErrorCode, ErrorMessage};

static GLOBAL_ERROR_LOGGING: AtomicBool = AtomicBool::new(false);

/// Toggle logging of 5xx failures in the centralized handler.
pub fn enable_global_error_logging(enabled: bool) {
    GLOBAL_ERROR_LOGGING.store(enabled, Ordering::Relaxed);
}

fn global_error_logging_enabled() -> bool {
    GLOBAL_ERROR_LOGGING.load(Ordering::Relaxed)
}

/// The terminal not-found error shared by unmatched routes and missing
/// resources; both converge on the same body.
pub(crate) fn route_not_found() -> Error {
    Error::not_found("Route Not Found")
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        // Duplicate creates surface as a client error, not 409, per the
        // response contract.
        ErrorCode::InvalidRequest | ErrorCode::Conflict => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    message: &'a ErrorMessage,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() && global_error_logging_enabled() {
            error!(code = ?self.code(), message = %self, "request failed");
        }

        HttpResponse::build(self.status_code()).json(ErrorEnvelope {
            error: ErrorBody {
                message: self.message(),
            },
        })
    }
}

/// Map body deserialization failures onto the shared envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(err.to_string()).into()
}

#[cfg(test)]
mod tests;
