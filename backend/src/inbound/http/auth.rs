//! Credential extraction and authentication for HTTP handlers.
//!
//! Keeps the endpoint modules focused on request/response mapping: this
//! module parses the `Authorization` header into a domain credential pair
//! and drives the pluggable authenticator port. Every failure maps to a
//! 401 except backend faults, which stay internal.

use actix_web::http::header;
use actix_web::HttpRequest;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::domain::{Credentials, Error, User};

use super::state::HttpState;
use super::ApiResult;

/// Resolve the request's Basic credentials to a user identity.
pub async fn authenticate_request(state: &HttpState, req: &HttpRequest) -> ApiResult<User> {
    let credentials = basic_credentials(req)?;
    state
        .authenticator
        .authenticate(&credentials)
        .await
        .map_err(Error::from)
}

/// Parse `Authorization: Basic <base64(email:password)>` into credentials.
fn basic_credentials(req: &HttpRequest) -> ApiResult<Credentials> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| Error::unauthorized("authorization header is required"))?;

    let value = header
        .to_str()
        .map_err(|_| Error::unauthorized("authorization header is not valid UTF-8"))?;

    let encoded = value
        .strip_prefix("Basic ")
        .ok_or_else(|| Error::unauthorized("authorization header must use the Basic scheme"))?;

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| Error::unauthorized("Basic credentials are not valid base64"))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| Error::unauthorized("Basic credentials are not valid UTF-8"))?;

    let (email_address, password) = decoded
        .split_once(':')
        .ok_or_else(|| Error::unauthorized("Basic credentials must be <email>:<password>"))?;

    Ok(Credentials {
        email_address: email_address.to_owned(),
        password: password.to_owned(),
    })
}
