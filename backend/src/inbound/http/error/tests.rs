//! Status mapping and envelope shape for HTTP error responses.

use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::ResponseError;
use rstest::rstest;
use serde_json::Value;

use super::*;

async fn body_json(error: &Error) -> Value {
    let response = error.error_response();
    let bytes = to_bytes(response.into_body()).await.expect("body bytes");
    serde_json::from_slice(&bytes).expect("error payload")
}

#[rstest]
#[case(Error::validation(vec!["title is required".to_owned()]), StatusCode::BAD_REQUEST)]
#[case(Error::conflict("Course already exists"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("invalid credentials"), StatusCode::UNAUTHORIZED)]
#[case(Error::forbidden("Forbidden"), StatusCode::FORBIDDEN)]
#[case(Error::not_found("Route Not Found"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn codes_map_to_contract_statuses(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(error.status_code(), expected);
}

#[actix_web::test]
async fn single_message_renders_as_string() {
    let value = body_json(&Error::not_found("Route Not Found")).await;
    assert_eq!(value["error"]["message"], "Route Not Found");
}

#[actix_web::test]
async fn validation_messages_render_as_ordered_array() {
    let error = Error::validation(vec![
        "title is required".to_owned(),
        "description is required".to_owned(),
    ]);

    let value = body_json(&error).await;
    let messages = value["error"]["message"].as_array().expect("message array");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], "title is required");
    assert_eq!(messages[1], "description is required");
}

#[actix_web::test]
async fn internal_errors_keep_the_underlying_message() {
    let value = body_json(&Error::internal("course repository query failed: boom")).await;
    assert_eq!(
        value["error"]["message"],
        "course repository query failed: boom"
    );
}
