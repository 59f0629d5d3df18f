//! End-to-end behaviour of the user endpoints and shared routing.

mod support;

use actix_web::http::{header, StatusCode};
use actix_web::test as actix_test;
use serde_json::{json, Value};

use support::{basic, build_test_app, test_backend};

fn sally_body() -> Value {
    json!({
        "firstName": "Sally",
        "lastName": "Jones",
        "emailAddress": "sally@jones.com",
        "password": "sallypassword"
    })
}

#[actix_web::test]
async fn registered_users_can_authenticate_immediately() {
    let backend = test_backend();
    let app = actix_test::init_service(build_test_app(backend.state.clone())).await;

    let registered = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(sally_body())
            .to_request(),
    )
    .await;
    assert_eq!(registered.status(), StatusCode::CREATED);
    assert_eq!(
        registered
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/")
    );

    let profile = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/users")
            .insert_header((
                header::AUTHORIZATION,
                basic("sally@jones.com", "sallypassword"),
            ))
            .to_request(),
    )
    .await;
    assert!(profile.status().is_success());

    let value: Value = actix_test::read_body_json(profile).await;
    assert_eq!(value["user"]["firstName"], "Sally");
    assert_eq!(value["user"]["emailAddress"], "sally@jones.com");
    assert!(value["user"].get("passwordDigest").is_none());
}

#[actix_web::test]
async fn registration_reports_every_missing_field_in_order() {
    let backend = test_backend();
    let app = actix_test::init_service(build_test_app(backend.state.clone())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        value["error"]["message"],
        json!([
            "firstName is required",
            "lastName is required",
            "emailAddress is required",
            "password is required"
        ])
    );
}

#[actix_web::test]
async fn duplicate_registration_is_rejected() {
    let backend = test_backend();
    let app = actix_test::init_service(build_test_app(backend.state.clone())).await;

    let first = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(sally_body())
            .to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(sally_body())
            .to_request(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(second).await;
    assert_eq!(value["error"]["message"], "Email address already in use");
}

#[actix_web::test]
async fn profile_requires_credentials() {
    let backend = test_backend();
    let app = actix_test::init_service(build_test_app(backend.state.clone())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/users").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn root_route_greets_clients() {
    let backend = test_backend();
    let app = actix_test::init_service(build_test_app(backend.state.clone())).await;

    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;
    assert!(response.status().is_success());

    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["message"], "Welcome to the REST API project!");
}

#[actix_web::test]
async fn unknown_routes_end_at_the_terminal_not_found_handler() {
    let backend = test_backend();
    let app = actix_test::init_service(build_test_app(backend.state.clone())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/recipes").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["error"]["message"], "Route Not Found");
}
