//! Root greeting and the terminal not-found handler.

use actix_web::{get, web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use super::error::route_not_found;
use super::ApiResult;

/// Greeting returned from the root route.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GreetingResponse {
    pub message: String,
}

/// Friendly greeting for the root route.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = GreetingResponse)),
    tags = ["index"],
    operation_id = "greeting",
    security([])
)]
#[get("/")]
pub async fn greeting() -> web::Json<GreetingResponse> {
    web::Json(GreetingResponse {
        message: "Welcome to the REST API project!".to_owned(),
    })
}

/// Terminal handler for requests no route matched.
///
/// Missing resources delegate here too: the response body does not
/// distinguish "no such route" from "no such course".
pub async fn route_fallback() -> ApiResult<HttpResponse> {
    Err(route_not_found())
}

#[cfg(test)]
mod tests {
    use actix_web::{test as actix_test, web, App};
    use serde_json::Value;

    use super::*;

    #[actix_web::test]
    async fn greeting_welcomes_clients() {
        let app = actix_test::init_service(App::new().service(greeting)).await;

        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;
        assert!(response.status().is_success());

        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["message"], "Welcome to the REST API project!");
    }

    #[actix_web::test]
    async fn unmatched_routes_share_the_not_found_envelope() {
        let app = actix_test::init_service(
            App::new().default_service(web::route().to(route_fallback)),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/nowhere").to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);

        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["error"]["message"], "Route Not Found");
    }
}
