//! Server construction and route wiring.

mod config;

pub use config::AppSettings;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};

use courses_backend::inbound::http::courses::{
    create_course, delete_course, get_course, list_courses, update_course,
};
use courses_backend::inbound::http::error::json_error_handler;
use courses_backend::inbound::http::index::{greeting, route_fallback};
use courses_backend::inbound::http::state::HttpState;
use courses_backend::inbound::http::users::{current_user, register_user};
use courses_backend::Trace;
#[cfg(debug_assertions)]
use courses_backend::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;

fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(greeting)
        .service(
            web::scope("/api/courses")
                .service(list_courses)
                .service(get_course)
                .service(create_course)
                .service(update_course)
                .service(delete_course),
        )
        .service(
            web::scope("/api/users")
                .service(current_user)
                .service(register_user),
        );

    #[cfg(debug_assertions)]
    let app = app.route("/api-docs/openapi.json", web::get().to(openapi_json));

    // Terminal not-found handler: unmatched routes and missing resources
    // share the same body.
    app.default_service(web::route().to(route_fallback))
}

#[cfg(debug_assertions)]
async fn openapi_json() -> web::Json<utoipa::openapi::OpenApi> {
    web::Json(ApiDoc::openapi())
}

/// Construct an Actix HTTP server for the given handler state.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(state: web::Data<HttpState>, bind_addr: &str) -> std::io::Result<Server> {
    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(bind_addr)?
        .run();

    Ok(server)
}
