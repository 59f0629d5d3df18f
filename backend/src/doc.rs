//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] aggregate generating the OpenAPI specification:
//! every HTTP endpoint from the inbound layer, the shared error envelope
//! schema, and the Basic authentication security scheme. Debug builds serve
//! the generated document at `/api-docs/openapi.json`.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::schemas::{ErrorBodySchema, ErrorEnvelopeSchema};

/// Enrich the generated document with the Basic authentication scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BasicAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Courses backend API",
        description = "Course catalogue with per-owner authorization on mutation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BasicAuth" = [])),
    paths(
        crate::inbound::http::index::greeting,
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::courses::create_course,
        crate::inbound::http::courses::update_course,
        crate::inbound::http::courses::delete_course,
        crate::inbound::http::users::current_user,
        crate::inbound::http::users::register_user,
    ),
    components(schemas(ErrorEnvelopeSchema, ErrorBodySchema)),
    tags(
        (name = "index", description = "Root greeting"),
        (name = "courses", description = "Course resource lifecycle"),
        (name = "users", description = "User registration and profile")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_registers_every_course_operation() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/courses"));
        assert!(paths.contains_key("/api/courses/{course_id}"));
        assert!(paths.contains_key("/api/users"));
        assert!(paths.contains_key("/"));
    }

    #[test]
    fn document_registers_the_error_envelope_schema() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        assert!(schemas.contains_key("ErrorEnvelopeSchema"));
    }
}
