use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::results::model::StudentResult;
use crate::modules::schools::model::School;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_school,
        crate::modules::results::controller::get_results,
    ),
    components(
        schemas(
            School,
            LoginRequest,
            LoginResponse,
            StudentResult,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "School login endpoints"),
        (name = "Results", description = "Exam results for the authenticated school")
    ),
    info(
        title = "Markbook API",
        version = "0.1.0",
        description = "School results portal API: token-based school authentication and scoped results lookup.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
