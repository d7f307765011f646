use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::modules::auth::model::SchoolClaims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_school_token;

/// Extractor that validates the bearer token and provides the authenticated
/// school's claims.
///
/// Every verification failure surfaces as the same unauthorized response;
/// the reason is only logged.
#[derive(Debug, Clone)]
pub struct AuthSchool(pub SchoolClaims);

impl AuthSchool {
    /// The school's row id, parsed from the token.
    pub fn school_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.school_id)
            .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid school ID in token")))
    }

    pub fn school_code(&self) -> &str {
        &self.0.school_code
    }

    pub fn lga_code(&self) -> &str {
        &self.0.lga_code
    }

    pub fn school_name(&self) -> &str {
        &self.0.school_name
    }
}

impl FromRequestParts<AppState> for AuthSchool {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::unauthorized(anyhow::anyhow!("Missing authorization header"))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized(anyhow::anyhow!("Invalid authorization header format"))
        })?;

        let claims = verify_school_token(token, &state.jwt_config)
            .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid or expired token")))?;

        Ok(AuthSchool(claims))
    }
}

/// Route-layer gate for the results endpoints: rejects requests without a
/// valid school session before any handler runs.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let protected = init_results_router()
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_school));
/// ```
pub async fn require_school(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    match AuthSchool::from_request_parts(&mut parts, &state).await {
        Ok(_) => next.run(Request::from_parts(parts, body)).await,
        Err(err) => err.into_response(),
    }
}
