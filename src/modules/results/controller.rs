use axum::Json;
use axum::extract::{Query, State};
use tracing::instrument;

use crate::middleware::auth::AuthSchool;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{ResultsQuery, StudentResult};
use super::service::ResultsService;

/// List the authenticated school's results
#[utoipa::path(
    get,
    path = "/api/results",
    params(ResultsQuery),
    responses(
        (status = 200, description = "Results for the authenticated school", body = Vec<StudentResult>),
        (status = 401, description = "Missing or invalid token", body = crate::modules::auth::controller::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::modules::auth::controller::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Results"
)]
#[instrument(skip(state, auth))]
pub async fn get_results(
    State(state): State<AppState>,
    auth: AuthSchool,
    Query(params): Query<ResultsQuery>,
) -> Result<Json<Vec<StudentResult>>, AppError> {
    let school_id = auth.school_id()?;
    let results =
        ResultsService::get_results_for_school(&state.db, school_id, params.exam_year).await?;
    Ok(Json(results))
}
