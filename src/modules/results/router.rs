use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_results;

pub fn init_results_router() -> Router<AppState> {
    Router::new().route("/", get(get_results))
}
