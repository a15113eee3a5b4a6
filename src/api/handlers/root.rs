use axum::extract::State;
use axum::Json;

use crate::models::RootResponse;
use crate::AppState;

/// GET / service banner.
pub async fn index(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse::running(state.model_loaded()))
}
