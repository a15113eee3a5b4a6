use axum::extract::State;
use axum::Json;

use crate::models::HealthResponse;
use crate::AppState;

/// GET /health. Reachable whether or not the model loaded.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.model_loaded()))
}
