use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::inference::{self, PredictionResult};
use crate::models::PredictionRequest;
use crate::AppState;

/// POST /predict. Scores one feature vector.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionResult>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::MalformedBody(e.body_text()))?;
    let result = inference::predict(state.model.as_deref(), &request.features)?;
    Ok(Json(result))
}
