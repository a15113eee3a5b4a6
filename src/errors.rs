use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use schemars::JsonSchema;
use serde::Serialize;

use crate::inference::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Model not loaded")]
    ServiceUnavailable,

    #[error("Prediction error: {0}")]
    ComputationFailure(String),

    #[error("{0}")]
    MalformedBody(String),
}

/// Body of every error response.
#[derive(Serialize, JsonSchema)]
pub struct ErrorBody {
    pub detail: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable | AppError::ComputationFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::MalformedBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::ComputationFailure(cause) => {
                tracing::error!(cause = %cause, "Prediction failed");
            }
            AppError::ServiceUnavailable => {
                tracing::error!("Prediction requested but no model is loaded");
            }
            AppError::InvalidInput(msg) | AppError::MalformedBody(msg) => {
                tracing::warn!(reason = %msg, "Rejected prediction request");
            }
        }

        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<ModelError> for AppError {
    fn from(e: ModelError) -> Self {
        AppError::ComputationFailure(e.to_string())
    }
}
