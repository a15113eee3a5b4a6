use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "Diabetes Prediction API";

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub model_loaded: bool,
}

impl RootResponse {
    pub fn running(model_loaded: bool) -> Self {
        Self {
            message: SERVICE_NAME.into(),
            status: "running".into(),
            model_loaded,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

impl HealthResponse {
    pub fn healthy(model_loaded: bool) -> Self {
        Self {
            status: "healthy".into(),
            model_loaded,
        }
    }
}
