pub mod prediction;
pub mod status;

pub use crate::inference::{PredictionResult, RiskLevel};
pub use prediction::{sample_request, PredictionRequest};
pub use status::{HealthResponse, RootResponse, SERVICE_NAME};
