use schemars::JsonSchema;
use serde::Serialize;

use super::classifier::{Classifier, FeatureMatrix, ModelError, FEATURE_COUNT};
use super::risk::{round_probability, RiskLevel};

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct PredictionResult {
    pub prediction: u8,
    pub probability: f64,
    pub risk_level: RiskLevel,
}

/// Score one observation.
///
/// Checks run in order: model availability, feature count, then the
/// classifier itself. Any classifier failure is reported as
/// [`AppError::ComputationFailure`].
pub fn predict(
    model: Option<&dyn Classifier>,
    features: &[f64],
) -> Result<PredictionResult, AppError> {
    let model = model.ok_or(AppError::ServiceUnavailable)?;

    if features.len() != FEATURE_COUNT {
        return Err(AppError::InvalidInput(format!(
            "Expected {FEATURE_COUNT} features, got {}",
            features.len()
        )));
    }

    Ok(score(model, features)?)
}

fn score(model: &dyn Classifier, features: &[f64]) -> Result<PredictionResult, ModelError> {
    let batch = FeatureMatrix::single_row(features);

    let prediction = first(model.classify(&batch)?)?;
    let [_, probability] = first(model.classify_probability(&batch)?)?;

    if !(0.0..=1.0).contains(&probability) {
        return Err(ModelError::InvalidOutput);
    }

    let risk_level = RiskLevel::from_probability(probability);
    let probability = round_probability(probability)?;

    tracing::debug!(
        prediction,
        probability,
        risk_level = %risk_level,
        "Prediction computed"
    );

    Ok(PredictionResult {
        prediction,
        probability,
        risk_level,
    })
}

fn first<T>(rows: Vec<T>) -> Result<T, ModelError> {
    rows.into_iter().next().ok_or(ModelError::ShapeMismatch {
        expected: 1,
        got: 0,
    })
}
