//! On-disk classifier artifact.
//!
//! The artifact is a JSON document tagged by `kind`:
//!
//! ```json
//! { "kind": "logistic_regression", "coefficients": [..], "intercept": -8.4 }
//! { "kind": "random_forest", "trees": [{ "nodes": [..] }] }
//! ```
//!
//! Both kinds accept an optional `feature_names` list. Loading validates the
//! whole structure up front so a classifier that loads never fails on shape
//! at request time.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use super::classifier::{ModelError, SharedClassifier, FEATURE_COUNT, FEATURE_NAMES};
use super::forest::{DecisionTree, RandomForest};
use super::logistic::LogisticRegression;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression {
        #[serde(default)]
        feature_names: Option<Vec<String>>,
        coefficients: Vec<f64>,
        intercept: f64,
    },
    RandomForest {
        #[serde(default)]
        feature_names: Option<Vec<String>>,
        trees: Vec<DecisionTree>,
    },
}

impl ModelArtifact {
    pub fn from_json(s: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(s)?)
    }

    fn feature_names(&self) -> Option<&[String]> {
        match self {
            ModelArtifact::LogisticRegression { feature_names, .. }
            | ModelArtifact::RandomForest { feature_names, .. } => feature_names.as_deref(),
        }
    }

    /// Validate and build the classifier described by this artifact.
    pub fn into_classifier(self) -> Result<SharedClassifier, ModelError> {
        if let Some(names) = self.feature_names() {
            check_feature_names(names)?;
        }

        match self {
            ModelArtifact::LogisticRegression {
                coefficients,
                intercept,
                ..
            } => {
                if coefficients.len() != FEATURE_COUNT {
                    return Err(ModelError::Invalid(format!(
                        "artifact has {} coefficients, expected {FEATURE_COUNT}",
                        coefficients.len()
                    )));
                }
                Ok(Arc::new(LogisticRegression::new(coefficients, intercept)?))
            }
            ModelArtifact::RandomForest { trees, .. } => {
                Ok(Arc::new(RandomForest::new(trees, FEATURE_COUNT)?))
            }
        }
    }
}

/// Named columns must match [`FEATURE_NAMES`] in count and order.
fn check_feature_names(names: &[String]) -> Result<(), ModelError> {
    if names.len() != FEATURE_COUNT {
        return Err(ModelError::Invalid(format!(
            "artifact lists {} feature names, expected {FEATURE_COUNT}",
            names.len()
        )));
    }
    if let Some((idx, (got, expected))) = names
        .iter()
        .zip(FEATURE_NAMES)
        .enumerate()
        .find(|(_, (got, expected))| got.as_str() != *expected)
    {
        return Err(ModelError::Invalid(format!(
            "feature {idx} is `{got}`, expected `{expected}`"
        )));
    }
    Ok(())
}

/// Read, parse and validate the classifier artifact at `path`.
pub fn load_classifier(path: impl AsRef<Path>) -> Result<SharedClassifier, ModelError> {
    let raw = std::fs::read_to_string(path)?;
    ModelArtifact::from_json(&raw)?.into_classifier()
}
