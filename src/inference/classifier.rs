use std::fmt;
use std::sync::Arc;

/// Number of columns in a feature vector.
pub const FEATURE_COUNT: usize = 8;

/// Column order expected by every classifier. Artifacts that name their
/// columns must list them in exactly this order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "pregnancies",
    "glucose",
    "blood_pressure",
    "skin_thickness",
    "insulin",
    "bmi",
    "diabetes_pedigree_function",
    "age",
];

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    Invalid(String),

    #[error("expected {expected} feature columns, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("classifier produced an invalid probability")]
    InvalidOutput,
}

/// Row-major batch of observations.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    data: Vec<f64>,
    cols: usize,
}

impl FeatureMatrix {
    /// A batch holding exactly one observation.
    pub fn single_row(row: &[f64]) -> Self {
        Self {
            data: row.to_vec(),
            cols: row.len(),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.cols.max(1))
    }
}

/// A fitted binary classifier.
///
/// Implementations are immutable once built, so a single instance can be
/// shared across request handlers without locking.
pub trait Classifier: fmt::Debug + Send + Sync {
    /// Short identifier of the model family, used in logs.
    fn kind(&self) -> &'static str;

    fn n_features(&self) -> usize;

    /// Per-row `[p(class 0), p(class 1)]`.
    fn classify_probability(&self, batch: &FeatureMatrix) -> Result<Vec<[f64; 2]>, ModelError>;

    /// Per-row class label in `{0, 1}`. Ties go to class 0.
    fn classify(&self, batch: &FeatureMatrix) -> Result<Vec<u8>, ModelError> {
        Ok(self
            .classify_probability(batch)?
            .into_iter()
            .map(|[p0, p1]| u8::from(p1 > p0))
            .collect())
    }

    fn check_shape(&self, batch: &FeatureMatrix) -> Result<(), ModelError> {
        if batch.cols() != self.n_features() {
            return Err(ModelError::ShapeMismatch {
                expected: self.n_features(),
                got: batch.cols(),
            });
        }
        Ok(())
    }
}

pub type SharedClassifier = Arc<dyn Classifier>;
