pub mod artifact;
pub mod classifier;
pub mod forest;
pub mod logistic;
pub mod predictor;
pub mod risk;

pub use artifact::{load_classifier, ModelArtifact};
pub use classifier::{
    Classifier, FeatureMatrix, ModelError, SharedClassifier, FEATURE_COUNT, FEATURE_NAMES,
};
pub use forest::RandomForest;
pub use logistic::LogisticRegression;
pub use predictor::{predict, PredictionResult};
pub use risk::{round_probability, RiskLevel};
