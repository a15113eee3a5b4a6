pub mod api;
pub mod config;
pub mod errors;
pub mod inference;
pub mod models;

use crate::config::AppConfig;
use crate::inference::SharedClassifier;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// `None` when the artifact failed to load at startup; stays that way
    /// until the process is restarted.
    pub model: Option<SharedClassifier>,
}

impl AppState {
    pub fn new(config: AppConfig, model: Option<SharedClassifier>) -> Self {
        Self { config, model }
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }
}
