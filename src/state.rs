// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::completion::{CompletionBackend, FoundryClient};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub completion: Arc<dyn CompletionBackend>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let completion: Arc<dyn CompletionBackend> =
            Arc::new(FoundryClient::from_config(&config));
        Self { config, completion }
    }

    /// Build state around an arbitrary backend. Tests use this to inject
    /// mock backends.
    pub fn with_backend(config: Config, completion: Arc<dyn CompletionBackend>) -> Self {
        Self { config, completion }
    }
}
