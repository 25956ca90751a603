//! Application state shared across handlers

use std::sync::Arc;

use infrastructure::{AppConfig, ObservationStore};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Observation query layer
    pub store: Arc<ObservationStore>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
