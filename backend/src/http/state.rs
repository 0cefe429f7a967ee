//! Application state for the HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use crate::models::Dataset;

/// Shared application state passed to all handlers.
///
/// The dataset is loaded once before the server binds and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    /// Image served at the logo asset path
    pub logo: PathBuf,
}

impl AppState {
    /// Create a new application state around a loaded dataset.
    pub fn new(dataset: Dataset, logo: impl Into<PathBuf>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            logo: logo.into(),
        }
    }
}
