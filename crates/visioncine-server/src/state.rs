//! Shared application state

use std::sync::Arc;

use visioncine_core::VisioncineScraper;

/// State handed to every handler
///
/// The scraper is the only shared dependency; no state is mutated across
/// requests.
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<VisioncineScraper>,
    pub environment: String,
}

impl AppState {
    pub fn new(scraper: VisioncineScraper, environment: impl Into<String>) -> Self {
        Self {
            scraper: Arc::new(scraper),
            environment: environment.into(),
        }
    }
}
