//! Application state shared across handlers.

use std::sync::Arc;

use tours_core::TourService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Lookup and booking service over the tour catalog.
    pub service: Arc<TourService>,
}

impl AppState {
    /// Create new application state.
    pub fn new(service: TourService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
