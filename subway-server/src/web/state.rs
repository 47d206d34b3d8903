//! Application state for the web layer.

use std::sync::Arc;

use crate::stations::StationStore;

/// Shared application state.
///
/// Contains the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station collection backing the resource endpoints
    pub stations: Arc<StationStore>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stations: StationStore) -> Self {
        Self {
            stations: Arc::new(stations),
        }
    }
}
