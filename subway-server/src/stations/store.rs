//! In-memory station storage.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{Station, StationId, StationName};

use super::error::StoreError;

/// Thread-safe, insertion-ordered station collection.
///
/// The collection is shared behind a lock: reads run concurrently, while
/// creation and deletion take the write half. Clones share the same
/// underlying collection.
#[derive(Clone, Default)]
pub struct StationStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    stations: Vec<Station>,
    // Highest id handed out so far; ids of deleted stations are not reused.
    last_id: u64,
}

impl StationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new station, assigning the next id.
    pub async fn create(&self, name: StationName) -> Station {
        let mut guard = self.inner.write().await;
        guard.last_id += 1;

        let station = Station {
            id: StationId(guard.last_id),
            name,
        };
        guard.stations.push(station.clone());

        debug!(id = %station.id, name = %station.name, "station created");
        station
    }

    /// Snapshot of all stations, in creation order.
    pub async fn list(&self) -> Vec<Station> {
        let guard = self.inner.read().await;
        guard.stations.clone()
    }

    /// Look up a station by id.
    pub async fn get(&self, id: StationId) -> Result<Station, StoreError> {
        let guard = self.inner.read().await;
        guard
            .stations
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Remove the station with the given id.
    ///
    /// Returns whether a station was actually removed.
    pub async fn delete(&self, id: StationId) -> bool {
        let mut guard = self.inner.write().await;
        let before = guard.stations.len();
        guard.stations.retain(|s| s.id != id);

        let removed = guard.stations.len() != before;
        if removed {
            debug!(id = %id, "station deleted");
        }
        removed
    }

    /// Get the number of stations in the store.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.stations.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.stations.is_empty()
    }
}
