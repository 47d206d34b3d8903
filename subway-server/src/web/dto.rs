//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;

/// Request to create a station.
#[derive(Debug, Deserialize)]
pub struct CreateStationRequest {
    /// Display name of the new station
    pub name: String,
}

/// A station in API responses.
#[derive(Debug, Serialize)]
pub struct StationResponse {
    /// Assigned identifier
    pub id: u64,

    /// Display name
    pub name: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl StationResponse {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.0,
            name: station.name.as_str().to_string(),
        }
    }
}
