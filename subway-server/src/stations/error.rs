//! Station store error types.

use crate::domain::StationId;

/// Errors that can occur when accessing the station store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No station with the requested id
    #[error("station {0} not found")]
    NotFound(StationId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StoreError::NotFound(StationId(3));
        assert_eq!(err.to_string(), "station 3 not found");
    }
}
