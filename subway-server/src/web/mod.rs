//! Web layer for the station service.
//!
//! Provides HTTP endpoints for creating, listing, looking up, and
//! deleting stations.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
