//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::{StationId, StationName};
use crate::stations::StoreError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations).post(create_station))
        .route("/stations/:id", get(get_station).delete(delete_station))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Create a new station.
async fn create_station(
    State(state): State<AppState>,
    Json(req): Json<CreateStationRequest>,
) -> Result<Response, AppError> {
    let name = StationName::parse(&req.name).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let station = state.stations.create(name).await;
    info!(id = %station.id, "created station");

    let location = format!("/stations/{}", station.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(StationResponse::from_station(&station)),
    )
        .into_response())
}

/// List all stations, in creation order.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let stations = state.stations.list().await;

    Json(
        stations
            .iter()
            .map(StationResponse::from_station)
            .collect(),
    )
}

/// Look up a single station by id.
async fn get_station(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<StationResponse>, AppError> {
    let station = state.stations.get(StationId(id)).await?;
    Ok(Json(StationResponse::from_station(&station)))
}

/// Delete a station by id.
///
/// Deletion is idempotent: an id that does not exist still yields
/// 204 No Content.
async fn delete_station(State(state): State<AppState>, Path(id): Path<u64>) -> StatusCode {
    let removed = state.stations.delete(StationId(id)).await;
    if !removed {
        info!(id, "delete of unknown station id");
    }

    StatusCode::NO_CONTENT
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
