//! Handler for the trip listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::trip::TripItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all trips ordered by start date, with their countries.
///
/// # Endpoint
///
/// `GET /api/trips`
pub async fn trip_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<TripItem>>, AppError> {
    let trips = state.trip_service.list_trips().await?;

    Ok(Json(trips.into_iter().map(TripItem::from).collect()))
}
