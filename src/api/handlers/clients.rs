//! Handlers for client and registration endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::client::{
    ClientTripItem, ClientTripsResponse, CreateClientRequest, CreateClientResponse,
    MessageResponse, RegistrationResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the trips a client is registered for.
///
/// # Endpoint
///
/// `GET /api/clients/{id}/trips`
///
/// Returns a `{ "message": ... }` object instead of an array when the client
/// has no registrations.
///
/// # Errors
///
/// Returns 404 if the client does not exist.
pub async fn client_trips_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ClientTripsResponse>, AppError> {
    if !state.client_service.client_exists(id).await? {
        return Err(AppError::not_found(
            format!("Client with ID {id} not found"),
            json!({ "client_id": id }),
        ));
    }

    let trips = state.client_service.get_client_trips(id).await?;

    if trips.is_empty() {
        return Ok(Json(ClientTripsResponse::Empty(MessageResponse {
            message: format!("Client with ID {id} has no registered trips"),
        })));
    }

    Ok(Json(ClientTripsResponse::Trips(
        trips.into_iter().map(ClientTripItem::from).collect(),
    )))
}

/// Creates a new client.
///
/// # Endpoint
///
/// `POST /api/clients`
///
/// # Request Body
///
/// ```json
/// {
///   "first_name": "Jan",
///   "last_name": "Kowalski",
///   "email": "jan@example.com",
///   "telephone": "+48 600 100 200",
///   "pesel": "90010112345"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is not valid JSON for this shape, or a required
/// field is missing or malformed.
/// Returns 409 if the email is already in use.
pub async fn create_client_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateClientRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateClientResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let id_client = state.client_service.create_client(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(CreateClientResponse { id_client })))
}

/// Registers a client for a trip.
///
/// # Endpoint
///
/// `PUT /api/clients/{id}/trips/{trip_id}`
///
/// # Errors
///
/// Returns 404 if the client or trip does not exist.
/// Returns 409 if already registered or the trip is full.
pub async fn register_client_handler(
    Path((id, trip_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<Json<RegistrationResponse>, AppError> {
    let receipt = state
        .client_service
        .register_client_for_trip(id, trip_id)
        .await?;

    if !receipt.registered {
        return Err(AppError::internal(
            "Registration was not stored",
            json!({ "client_id": id, "trip_id": trip_id }),
        ));
    }

    Ok(Json(RegistrationResponse {
        message: "Client successfully registered for the trip".to_string(),
        registered_at: receipt.registered_at,
    }))
}

/// Removes a client's registration from a trip.
///
/// # Endpoint
///
/// `DELETE /api/clients/{id}/trips/{trip_id}`
///
/// # Errors
///
/// Returns 404 if the client is not registered for the trip.
pub async fn remove_client_handler(
    Path((id, trip_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .client_service
        .remove_client_from_trip(id, trip_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Client registration successfully removed from the trip".to_string(),
    }))
}
