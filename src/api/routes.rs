//! API route configuration.

use crate::api::handlers::{
    client_trips_handler, create_client_handler, register_client_handler, remove_client_handler,
    trip_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /trips`                        - List trips with countries
/// - `POST   /clients`                      - Create a client
/// - `GET    /clients/{id}/trips`           - List a client's registrations
/// - `PUT    /clients/{id}/trips/{trip_id}` - Register a client for a trip
/// - `DELETE /clients/{id}/trips/{trip_id}` - Remove a registration
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/trips", get(trip_list_handler))
        .route("/clients", post(create_client_handler))
        .route("/clients/{id}/trips", get(client_trips_handler))
        .route(
            "/clients/{id}/trips/{trip_id}",
            put(register_client_handler).delete(remove_client_handler),
        )
}
