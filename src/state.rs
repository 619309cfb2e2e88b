//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ClientService, TripService};
use crate::infrastructure::persistence::{
    PgClientRepository, PgRegistrationRepository, PgTripRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub trip_service: Arc<TripService>,
    pub client_service: Arc<ClientService>,
}

impl AppState {
    pub fn new(trip_service: Arc<TripService>, client_service: Arc<ClientService>) -> Self {
        Self {
            trip_service,
            client_service,
        }
    }

    /// Wires the PostgreSQL repositories and services around one pool.
    pub fn from_pool(pool: Arc<PgPool>) -> Self {
        let trip_repository = Arc::new(PgTripRepository::new(pool.clone()));
        let client_repository = Arc::new(PgClientRepository::new(pool.clone()));
        let registration_repository = Arc::new(PgRegistrationRepository::new(pool));

        let trip_service = Arc::new(TripService::new(trip_repository));
        let client_service = Arc::new(ClientService::new(
            client_repository,
            registration_repository,
            trip_service.clone(),
        ));

        Self::new(trip_service, client_service)
    }
}
