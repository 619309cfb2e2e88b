//! Client creation and trip registration workflow.

use std::sync::Arc;

use crate::application::services::TripService;
use crate::domain::entities::{
    Client, ClientTrip, DateCode, NewClient, NewRegistration, RegistrationReceipt,
};
use crate::domain::repositories::{ClientRepository, RegistrationRepository};
use crate::error::AppError;
use crate::utils::client_validator::validate_new_client;
use serde_json::json;

/// Service for client records and their trip registrations.
///
/// Registration runs its checks in a fixed order so the error kind is
/// predictable: existence (404) before state (409) before the write.
pub struct ClientService {
    client_repository: Arc<dyn ClientRepository>,
    registration_repository: Arc<dyn RegistrationRepository>,
    trip_service: Arc<TripService>,
}

impl ClientService {
    /// Creates a new client service.
    pub fn new(
        client_repository: Arc<dyn ClientRepository>,
        registration_repository: Arc<dyn RegistrationRepository>,
        trip_service: Arc<TripService>,
    ) -> Self {
        Self {
            client_repository,
            registration_repository,
            trip_service,
        }
    }

    /// Lists a client's registrations with their trips.
    ///
    /// An unknown client yields an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_client_trips(&self, client_id: i32) -> Result<Vec<ClientTrip>, AppError> {
        if !self.client_exists(client_id).await? {
            return Ok(Vec::new());
        }

        self.registration_repository.list_for_client(client_id).await
    }

    /// Checks whether a client exists.
    pub async fn client_exists(&self, client_id: i32) -> Result<bool, AppError> {
        self.client_repository.exists(client_id).await
    }

    /// Retrieves a client by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the client does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_client(&self, client_id: i32) -> Result<Client, AppError> {
        self.client_repository
            .find_by_id(client_id)
            .await?
            .ok_or_else(|| client_not_found(client_id))
    }

    /// Validates and stores a new client, returning its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is empty or the
    /// email/PESEL is malformed.
    /// Returns [`AppError::Conflict`] if the email is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_client(&self, new_client: NewClient) -> Result<i32, AppError> {
        validate_new_client(&new_client)?;

        if self
            .client_repository
            .email_exists(&new_client.email)
            .await?
        {
            tracing::debug!(email = %new_client.email, "Rejected client with duplicate email");
            return Err(AppError::conflict(
                "Email is already in use",
                json!({ "email": new_client.email }),
            ));
        }

        let client_id = self.client_repository.create(new_client.normalized()).await?;
        tracing::info!(client_id, "Client created");

        Ok(client_id)
    }

    /// Checks whether the client is registered for the trip.
    pub async fn is_registered(&self, client_id: i32, trip_id: i32) -> Result<bool, AppError> {
        self.registration_repository.exists(client_id, trip_id).await
    }

    /// Registers a client for a trip with today's date and no payment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the client or the trip does not exist.
    /// Returns [`AppError::Conflict`] if the client is already registered or
    /// the trip is full.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn register_client_for_trip(
        &self,
        client_id: i32,
        trip_id: i32,
    ) -> Result<RegistrationReceipt, AppError> {
        if !self.client_exists(client_id).await? {
            return Err(client_not_found(client_id));
        }

        if !self.trip_service.trip_exists(trip_id).await? {
            return Err(AppError::not_found(
                format!("Trip with ID {trip_id} not found"),
                json!({ "trip_id": trip_id }),
            ));
        }

        if self.is_registered(client_id, trip_id).await? {
            return Err(AppError::conflict(
                "Client is already registered for this trip",
                json!({ "client_id": client_id, "trip_id": trip_id }),
            ));
        }

        if self.trip_service.is_trip_full(trip_id).await? {
            tracing::debug!(client_id, trip_id, "Rejected registration for full trip");
            return Err(AppError::conflict(
                "Maximum number of participants has been reached for this trip",
                json!({ "trip_id": trip_id }),
            ));
        }

        let registration = NewRegistration {
            client_id,
            trip_id,
            registered_at: DateCode::today(),
        };

        let registered = self.registration_repository.create(registration).await?;
        if registered {
            tracing::info!(
                client_id,
                trip_id,
                registered_at = %registration.registered_at,
                "Client registered for trip"
            );
        } else {
            tracing::warn!(client_id, trip_id, "Registration insert affected no rows");
        }

        Ok(RegistrationReceipt {
            registered,
            registered_at: registration.registered_at,
        })
    }

    /// Removes a client's registration from a trip.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the client is not registered for the trip.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn remove_client_from_trip(
        &self,
        client_id: i32,
        trip_id: i32,
    ) -> Result<bool, AppError> {
        if !self.is_registered(client_id, trip_id).await? {
            return Err(AppError::not_found(
                "Client is not registered for this trip",
                json!({ "client_id": client_id, "trip_id": trip_id }),
            ));
        }

        let removed = self
            .registration_repository
            .delete(client_id, trip_id)
            .await?;
        tracing::info!(client_id, trip_id, removed, "Client registration removed");

        Ok(removed)
    }
}

fn client_not_found(client_id: i32) -> AppError {
    AppError::not_found(
        format!("Client with ID {client_id} not found"),
        json!({ "client_id": client_id }),
    )
}
