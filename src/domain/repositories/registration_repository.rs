//! Repository trait for client-trip registrations.

use crate::domain::entities::{ClientTrip, NewRegistration};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `Client_Trip` join records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRegistrationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_registration.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Lists all registrations of a client, each joined with its trip and countries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_client(&self, client_id: i32) -> Result<Vec<ClientTrip>, AppError>;

    /// Checks whether the client is registered for the trip.
    async fn exists(&self, client_id: i32, trip_id: i32) -> Result<bool, AppError>;

    /// Inserts a registration with no payment date.
    ///
    /// Implementations must enforce capacity and uniqueness atomically with
    /// the insert. Returns whether a row was written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the pair is already registered or
    /// the trip is full.
    /// Returns [`AppError::NotFound`] if the trip no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, registration: NewRegistration) -> Result<bool, AppError>;

    /// Deletes a registration. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, client_id: i32, trip_id: i32) -> Result<bool, AppError>;
}
