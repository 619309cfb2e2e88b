//! Repository trait for the trip catalogue.

use crate::domain::entities::{Trip, TripCapacity};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to trips and their countries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTripRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Lists every trip ordered by start date, each with its full country set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_with_countries(&self) -> Result<Vec<Trip>, AppError>;

    /// Checks whether a trip with the given id exists.
    async fn exists(&self, trip_id: i32) -> Result<bool, AppError>;

    /// Loads the participant limit and current registration count.
    ///
    /// Returns `Ok(None)` if the trip does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_capacity(&self, trip_id: i32) -> Result<Option<TripCapacity>, AppError>;

    /// Counts all trips.
    async fn count(&self) -> Result<i64, AppError>;
}
