//! Trip catalogue queries.

use std::sync::Arc;

use crate::domain::entities::{Trip, TripCapacity};
use crate::domain::repositories::TripRepository;
use crate::error::AppError;

/// Service answering questions about trips: listing, existence and capacity.
pub struct TripService {
    repository: Arc<dyn TripRepository>,
}

impl TripService {
    /// Creates a new trip service.
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    /// Lists all trips ordered by start date, each with its countries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_trips(&self) -> Result<Vec<Trip>, AppError> {
        self.repository.list_with_countries().await
    }

    /// Checks whether a trip exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn trip_exists(&self, trip_id: i32) -> Result<bool, AppError> {
        self.repository.exists(trip_id).await
    }

    /// Checks whether a trip has reached its participant limit.
    ///
    /// A trip that does not exist is reported as not full; callers check
    /// existence first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn is_trip_full(&self, trip_id: i32) -> Result<bool, AppError> {
        let capacity = self.trip_capacity(trip_id).await?;
        Ok(capacity.is_some_and(|c| c.is_full()))
    }

    /// Participant limit and current registration count, or `None` for an
    /// unknown trip.
    pub async fn trip_capacity(&self, trip_id: i32) -> Result<Option<TripCapacity>, AppError> {
        self.repository.find_capacity(trip_id).await
    }

    /// Counts all trips.
    pub async fn count_trips(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
