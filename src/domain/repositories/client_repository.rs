//! Repository trait for client records.

use crate::domain::entities::{Client, NewClient};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for clients.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClientRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_client.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Checks whether a client with the given id exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, client_id: i32) -> Result<bool, AppError>;

    /// Finds a client by id.
    async fn find_by_id(&self, client_id: i32) -> Result<Option<Client>, AppError>;

    /// Checks whether any client already uses `email` (exact match).
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;

    /// Inserts a client and returns the newly assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_client: NewClient) -> Result<i32, AppError>;
}
