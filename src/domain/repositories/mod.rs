//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`TripRepository`] - Trip catalogue and capacity lookups
//! - [`ClientRepository`] - Client records
//! - [`RegistrationRepository`] - Client-trip registrations

pub mod client_repository;
pub mod registration_repository;
pub mod trip_repository;

pub use client_repository::ClientRepository;
pub use registration_repository::RegistrationRepository;
pub use trip_repository::TripRepository;

#[cfg(test)]
pub use client_repository::MockClientRepository;
#[cfg(test)]
pub use registration_repository::MockRegistrationRepository;
#[cfg(test)]
pub use trip_repository::MockTripRepository;
