//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters for every query.
//!
//! # Repositories
//!
//! - [`PgTripRepository`] - Trip catalogue, countries and capacity
//! - [`PgClientRepository`] - Client records
//! - [`PgRegistrationRepository`] - Client-trip registrations

pub mod pg_client_repository;
pub mod pg_registration_repository;
pub mod pg_trip_repository;

pub use pg_client_repository::PgClientRepository;
pub use pg_registration_repository::PgRegistrationRepository;
pub use pg_trip_repository::PgTripRepository;
