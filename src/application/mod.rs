//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the operations HTTP
//! handlers and the admin CLI call into.
//!
//! # Available Services
//!
//! - [`services::trip_service::TripService`] - Trip listing, existence and capacity checks
//! - [`services::client_service::ClientService`] - Client creation and trip registration

pub mod services;
