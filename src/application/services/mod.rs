//! Business logic services for the application layer.

pub mod client_service;
pub mod trip_service;

pub use client_service::ClientService;
pub use trip_service::TripService;
