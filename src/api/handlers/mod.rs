//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod clients;
pub mod health;
pub mod trips;

pub use clients::{
    client_trips_handler, create_client_handler, register_client_handler, remove_client_handler,
};
pub use health::health_handler;
pub use trips::trip_list_handler;
