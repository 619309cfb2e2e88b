//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization; request bodies additionally
//! derive `validator::Validate`.

pub mod client;
pub mod health;
pub mod trip;
