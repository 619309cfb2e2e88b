//! Helper functions shared across layers.
//!
//! - [`client_validator`] - Field rules for new clients (required fields, email, PESEL)
//! - [`db_error`] - Constraint-aware inspection of `sqlx` errors

pub mod client_validator;
pub mod db_error;
