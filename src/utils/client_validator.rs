//! Validation rules for new client records.
//!
//! Checks run in a fixed order and stop at the first failure, so the error
//! names the first offending field.

use crate::domain::entities::NewClient;
use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// `local@domain.tld` with no whitespace and exactly one `@` per side.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// PESEL: exactly eleven ASCII digits.
static PESEL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{11}$").unwrap());

/// Validates a client before insertion.
///
/// # Rules
///
/// 1. `first_name`, `last_name` and `email` are required (non-blank)
/// 2. `email` must look like `local@domain.tld`
/// 3. `pesel`, when supplied and non-empty, must be exactly 11 digits
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the first field that fails.
pub fn validate_new_client(client: &NewClient) -> Result<(), AppError> {
    require("first_name", &client.first_name)?;
    require("last_name", &client.last_name)?;
    require("email", &client.email)?;

    if !is_valid_email(&client.email) {
        return Err(AppError::bad_request(
            "Invalid email format",
            json!({ "field": "email", "email": client.email }),
        ));
    }

    if let Some(pesel) = client.pesel.as_deref()
        && !pesel.is_empty()
        && !is_valid_pesel(pesel)
    {
        return Err(AppError::bad_request(
            "Invalid PESEL format",
            json!({ "field": "pesel", "hint": "PESEL must be exactly 11 digits" }),
        ));
    }

    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_pesel(pesel: &str) -> bool {
    PESEL_REGEX.is_match(pesel)
}

fn require(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(
            format!("{field} is required"),
            json!({ "field": field }),
        ));
    }
    Ok(())
}
