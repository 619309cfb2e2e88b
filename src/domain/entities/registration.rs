//! Client-trip registration entities.

use super::date_code::DateCode;
use super::trip::Trip;

/// A client's registration for a trip, joined with the trip itself.
#[derive(Debug, Clone)]
pub struct ClientTrip {
    pub client_id: i32,
    pub trip_id: i32,
    pub registered_at: DateCode,
    pub payment_date: Option<DateCode>,
    pub trip: Trip,
}

/// Input data for a new registration. Payment date always starts empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRegistration {
    pub client_id: i32,
    pub trip_id: i32,
    pub registered_at: DateCode,
}

/// Result of a registration attempt that passed all checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationReceipt {
    /// Whether the insert affected a row.
    pub registered: bool,
    pub registered_at: DateCode,
}
