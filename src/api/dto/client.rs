//! DTOs for client creation and client-trip registration.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::trip::TripItem;
use crate::domain::entities::{ClientTrip, DateCode, NewClient};

/// Request body for `POST /api/clients`.
///
/// Missing string fields deserialize as empty so the service reports them as
/// required instead of the extractor rejecting the body. Lengths follow the
/// `Client` column widths.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[serde(default)]
    #[validate(length(max = 120))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = 120))]
    pub last_name: String,

    #[serde(default)]
    #[validate(length(max = 120))]
    pub email: String,

    #[validate(length(max = 120))]
    pub telephone: Option<String>,

    /// Optional 11-digit national identification number.
    #[validate(length(max = 120))]
    pub pesel: Option<String>,
}

impl From<CreateClientRequest> for NewClient {
    fn from(r: CreateClientRequest) -> Self {
        NewClient {
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            telephone: r.telephone,
            pesel: r.pesel,
        }
    }
}

/// Response for a created client.
#[derive(Debug, Serialize)]
pub struct CreateClientResponse {
    pub id_client: i32,
}

/// A client's registration with the trip it refers to.
#[derive(Debug, Serialize)]
pub struct ClientTripItem {
    pub id_client: i32,
    pub id_trip: i32,
    pub registered_at: DateCode,
    pub payment_date: Option<DateCode>,
    pub trip: TripItem,
}

impl From<ClientTrip> for ClientTripItem {
    fn from(ct: ClientTrip) -> Self {
        Self {
            id_client: ct.client_id,
            id_trip: ct.trip_id,
            registered_at: ct.registered_at,
            payment_date: ct.payment_date,
            trip: TripItem::from(ct.trip),
        }
    }
}

/// Response for `GET /api/clients/{id}/trips`.
///
/// Untagged: either the registration array or a message object when the
/// client has none.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ClientTripsResponse {
    Trips(Vec<ClientTripItem>),
    Empty(MessageResponse),
}

/// Plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub message: String,
    pub registered_at: DateCode,
}
