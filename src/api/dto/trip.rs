//! DTOs for trip listings.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::entities::{Country, Trip};

/// Country visited by a trip.
#[derive(Debug, Serialize)]
pub struct CountryItem {
    pub id_country: i32,
    pub name: String,
}

/// Individual trip with its countries.
#[derive(Debug, Serialize)]
pub struct TripItem {
    pub id_trip: i32,
    pub name: String,
    pub description: Option<String>,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
    pub countries: Vec<CountryItem>,
}

impl From<Country> for CountryItem {
    fn from(c: Country) -> Self {
        Self {
            id_country: c.id,
            name: c.name,
        }
    }
}

impl From<Trip> for TripItem {
    fn from(t: Trip) -> Self {
        Self {
            id_trip: t.id,
            name: t.name,
            description: t.description,
            date_from: t.date_from,
            date_to: t.date_to,
            max_people: t.max_people,
            countries: t.countries.into_iter().map(CountryItem::from).collect(),
        }
    }
}
