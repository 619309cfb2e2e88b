//! Trip and country entities.

use chrono::NaiveDateTime;

/// A destination country. Trips reference countries many-to-many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: i32,
    pub name: String,
}

/// A bookable trip with its visited countries.
///
/// Trips are read-only here; they are provisioned directly in the database.
#[derive(Debug, Clone)]
pub struct Trip {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
    pub countries: Vec<Country>,
}

impl Trip {
    /// Creates a new Trip instance.
    pub fn new(
        id: i32,
        name: String,
        description: Option<String>,
        date_from: NaiveDateTime,
        date_to: NaiveDateTime,
        max_people: i32,
        countries: Vec<Country>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            date_from,
            date_to,
            max_people,
            countries,
        }
    }
}

/// Participant limit of a trip alongside its current registration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripCapacity {
    pub max_people: i32,
    pub participants: i64,
}

impl TripCapacity {
    /// A trip is full once registrations reach the limit.
    ///
    /// A limit of zero makes the trip full from the start.
    pub fn is_full(&self) -> bool {
        self.participants >= i64::from(self.max_people)
    }

    /// Places left before the trip is full, never negative.
    pub fn remaining(&self) -> i64 {
        (i64::from(self.max_people) - self.participants).max(0)
    }
}
