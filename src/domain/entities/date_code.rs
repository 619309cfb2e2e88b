//! Calendar dates stored as `YYYYMMDD` integers.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar date encoded as an 8-digit integer, e.g. `20240115`.
///
/// `Client_Trip.RegisteredAt` and `Client_Trip.PaymentDate` use this encoding
/// instead of a native date column. The value serializes and persists as the
/// bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct DateCode(i32);

impl DateCode {
    /// Wraps a raw `YYYYMMDD` value as read from storage.
    pub const fn from_raw(value: i32) -> Self {
        Self(value)
    }

    /// Today's date in the local time zone.
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Decodes back to a calendar date.
    ///
    /// Returns `None` when the stored integer is not a valid `YYYYMMDD` date.
    pub fn to_date(self) -> Option<NaiveDate> {
        let year = self.0 / 10_000;
        let month = (self.0 / 100) % 100;
        let day = self.0 % 100;
        NaiveDate::from_ymd_opt(year, month as u32, day as u32)
    }
}

impl From<NaiveDate> for DateCode {
    fn from(date: NaiveDate) -> Self {
        Self(date.year() * 10_000 + date.month() as i32 * 100 + date.day() as i32)
    }
}

impl fmt::Display for DateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08}", self.0)
    }
}
