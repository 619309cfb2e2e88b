//! Core domain entities of the travel agency.
//!
//! Entities are plain data structures. Creation inputs use separate `New*`
//! structs, mirroring how rows are inserted.
//!
//! # Entity Types
//!
//! - [`Client`] - A customer who can register for trips
//! - [`Trip`] / [`Country`] - Read-only trip catalogue
//! - [`ClientTrip`] - A registration joined with its trip
//! - [`DateCode`] - `YYYYMMDD` integer dates used by registrations

pub mod client;
pub mod date_code;
pub mod registration;
pub mod trip;

pub use client::{Client, NewClient};
pub use date_code::DateCode;
pub use registration::{ClientTrip, NewRegistration, RegistrationReceipt};
pub use trip::{Country, Trip, TripCapacity};
