#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;
use sqlx::PgPool;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use travel_agency::api::handlers::health_handler;
use travel_agency::api::routes::api_routes;
use travel_agency::application::services::{ClientService, TripService};
use travel_agency::domain::entities::{
    Client, ClientTrip, Country, DateCode, NewClient, NewRegistration, Trip, TripCapacity,
};
use travel_agency::domain::repositories::{
    ClientRepository, RegistrationRepository, TripRepository,
};
use travel_agency::error::AppError;
use travel_agency::state::AppState;

// ─── In-memory store ─────────────────────────────────────────────────────────

struct StoredRegistration {
    client_id: i32,
    trip_id: i32,
    registered_at: DateCode,
    payment_date: Option<DateCode>,
}

#[derive(Default)]
struct Tables {
    trips: Vec<Trip>,
    clients: Vec<Client>,
    registrations: Vec<StoredRegistration>,
}

/// Backs all three repository traits with plain vectors, so handler tests
/// run without PostgreSQL.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Adds a trip starting on `start` and returns its id.
    pub fn add_trip(&self, name: &str, start: NaiveDate, max_people: i32, countries: &[&str]) -> i32 {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.trips.len() as i32 + 1;
        let countries = countries
            .iter()
            .enumerate()
            .map(|(i, name)| Country {
                id: i as i32 + 1,
                name: name.to_string(),
            })
            .collect();
        tables.trips.push(Trip::new(
            id,
            name.to_string(),
            Some(format!("{name} description")),
            midnight(start),
            midnight(start + chrono::Days::new(7)),
            max_people,
            countries,
        ));
        id
    }

    pub fn add_client(&self, first_name: &str, last_name: &str, email: &str) -> i32 {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.clients.len() as i32 + 1;
        tables.clients.push(Client {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            telephone: None,
            pesel: None,
        });
        id
    }

    pub fn add_registration(&self, client_id: i32, trip_id: i32, registered_at: i32) {
        self.tables.lock().unwrap().registrations.push(StoredRegistration {
            client_id,
            trip_id,
            registered_at: DateCode::from_raw(registered_at),
            payment_date: None,
        });
    }

    pub fn client_count(&self) -> usize {
        self.tables.lock().unwrap().clients.len()
    }

    pub fn registration_count(&self, trip_id: i32) -> usize {
        self.tables
            .lock()
            .unwrap()
            .registrations
            .iter()
            .filter(|r| r.trip_id == trip_id)
            .count()
    }

    pub fn find_client(&self, client_id: i32) -> Option<Client> {
        self.tables
            .lock()
            .unwrap()
            .clients
            .iter()
            .find(|c| c.id == client_id)
            .cloned()
    }

    /// Makes every subsequent trip count fail like a lost connection.
    pub fn set_unavailable(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap()
}

fn capacity_of(tables: &Tables, trip_id: i32) -> Option<TripCapacity> {
    let trip = tables.trips.iter().find(|t| t.id == trip_id)?;
    let participants = tables
        .registrations
        .iter()
        .filter(|r| r.trip_id == trip_id)
        .count() as i64;
    Some(TripCapacity {
        max_people: trip.max_people,
        participants,
    })
}

#[async_trait]
impl TripRepository for InMemoryStore {
    async fn list_with_countries(&self) -> Result<Vec<Trip>, AppError> {
        let mut trips = self.tables.lock().unwrap().trips.clone();
        trips.sort_by_key(|t| (t.date_from, t.id));
        Ok(trips)
    }

    async fn exists(&self, trip_id: i32) -> Result<bool, AppError> {
        Ok(self.tables.lock().unwrap().trips.iter().any(|t| t.id == trip_id))
    }

    async fn find_capacity(&self, trip_id: i32) -> Result<Option<TripCapacity>, AppError> {
        Ok(capacity_of(&self.tables.lock().unwrap(), trip_id))
    }

    async fn count(&self) -> Result<i64, AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(self.tables.lock().unwrap().trips.len() as i64)
    }
}

#[async_trait]
impl ClientRepository for InMemoryStore {
    async fn exists(&self, client_id: i32) -> Result<bool, AppError> {
        Ok(self.find_client(client_id).is_some())
    }

    async fn find_by_id(&self, client_id: i32) -> Result<Option<Client>, AppError> {
        Ok(self.find_client(client_id))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .clients
            .iter()
            .any(|c| c.email == email))
    }

    async fn create(&self, new_client: NewClient) -> Result<i32, AppError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.clients.iter().any(|c| c.email == new_client.email) {
            return Err(AppError::conflict("Email is already in use", json!({})));
        }
        let id = tables.clients.len() as i32 + 1;
        tables.clients.push(Client {
            id,
            first_name: new_client.first_name,
            last_name: new_client.last_name,
            email: new_client.email,
            telephone: new_client.telephone,
            pesel: new_client.pesel,
        });
        Ok(id)
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryStore {
    async fn list_for_client(&self, client_id: i32) -> Result<Vec<ClientTrip>, AppError> {
        let tables = self.tables.lock().unwrap();
        let mut result: Vec<ClientTrip> = tables
            .registrations
            .iter()
            .filter(|r| r.client_id == client_id)
            .filter_map(|r| {
                let trip = tables.trips.iter().find(|t| t.id == r.trip_id)?;
                Some(ClientTrip {
                    client_id,
                    trip_id: r.trip_id,
                    registered_at: r.registered_at,
                    payment_date: r.payment_date,
                    trip: trip.clone(),
                })
            })
            .collect();
        result.sort_by_key(|ct| (ct.trip.date_from, ct.trip_id));
        Ok(result)
    }

    async fn exists(&self, client_id: i32, trip_id: i32) -> Result<bool, AppError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .registrations
            .iter()
            .any(|r| r.client_id == client_id && r.trip_id == trip_id))
    }

    async fn create(&self, registration: NewRegistration) -> Result<bool, AppError> {
        let mut tables = self.tables.lock().unwrap();

        let Some(capacity) = capacity_of(&tables, registration.trip_id) else {
            return Err(AppError::not_found("Trip not found", json!({})));
        };
        if capacity.is_full() {
            return Err(AppError::conflict(
                "Maximum number of participants has been reached for this trip",
                json!({}),
            ));
        }
        if tables
            .registrations
            .iter()
            .any(|r| r.client_id == registration.client_id && r.trip_id == registration.trip_id)
        {
            return Err(AppError::conflict(
                "Client is already registered for this trip",
                json!({}),
            ));
        }

        tables.registrations.push(StoredRegistration {
            client_id: registration.client_id,
            trip_id: registration.trip_id,
            registered_at: registration.registered_at,
            payment_date: None,
        });
        Ok(true)
    }

    async fn delete(&self, client_id: i32, trip_id: i32) -> Result<bool, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.registrations.len();
        tables
            .registrations
            .retain(|r| !(r.client_id == client_id && r.trip_id == trip_id));
        Ok(tables.registrations.len() < before)
    }
}

// ─── State and server ────────────────────────────────────────────────────────

pub fn create_test_state(store: Arc<InMemoryStore>) -> AppState {
    let trip_service = Arc::new(TripService::new(store.clone()));
    let client_service = Arc::new(ClientService::new(
        store.clone(),
        store,
        trip_service.clone(),
    ));

    AppState::new(trip_service, client_service)
}

pub fn make_server(store: Arc<InMemoryStore>) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(create_test_state(store));
    TestServer::new(app).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ─── PostgreSQL fixtures ─────────────────────────────────────────────────────

pub async fn create_test_country(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO Country (Name) VALUES ($1) RETURNING IdCountry")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_trip(pool: &PgPool, name: &str, start: NaiveDate, max_people: i32) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO Trip (Name, Description, DateFrom, DateTo, MaxPeople)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING IdTrip
        "#,
    )
    .bind(name)
    .bind(format!("{name} description"))
    .bind(midnight(start))
    .bind(midnight(start + chrono::Days::new(7)))
    .bind(max_people)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn link_country(pool: &PgPool, country_id: i32, trip_id: i32) {
    sqlx::query("INSERT INTO Country_Trip (IdCountry, IdTrip) VALUES ($1, $2)")
        .bind(country_id)
        .bind(trip_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_client(pool: &PgPool, email: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO Client (FirstName, LastName, Email) VALUES ('Jan', 'Kowalski', $1) RETURNING IdClient",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_registration(pool: &PgPool, client_id: i32, trip_id: i32) {
    sqlx::query(
        "INSERT INTO Client_Trip (IdClient, IdTrip, RegisteredAt) VALUES ($1, $2, 20240115)",
    )
    .bind(client_id)
    .bind(trip_id)
    .execute(pool)
    .await
    .unwrap();
}
