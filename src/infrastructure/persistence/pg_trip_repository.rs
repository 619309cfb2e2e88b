//! PostgreSQL implementation of trip repository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Country, Trip, TripCapacity};
use crate::domain::repositories::TripRepository;
use crate::error::AppError;

/// Trip columns shared by the trip listing and the client-trip join.
#[derive(sqlx::FromRow)]
pub(crate) struct TripRow {
    pub id_trip: i32,
    pub name: String,
    pub description: Option<String>,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
}

impl TripRow {
    pub(crate) fn into_trip(self, countries: Vec<Country>) -> Trip {
        Trip::new(
            self.id_trip,
            self.name,
            self.description,
            self.date_from,
            self.date_to,
            self.max_people,
            countries,
        )
    }
}

#[derive(sqlx::FromRow)]
struct CountryRow {
    id_trip: i32,
    id_country: i32,
    name: String,
}

/// Loads the countries of every listed trip in a single round trip.
///
/// Trips without countries are absent from the returned map.
pub(crate) async fn load_countries(
    pool: &PgPool,
    trip_ids: &[i32],
) -> Result<HashMap<i32, Vec<Country>>, AppError> {
    if trip_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, CountryRow>(
        r#"
        SELECT ct.IdTrip AS id_trip, c.IdCountry AS id_country, c.Name AS name
        FROM Country c
        JOIN Country_Trip ct ON c.IdCountry = ct.IdCountry
        WHERE ct.IdTrip = ANY($1)
        ORDER BY c.Name
        "#,
    )
    .bind(trip_ids)
    .fetch_all(pool)
    .await?;

    let mut by_trip: HashMap<i32, Vec<Country>> = HashMap::new();
    for row in rows {
        by_trip.entry(row.id_trip).or_default().push(Country {
            id: row.id_country,
            name: row.name,
        });
    }

    Ok(by_trip)
}

/// PostgreSQL repository for the trip catalogue.
pub struct PgTripRepository {
    pool: Arc<PgPool>,
}

impl PgTripRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TripRepository for PgTripRepository {
    async fn list_with_countries(&self) -> Result<Vec<Trip>, AppError> {
        let rows = sqlx::query_as::<_, TripRow>(
            r#"
            SELECT t.IdTrip AS id_trip, t.Name AS name, t.Description AS description,
                   t.DateFrom AS date_from, t.DateTo AS date_to, t.MaxPeople AS max_people
            FROM Trip t
            ORDER BY t.DateFrom, t.IdTrip
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let trip_ids: Vec<i32> = rows.iter().map(|r| r.id_trip).collect();
        let mut countries = load_countries(self.pool.as_ref(), &trip_ids).await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let trip_countries = countries.remove(&r.id_trip).unwrap_or_default();
                r.into_trip(trip_countries)
            })
            .collect())
    }

    async fn exists(&self, trip_id: i32) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM Trip WHERE IdTrip = $1)",
        )
        .bind(trip_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn find_capacity(&self, trip_id: i32) -> Result<Option<TripCapacity>, AppError> {
        // No row comes back for an unknown trip.
        let row = sqlx::query_as::<_, (i32, i64)>(
            r#"
            SELECT t.MaxPeople, COUNT(ct.IdClient)
            FROM Trip t
            LEFT JOIN Client_Trip ct ON t.IdTrip = ct.IdTrip
            WHERE t.IdTrip = $1
            GROUP BY t.MaxPeople
            "#,
        )
        .bind(trip_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|(max_people, participants)| TripCapacity {
            max_people,
            participants,
        }))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Trip")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
