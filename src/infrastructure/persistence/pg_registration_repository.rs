//! PostgreSQL implementation of registration repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ClientTrip, DateCode, NewRegistration, TripCapacity};
use crate::domain::repositories::RegistrationRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::pg_trip_repository::{TripRow, load_countries};
use crate::utils::db_error::is_unique_violation_on;

const REGISTRATION_KEY: &str = "client_trip_pkey";

#[derive(sqlx::FromRow)]
struct ClientTripRow {
    registered_at: DateCode,
    payment_date: Option<DateCode>,
    #[sqlx(flatten)]
    trip: TripRow,
}

/// PostgreSQL repository for `Client_Trip` registrations.
///
/// Inserts run in a transaction holding a row lock on the trip, so the
/// capacity check and the insert cannot interleave with a concurrent
/// registration for the same trip.
pub struct PgRegistrationRepository {
    pool: Arc<PgPool>,
}

impl PgRegistrationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for PgRegistrationRepository {
    async fn list_for_client(&self, client_id: i32) -> Result<Vec<ClientTrip>, AppError> {
        let rows = sqlx::query_as::<_, ClientTripRow>(
            r#"
            SELECT ct.RegisteredAt AS registered_at, ct.PaymentDate AS payment_date,
                   t.IdTrip AS id_trip, t.Name AS name, t.Description AS description,
                   t.DateFrom AS date_from, t.DateTo AS date_to, t.MaxPeople AS max_people
            FROM Client_Trip ct
            JOIN Trip t ON ct.IdTrip = t.IdTrip
            WHERE ct.IdClient = $1
            ORDER BY t.DateFrom, t.IdTrip
            "#,
        )
        .bind(client_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let trip_ids: Vec<i32> = rows.iter().map(|r| r.trip.id_trip).collect();
        let mut countries = load_countries(self.pool.as_ref(), &trip_ids).await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let trip_id = r.trip.id_trip;
                let trip_countries = countries.remove(&trip_id).unwrap_or_default();
                ClientTrip {
                    client_id,
                    trip_id,
                    registered_at: r.registered_at,
                    payment_date: r.payment_date,
                    trip: r.trip.into_trip(trip_countries),
                }
            })
            .collect())
    }

    async fn exists(&self, client_id: i32, trip_id: i32) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM Client_Trip WHERE IdClient = $1 AND IdTrip = $2)",
        )
        .bind(client_id)
        .bind(trip_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn create(&self, registration: NewRegistration) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let max_people = sqlx::query_scalar::<_, i32>(
            "SELECT MaxPeople FROM Trip WHERE IdTrip = $1 FOR UPDATE",
        )
        .bind(registration.trip_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(max_people) = max_people else {
            tx.rollback().await?;
            return Err(AppError::not_found(
                format!("Trip with ID {} not found", registration.trip_id),
                json!({ "trip_id": registration.trip_id }),
            ));
        };

        let participants = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM Client_Trip WHERE IdTrip = $1",
        )
        .bind(registration.trip_id)
        .fetch_one(&mut *tx)
        .await?;

        let capacity = TripCapacity {
            max_people,
            participants,
        };
        if capacity.is_full() {
            tx.rollback().await?;
            return Err(AppError::conflict(
                "Maximum number of participants has been reached for this trip",
                json!({ "trip_id": registration.trip_id, "max_people": max_people }),
            ));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO Client_Trip (IdClient, IdTrip, RegisteredAt, PaymentDate)
            VALUES ($1, $2, $3, NULL)
            "#,
        )
        .bind(registration.client_id)
        .bind(registration.trip_id)
        .bind(registration.registered_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, REGISTRATION_KEY) {
                AppError::conflict(
                    "Client is already registered for this trip",
                    json!({
                        "client_id": registration.client_id,
                        "trip_id": registration.trip_id
                    }),
                )
            } else {
                e.into()
            }
        })?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, client_id: i32, trip_id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM Client_Trip WHERE IdClient = $1 AND IdTrip = $2")
            .bind(client_id)
            .bind(trip_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
