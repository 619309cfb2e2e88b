//! PostgreSQL implementation of client repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Client, NewClient};
use crate::domain::repositories::ClientRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

const EMAIL_CONSTRAINT: &str = "client_email_key";

#[derive(sqlx::FromRow)]
struct ClientRow {
    id_client: i32,
    first_name: String,
    last_name: String,
    email: String,
    telephone: Option<String>,
    pesel: Option<String>,
}

impl From<ClientRow> for Client {
    fn from(r: ClientRow) -> Self {
        Client {
            id: r.id_client,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            telephone: r.telephone,
            pesel: r.pesel,
        }
    }
}

/// PostgreSQL repository for client records.
///
/// Email uniqueness is backed by the `client_email_key` constraint.
pub struct PgClientRepository {
    pool: Arc<PgPool>,
}

impl PgClientRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn exists(&self, client_id: i32) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM Client WHERE IdClient = $1)",
        )
        .bind(client_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn find_by_id(&self, client_id: i32) -> Result<Option<Client>, AppError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT IdClient AS id_client, FirstName AS first_name, LastName AS last_name,
                   Email AS email, Telephone AS telephone, Pesel AS pesel
            FROM Client
            WHERE IdClient = $1
            "#,
        )
        .bind(client_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Client::from))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM Client WHERE Email = $1)",
        )
        .bind(email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn create(&self, new_client: NewClient) -> Result<i32, AppError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO Client (FirstName, LastName, Email, Telephone, Pesel)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING IdClient
            "#,
        )
        .bind(&new_client.first_name)
        .bind(&new_client.last_name)
        .bind(&new_client.email)
        .bind(&new_client.telephone)
        .bind(&new_client.pesel)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, EMAIL_CONSTRAINT) {
                AppError::conflict(
                    "Email is already in use",
                    json!({ "email": new_client.email }),
                )
            } else {
                e.into()
            }
        })?;

        Ok(id)
    }
}
