use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::models::{Client, ClientPatch, ClientQuery, NewClient};

mod update;

/// The client registry: a thin data-access layer over one `clients` table.
///
/// Every operation issues a single parameterized statement on a pooled
/// connection and commits immediately; the checkout is returned to the pool
/// on every exit path. Concurrent callers rely on Postgres row locking and
/// MVCC, nothing is coordinated in-process.
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new Database instance with a connection pool
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(config.database_url())
            .await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `clients` table if it does not exist yet. Safe to call on
    /// every startup.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS clients (
                id SERIAL PRIMARY KEY,
                first_name VARCHAR(255),
                last_name VARCHAR(255),
                email VARCHAR(255),
                phones VARCHAR(255)[]
            )
            "#,
        )
        .execute(self.get_pool())
        .await?;

        debug!("clients schema ensured");
        Ok(())
    }

    /// Insert a client and return its generated id. Omitted fields are
    /// stored as NULL; nothing is validated or deduplicated.
    pub async fn add_client(&self, client: &NewClient) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO clients (first_name, last_name, email, phones)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.email)
        .bind(&client.phones)
        .fetch_one(self.get_pool())
        .await?;

        debug!(id, "client added");
        Ok(id)
    }

    /// Append a phone number to a client's list. Appending to a NULL list
    /// starts a fresh one; duplicates are kept. A nonexistent id affects
    /// zero rows and is not an error.
    pub async fn add_phone(&self, id: i32, phone: &str) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE clients
            SET phones = array_append(phones, $1)
            WHERE id = $2
            "#,
        )
        .bind(phone)
        .bind(id)
        .execute(self.get_pool())
        .await?;

        debug!(id, rows = result.rows_affected(), "phone appended");
        Ok(())
    }

    /// Overwrite the provided fields of a client, leaving the rest
    /// untouched. An empty patch issues no statement; a nonexistent id
    /// affects zero rows. See [`ClientPatch`] for what counts as provided.
    pub async fn update_client(&self, id: i32, patch: &ClientPatch) -> Result<()> {
        let Some(mut builder) = update::build_update(id, patch) else {
            debug!(id, "empty patch, no update issued");
            return Ok(());
        };

        let result = builder.build().execute(self.get_pool()).await?;

        debug!(id, rows = result.rows_affected(), "client updated");
        Ok(())
    }

    /// Remove every occurrence of a phone number from a client's list.
    /// No-op when the number (or the id) is absent.
    pub async fn delete_phone(&self, id: i32, phone: &str) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE clients
            SET phones = array_remove(phones, $1)
            WHERE id = $2
            "#,
        )
        .bind(phone)
        .bind(id)
        .execute(self.get_pool())
        .await?;

        debug!(id, rows = result.rows_affected(), "phone removed");
        Ok(())
    }

    /// Hard-delete a client. Repeating the call is a no-op, not an error;
    /// SERIAL ids are never reused.
    pub async fn delete_client(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(self.get_pool())
            .await?;

        debug!(id, rows = result.rows_affected(), "client deleted");
        Ok(())
    }

    /// Find clients matching ANY of the provided criteria exactly, or whose
    /// phone list contains the provided phone. Omitted criteria bind NULL
    /// and never match, so a query with no criteria returns no rows rather
    /// than the whole table.
    pub async fn find_client(&self, query: &ClientQuery) -> Result<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, first_name, last_name, email, phones
            FROM clients
            WHERE first_name = $1
               OR last_name = $2
               OR email = $3
               OR $4 = ANY(phones)
            ORDER BY id ASC
            "#,
        )
        .bind(&query.first_name)
        .bind(&query.last_name)
        .bind(&query.email)
        .bind(&query.phone)
        .fetch_all(self.get_pool())
        .await?;

        debug!(matches = clients.len(), "clients searched");
        Ok(clients)
    }
}

/// Initialize the database connection pool
pub async fn init(config: &Config) -> Result<Database> {
    let db = Database::new(config).await?;

    Ok(db)
}
