use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;
use tracing::info;

/// Errors from the data store adapter
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid database URL")]
    InvalidDatabaseUrl(#[source] sqlx::Error),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Thin wrapper around the single PostgreSQL pool.
///
/// The pool is lazy: no connection is opened until the first query, so the
/// process starts even while the database is still coming up. A request
/// arriving before the database does fails with a store error, which the
/// handlers surface as a 500.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy(database_url)
            .map_err(StoreError::InvalidDatabaseUrl)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the pool (e.g., on shutdown)
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }
}
