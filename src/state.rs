use crate::datalayer::{BirdStore, DbConfig};
use crate::errors::errors::ServiceError;
use sqlx::SqlitePool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Process-lifetime connection pool; handlers check out one connection
    /// per query and it returns to the pool when dropped.
    pub pool: SqlitePool,
}

impl AppState {
    /// Create new application state: connect the pool and ensure the schema
    pub async fn new(config: &DbConfig) -> Result<Self, ServiceError> {
        let pool = config.connect().await?;
        BirdStore::init_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// Wrap an already-connected pool (used by tests)
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
