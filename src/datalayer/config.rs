use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{error, info};

/// Database configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database URL, e.g. "sqlite://birds.db"
    pub database_url: String,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// How long to wait when acquiring a connection from the pool
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://birds.db".to_string()),
            max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            acquire_timeout: Duration::from_secs(
                std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }
}

impl DbConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create the process-lifetime connection pool for this configuration
    ///
    /// Each handler acquires a connection from this pool for the duration of
    /// one query; sqlx returns the connection to the pool when the handle is
    /// dropped, on every exit path.
    pub async fn connect(&self) -> Result<SqlitePool, sqlx::Error> {
        info!(
            database_url = %self.database_url,
            max_connections = %self.max_connections,
            "Creating connection pool"
        );

        let options =
            SqliteConnectOptions::from_str(&self.database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(|e| {
                error!("Failed to create connection pool: {}", e);
                e
            })?;

        info!("Connection pool created successfully");

        Ok(pool)
    }
}
