use crate::state::AppState;
use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}

/// Health check handler
///
/// Always returns 200; the database field reports whether a pooled
/// connection can currently execute a query.
#[instrument(skip(state), fields(service = "health_check"))]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    info!("Health check request received");

    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "healthy".to_string(),
        Err(e) => {
            warn!("Database health check failed: {}", e);
            "unhealthy".to_string()
        }
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    })
}
