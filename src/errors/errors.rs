use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for the bird service
#[derive(Debug)]
pub enum ServiceError {
    // Entity Errors
    BirdNotFound(i64),

    // Database Errors
    DatabaseError(String),
    DatabaseConnectionError,

    // Internal Errors
    ConfigurationError(String),
}

/// Error response structure sent to clients
///
/// Not-found and fault responses share a single `{"detail": ...}` body shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The id is carried for logging; the client-facing detail string
            // is the fixed "Bird not found" message.
            ServiceError::BirdNotFound(_) => write!(f, "Bird not found"),

            ServiceError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ServiceError::DatabaseConnectionError => write!(f, "Failed to connect to database"),

            ServiceError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 404 Not Found
            ServiceError::BirdNotFound(_) => StatusCode::NOT_FOUND,

            // 503 Service Unavailable
            ServiceError::DatabaseConnectionError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            ServiceError::DatabaseError(_) | ServiceError::ConfigurationError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Implement IntoResponse for Axum integration
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else if let ServiceError::BirdNotFound(id) = &self {
            tracing::info!(bird_id = %id, "Bird not found");
        }

        let error_response = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Conversion from sqlx errors
impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => ServiceError::DatabaseConnectionError,
            _ => ServiceError::DatabaseError(err.to_string()),
        }
    }
}

/// Type alias for Results using ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;
