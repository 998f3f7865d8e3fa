use axum::http::StatusCode;
use birds_api::errors::errors::{ErrorResponse, ServiceError};

#[test]
fn test_not_found_display_is_client_facing_message() {
    let error = ServiceError::BirdNotFound(7);
    assert_eq!(error.to_string(), "Bird not found");
}

#[test]
fn test_database_error_display_includes_cause() {
    let error = ServiceError::DatabaseError("disk I/O error".to_string());
    assert_eq!(error.to_string(), "Database error: disk I/O error");
}

#[test]
fn test_status_code_mapping() {
    assert_eq!(
        ServiceError::BirdNotFound(1).status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        ServiceError::DatabaseError("boom".to_string()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        ServiceError::DatabaseConnectionError.status_code(),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        ServiceError::ConfigurationError("bad url".to_string()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_error_response_wire_shape() {
    let response = ErrorResponse {
        detail: ServiceError::BirdNotFound(3).to_string(),
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json, serde_json::json!({ "detail": "Bird not found" }));
}

#[test]
fn test_pool_timeout_maps_to_connection_error() {
    let error: ServiceError = sqlx::Error::PoolTimedOut.into();
    assert!(matches!(error, ServiceError::DatabaseConnectionError));
}

#[test]
fn test_error_trait_implementation() {
    let error: Box<dyn std::error::Error> = Box::new(ServiceError::BirdNotFound(1));
    assert_eq!(error.to_string(), "Bird not found");
}
