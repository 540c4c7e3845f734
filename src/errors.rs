// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Comprehensive error enum for all possible failures
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Business not found with id: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    StoreError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("External places provider error: {0}")]
    UpstreamError(String),
}

/// Convert DirectoryError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for DirectoryError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code) = match self {
            DirectoryError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            DirectoryError::StoreError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR"),
            DirectoryError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            DirectoryError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            DirectoryError::UpstreamError(_) => {
                // Upstream failures are reported once with the provider message
                // attached; no automatic retry happens anywhere upstream of this.
                (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_ERROR")
            }
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(status).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
            DirectoryError::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DirectoryError::ValidationError(_) => StatusCode::BAD_REQUEST,
            DirectoryError::Unauthorized => StatusCode::UNAUTHORIZED,
            DirectoryError::UpstreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
