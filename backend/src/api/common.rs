//! Error handling utilities for API responses.
//!
//! Provides the structured error response and the conversion between
//! service-layer errors and HTTP responses.
//!
//! # Response Format
//! All errors return consistent JSON responses containing:
//! - `message`: Human-readable message
//! - `error.error_type`: Machine-readable error category
//!
//! # Error Handling Flow
//! 1. Service layer returns domain-specific `ServiceError`
//! 2. `service_error_to_http` converts to appropriate HTTP response
//! 3. Internal failures are logged here and replaced by an opaque message

use crate::errors::{ServiceError, StoreError};
use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Indicates if the request was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    pub message: String,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
    /// Request timestamp
    pub timestamp: String,
}

/// Error details for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Machine-readable error type identifier
    pub error_type: String,
}

/// Error half of every handler's return type.
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>, error_type: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: message.into(),
            error: Some(ErrorDetails {
                error_type: error_type.into(),
            }),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Converts ServiceError to appropriate HTTP response with standard format
///
/// Conflicts and credential failures share the 400 status of validation errors.
pub fn service_error_to_http(error: ServiceError) -> ApiError {
    let (status, error_type, message) = match error {
        ServiceError::Validation { message } => {
            (StatusCode::BAD_REQUEST, "validation_error", message)
        }
        ServiceError::AlreadyExists { .. } => (
            StatusCode::BAD_REQUEST,
            "already_exists",
            "Email already exists".to_string(),
        ),
        ServiceError::InvalidCredentials => (
            StatusCode::BAD_REQUEST,
            "invalid_credentials",
            "Invalid credentials".to_string(),
        ),
        ServiceError::InvalidToken => (
            StatusCode::UNAUTHORIZED,
            "invalid_token",
            "Unauthorized".to_string(),
        ),
        ServiceError::Store { source } => {
            match &source {
                StoreError::Unavailable { .. } => {
                    tracing::error!("Credential store unavailable: {}", source)
                }
                _ => tracing::error!("Credential store error: {}", source),
            }
            internal_error()
        }
        ServiceError::InternalError { message } => {
            tracing::error!("Internal error: {}", message);
            internal_error()
        }
    };

    (status, Json(ApiResponse::<()>::error(message, error_type)))
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "Internal Server Error".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ServiceError::validation("bad"), StatusCode::BAD_REQUEST),
            (
                ServiceError::already_exists("User", "a@b.co"),
                StatusCode::BAD_REQUEST,
            ),
            (ServiceError::InvalidCredentials, StatusCode::BAD_REQUEST),
            (ServiceError::InvalidToken, StatusCode::UNAUTHORIZED),
            (
                ServiceError::internal_error("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let (status, _) = service_error_to_http(error);
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn test_internal_details_are_not_leaked() {
        let error = ServiceError::Store {
            source: StoreError::Backend {
                source: anyhow::anyhow!("disk I/O error at /var/lib/users.db"),
            },
        };
        let (status, Json(body)) = service_error_to_http(error);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal Server Error");
        let serialized = serde_json::to_string(&body).unwrap();
        assert!(!serialized.contains("disk"));
    }

    #[test]
    fn test_conflict_message_does_not_echo_email() {
        let (_, Json(body)) =
            service_error_to_http(ServiceError::already_exists("User", "ada@example.com"));
        assert_eq!(body.message, "Email already exists");
        assert_eq!(body.error.unwrap().error_type, "already_exists");
    }
}
