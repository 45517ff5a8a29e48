//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for signup, login, logout
//! and session checks, delegate to `auth::service` for the business logic,
//! and apply the session cookie to the response.

use crate::api::common::{ApiError, service_error_to_http};
use crate::auth::cookie::SessionCookie;
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::errors::ServiceError;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, rejection::JsonRejection},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::SET_COOKIE},
    response::Json as ResponseJson,
};
use std::sync::Arc;
use tracing::{error, warn};

type SessionResponse = (
    StatusCode,
    [(HeaderName, HeaderValue); 1],
    ResponseJson<UserProjection>,
);

/// Turns a successful auth outcome into a response carrying the cookie.
fn session_response(status: StatusCode, session: AuthSession) -> Result<SessionResponse, ApiError> {
    let cookie = session.cookie.to_header_value().map_err(|e| {
        service_error_to_http(ServiceError::internal_error(format!(
            "Invalid session cookie: {}",
            e
        )))
    })?;
    Ok((status, [(SET_COOKIE, cookie)], ResponseJson(session.user)))
}

/// Malformed bodies are the caller's fault and reported like any other bad input.
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            T::default()
        }
    }
}

/// Handle user signup request
#[axum::debug_handler]
pub async fn signup(
    Extension(auth_service): Extension<Arc<AuthService>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<SessionResponse, ApiError> {
    let request = body_or_default(payload);

    match auth_service.register(request).await {
        Ok(session) => session_response(StatusCode::CREATED, session),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(auth_service): Extension<Arc<AuthService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<SessionResponse, ApiError> {
    let request = body_or_default(payload);

    match auth_service.authenticate(request).await {
        Ok(session) => session_response(StatusCode::OK, session),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle logout request
///
/// Always answers 200: a failure to build the clearing cookie is logged,
/// never surfaced to the user.
#[axum::debug_handler]
pub async fn logout(
    Extension(auth_service): Extension<Arc<AuthService>>,
) -> (StatusCode, HeaderMap, ResponseJson<LogoutResponse>) {
    let cookie: SessionCookie = auth_service.revoke();

    let mut headers = HeaderMap::new();
    match cookie.to_header_value() {
        Ok(value) => {
            headers.insert(SET_COOKIE, value);
        }
        Err(e) => error!("Failed to build logout cookie: {}", e),
    }

    (
        StatusCode::OK,
        headers,
        ResponseJson(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}

/// Get current user information from the session token
#[axum::debug_handler]
pub async fn check_session(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Extension(claims): Extension<Claims>,
) -> Result<ResponseJson<UserProjection>, ApiError> {
    match auth_service.current_user(claims.user_id()).await {
        Ok(user) => Ok(ResponseJson(user)),
        Err(error) => Err(service_error_to_http(error)),
    }
}
