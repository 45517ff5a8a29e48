//! Middleware for protecting authenticated routes.
//!
//! Validates the session token carried by the `jwt` cookie (or a `Bearer`
//! header) and exposes its claims to downstream handlers.

use crate::auth::cookie::extract_session_token;
use crate::auth::service::AuthService;
use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use std::sync::Arc;

/// Session authentication middleware
///
/// Expiry is only noticed here, lazily, when a request presents the token.
pub async fn session_auth(mut request: Request, next: Next) -> Result<Response, StatusCode> {
    let auth_service = request
        .extensions()
        .get::<Arc<AuthService>>()
        .cloned()
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

    let token = extract_session_token(request.headers()).ok_or(StatusCode::UNAUTHORIZED)?;

    match auth_service.verify(&token) {
        Ok(claims) => {
            // Add claims to request extensions for use in handlers
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(_) => Err(StatusCode::UNAUTHORIZED),
    }
}
