//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle signup, login, logout and session checks. They are
//! designed to be nested into the main Axum router, which must provide an
//! `Extension<Arc<AuthService>>` layer.

use crate::auth::handlers::*;
use crate::auth::middleware::*;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/check", get(check_session).layer(middleware::from_fn(session_auth)))
}
