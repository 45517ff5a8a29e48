//! Data structures for authentication-related entities.
//!
//! This module defines the request payloads for signup and login, the
//! caller-visible user projection, and the result of a successful
//! authentication (projection plus the session cookie to set).

use crate::auth::cookie::SessionCookie;
use crate::database::models::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signup request payload.
///
/// Fields are optional so a missing field surfaces as a validation error
/// instead of a body rejection.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default, rename = "fullName", alias = "full_name")]
    #[validate(required, length(min = 1, message = "Full name is required"))]
    pub full_name: Option<String>,

    #[serde(default)]
    #[validate(required, length(min = 1, message = "Email is required"))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(required, length(min = 1, message = "Password is required"))]
    pub password: Option<String>,
}

/// Login request payload
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(required, length(min = 1, message = "Email is required"))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(required, length(min = 1, message = "Password is required"))]
    pub password: Option<String>,
}

/// The subset of a user record that is safe to return to callers.
///
/// There is deliberately no password field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProjection {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "profilePic")]
    pub profile_pic: Option<String>,
}

impl From<&User> for UserProjection {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            profile_pic: user.profile_pic.clone(),
        }
    }
}

/// Outcome of a successful register or authenticate call.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: UserProjection,
    pub cookie: SessionCookie,
}

/// Response after logging out
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}
