//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. The API-facing projection lives in `auth::models`.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A stored user record. `password_hash` is a bcrypt hash, never plaintext.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub profile_pic: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to insert a new user. The email must already be normalized.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
}
