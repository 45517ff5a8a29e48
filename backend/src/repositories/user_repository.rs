//! Database repository for user credential records.
//!
//! Provides the SQLite implementation of [`CredentialStore`].

use crate::database::models::{CreateUser, User};
use crate::errors::StoreError;
use crate::repositories::CredentialStore;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Repository for user database operations.
#[derive(Clone)]
pub struct UserRepository {
    /// Shared SQLite connection pool
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// * `pool` - SQLite connection pool (cheap to clone)
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Classifies a sqlx failure so unavailability can be told apart in logs.
fn store_error(err: sqlx::Error) -> StoreError {
    if matches!(
        err,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
    ) {
        StoreError::Unavailable { source: err.into() }
    } else {
        StoreError::Backend { source: err.into() }
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    /// Retrieves a user by their email.
    ///
    /// # Arguments
    /// * `email` - Normalized email to search for
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, email, password_hash, profile_pic, created_at, updated_at
            FROM users WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)
    }

    /// Retrieves a user by their unique identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, email, password_hash, profile_pic, created_at, updated_at
            FROM users WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)
    }

    /// Creates a new user in the database.
    ///
    /// # Arguments
    /// * `user` - CreateUser DTO containing user details
    ///
    /// # Returns
    /// The newly created User with all fields populated
    ///
    /// # Errors
    /// `StoreError::DuplicateEmail` when the unique email constraint rejects the row.
    async fn insert(&self, user: CreateUser) -> Result<User, StoreError> {
        let now = Utc::now();
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, full_name, email, password_hash, profile_pic, created_at, updated_at)
            VALUES (?, ?, ?, ?, NULL, ?, ?)
            RETURNING id, full_name, email, password_hash, profile_pic, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7().to_string())
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(created) => Ok(created),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::DuplicateEmail { email: user.email })
            }
            Err(err) => Err(store_error(err)),
        }
    }
}
