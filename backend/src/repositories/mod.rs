//! Persistence layer for user credentials.
//!
//! The auth service only sees the [`CredentialStore`] trait; `UserRepository`
//! is the SQLite-backed implementation wired up at startup.

pub mod user_repository;

use crate::database::models::{CreateUser, User};
use crate::errors::StoreError;
use async_trait::async_trait;

/// Abstract keyed store of user records.
///
/// Implementations must enforce email uniqueness on `insert` and report a
/// violation as [`StoreError::DuplicateEmail`]. Callers rely on this as the
/// authoritative guard against concurrent registrations.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Looks up a user by normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Looks up a user by identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Inserts a new user and returns the stored record with its generated id.
    async fn insert(&self, user: CreateUser) -> Result<User, StoreError>;
}
