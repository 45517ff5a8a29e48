//! Password hashing with bcrypt.
//!
//! Hashing and verification are CPU bound, so both run on the blocking
//! thread pool instead of stalling the async runtime.

use crate::errors::{ServiceError, ServiceResult};
use bcrypt::{hash, verify};

/// Salted one-way password hasher with a fixed work factor.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Creates a hasher using `cost` bcrypt rounds (log2).
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Function to hash a password before storing in database
    ///
    /// # Errors
    /// Returns `ServiceError::InternalError` if hashing fails
    pub async fn hash_password(&self, password: &str) -> ServiceResult<String> {
        let cost = self.cost;
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hash(password, cost))
            .await
            .map_err(|e| ServiceError::internal_error(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
    }

    /// Function to verify a password against the stored hash
    ///
    /// # Returns
    /// `true` if password matches hash, `false` otherwise
    ///
    /// # Errors
    /// Returns `ServiceError::InternalError` if the stored hash is unreadable
    pub async fn verify_password(&self, password: &str, password_hash: &str) -> ServiceResult<bool> {
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();
        tokio::task::spawn_blocking(move || verify(password, &password_hash))
            .await
            .map_err(|e| {
                ServiceError::internal_error(format!("Password verification task failed: {}", e))
            })?
            .map_err(|e| ServiceError::internal_error(format!("Password verification failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(4);
        let hashed = hasher.hash_password("secret123").await.unwrap();

        assert_ne!(hashed, "secret123");
        assert!(hashed.starts_with("$2"));
        assert!(hasher.verify_password("secret123", &hashed).await.unwrap());
        assert!(!hasher.verify_password("secret124", &hashed).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new(4);
        let first = hasher.hash_password("secret123").await.unwrap();
        let second = hasher.hash_password("secret123").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_corrupt_hash_is_internal_error() {
        let hasher = PasswordHasher::new(4);
        let err = hasher
            .verify_password("secret123", "not-a-bcrypt-hash")
            .await
            .unwrap_err();
        assert!(err.is_internal());
    }
}
