//! Global application error types.
//!
//! This module defines the error taxonomy shared by the credential store,
//! the auth service and the HTTP layer, so every failure can be mapped to a
//! consistent response.

use thiserror::Error;

/// Errors raised by a credential store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store already holds a record for this email (unique constraint).
    #[error("a user with email {email} already exists")]
    DuplicateEmail { email: String },

    /// The store could not be reached (pool timeout, closed pool, IO).
    #[error("credential store unavailable: {source}")]
    Unavailable {
        #[source]
        source: anyhow::Error,
    },

    /// Any other backend failure.
    #[error("credential store error: {source}")]
    Backend {
        #[source]
        source: anyhow::Error,
    },
}

/// Error kinds produced by the auth operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{entity} already exists: {identifier}")]
    AlreadyExists { entity: String, identifier: String },

    /// Unknown email and wrong password both end up here.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired session token")]
    InvalidToken,

    #[error("Credential store error: {source}")]
    Store {
        #[from]
        source: StoreError,
    },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn already_exists(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// True for failures whose details must stay server-side.
    #[cfg(test)]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Store { .. } | Self::InternalError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_are_internal() {
        let err: ServiceError = StoreError::Unavailable {
            source: anyhow::anyhow!("pool timed out"),
        }
        .into();
        assert!(err.is_internal());
        assert!(ServiceError::internal_error("hash failed").is_internal());
        assert!(!ServiceError::InvalidCredentials.is_internal());
        assert!(!ServiceError::validation("bad").is_internal());
    }
}
