//! Core business logic for the authentication system.
//!
//! This service handles signup, login and logout: input validation, password
//! hashing and verification, credential store access and session token
//! issuance. All collaborators are injected at construction.

use crate::auth::cookie::SessionCookie;
use crate::auth::models::*;
use crate::auth::validation::{validate_login, validate_registration};
use crate::config::Config;
use crate::database::models::CreateUser;
use crate::errors::{ServiceError, ServiceResult, StoreError};
use crate::repositories::CredentialStore;
use crate::utils::jwt::{Claims, JwtUtils};
use crate::utils::password::PasswordHasher;
use std::sync::Arc;
use tracing::info;

/// Authentication service for handling signup, login and logout
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    jwt_utils: JwtUtils,
    hasher: PasswordHasher,
    secure_cookies: bool,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(
        store: Arc<dyn CredentialStore>,
        jwt_utils: JwtUtils,
        hasher: PasswordHasher,
        secure_cookies: bool,
    ) -> Self {
        AuthService {
            store,
            jwt_utils,
            hasher,
            secure_cookies,
        }
    }

    /// Build the service from application configuration.
    pub fn from_config(store: Arc<dyn CredentialStore>, config: &Config) -> Self {
        Self::new(
            store,
            JwtUtils::new(&config.jwt_secret, config.jwt_expires_in_seconds),
            PasswordHasher::new(config.bcrypt_cost),
            !config.environment.is_development(),
        )
    }

    /// Register a new user and open a session for them.
    ///
    /// # Errors
    /// - `Validation` for missing fields, short passwords or malformed emails,
    ///   before the store is touched
    /// - `AlreadyExists` if the normalized email is taken
    /// - `Store` / `InternalError` for infrastructure failures
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthSession> {
        let registration = validate_registration(request)?;

        if self
            .store
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(ServiceError::already_exists("User", registration.email));
        }

        let password_hash = self.hasher.hash_password(&registration.password).await?;

        // The read above is only a fast path; the store's unique constraint decides races.
        let user = match self
            .store
            .insert(CreateUser {
                full_name: registration.full_name,
                email: registration.email,
                password_hash,
            })
            .await
        {
            Ok(user) => user,
            Err(StoreError::DuplicateEmail { email }) => {
                return Err(ServiceError::already_exists("User", email));
            }
            Err(err) => return Err(err.into()),
        };

        let cookie = self.issue(&user.id)?;
        info!(user_id = %user.id, "User registered");

        Ok(AuthSession {
            user: UserProjection::from(&user),
            cookie,
        })
    }

    /// Authenticate a returning user and open a session for them.
    ///
    /// An unknown email and a wrong password both yield
    /// `ServiceError::InvalidCredentials`.
    pub async fn authenticate(&self, request: LoginRequest) -> ServiceResult<AuthSession> {
        let credentials = validate_login(request)?;

        let Some(user) = self.store.find_by_email(&credentials.email).await? else {
            return Err(ServiceError::InvalidCredentials);
        };

        if !self
            .hasher
            .verify_password(&credentials.password, &user.password_hash)
            .await?
        {
            return Err(ServiceError::InvalidCredentials);
        }

        let cookie = self.issue(&user.id)?;
        info!(user_id = %user.id, "User logged in");

        Ok(AuthSession {
            user: UserProjection::from(&user),
            cookie,
        })
    }

    /// End the caller's session by expiring the cookie.
    ///
    /// Tokens are stateless, so a copy of the token kept elsewhere stays
    /// valid until its own expiry.
    pub fn revoke(&self) -> SessionCookie {
        SessionCookie::cleared(self.secure_cookies)
    }

    /// Sign a token for `user_id` and wrap it in a session cookie.
    pub fn issue(&self, user_id: &str) -> ServiceResult<SessionCookie> {
        let token = self.jwt_utils.generate_token(user_id)?;
        Ok(SessionCookie::issued(
            token,
            self.jwt_utils.expires_in_seconds(),
            self.secure_cookies,
        ))
    }

    /// Verify a session token, returning its claims.
    pub fn verify(&self, token: &str) -> ServiceResult<Claims> {
        self.jwt_utils.validate_token(token)
    }

    /// Load the projection for an authenticated subject.
    ///
    /// A subject that no longer exists is treated as an invalid token.
    pub async fn current_user(&self, user_id: &str) -> ServiceResult<UserProjection> {
        self.store
            .find_by_id(user_id)
            .await?
            .map(|user| UserProjection::from(&user))
            .ok_or(ServiceError::InvalidToken)
    }
}
