//! JWT token utilities for session authentication.
//!
//! Provides token creation and validation for the session cookie. Tokens are
//! stateless: they carry the user id and an absolute expiry and can only be
//! verified with the secret that issued them.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::errors::{ServiceError, ServiceResult};

/// JWT Claims structure for a session
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

/// JWT token utility for creating and validating tokens
#[derive(Clone)]
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in_seconds: u64,
}

impl JwtUtils {
    /// Create a new JwtUtils instance from the signing secret and token lifetime.
    pub fn new(secret: &str, expires_in_seconds: u64) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            expires_in_seconds,
        }
    }

    /// Lifetime of issued tokens, in seconds.
    pub fn expires_in_seconds(&self) -> u64 {
        self.expires_in_seconds
    }

    /// Generate a new session token for `user_id`
    pub fn generate_token(&self, user_id: &str) -> ServiceResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expires_in_seconds as i64);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal_error(format!("Token generation failed: {}", e)))
    }

    /// Validate and decode a JWT token
    ///
    /// Bad signatures, malformed tokens and expired tokens all map to
    /// `ServiceError::InvalidToken`.
    pub fn validate_token(&self, token: &str) -> ServiceResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                tracing::debug!("Token validation failed: {}", e);
                ServiceError::InvalidToken
            })
    }
}

impl Claims {
    pub fn user_id(&self) -> &str {
        &self.sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_generate_and_validate() {
        let jwt = JwtUtils::new(SECRET, 3600);
        let token = jwt.generate_token("user-1").unwrap();

        let claims = jwt.validate_token(&token).unwrap();
        assert_eq!(claims.user_id(), "user-1");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(claims.exp > Utc::now().timestamp() as usize);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = JwtUtils::new(SECRET, 3600).generate_token("user-1").unwrap();
        let other = JwtUtils::new("another-secret", 3600);

        assert!(matches!(
            other.validate_token(&token),
            Err(ServiceError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let jwt = JwtUtils::new(SECRET, 3600);
        let issued = Utc::now() - Duration::hours(2);
        let claims = Claims {
            sub: "user-1".to_string(),
            exp: (issued + Duration::hours(1)).timestamp() as usize,
            iat: issued.timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(claims.exp < Utc::now().timestamp() as usize);
        assert!(matches!(
            jwt.validate_token(&token),
            Err(ServiceError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let jwt = JwtUtils::new(SECRET, 3600);
        assert!(matches!(
            jwt.validate_token("not.a.token"),
            Err(ServiceError::InvalidToken)
        ));
    }
}
