//! Input validation for the auth operations.
//!
//! Signup checks run in a fixed order (presence, password length, email
//! shape) and stop at the first failure, before any store access.

use crate::auth::models::{LoginRequest, RegisterRequest};
use crate::errors::{ServiceError, ServiceResult};
use regex::Regex;
use std::sync::LazyLock;
use validator::Validate;

pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
});

/// Validated signup input with the email already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Validated login input with the email already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Normalize an email for lookup and uniqueness checks.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic `local@domain.tld` shape check on already-normalized input.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Password length in UTF-16 code units, the unit browsers count in.
fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

pub fn validate_registration(request: RegisterRequest) -> ServiceResult<Registration> {
    if request.validate().is_err() {
        return Err(ServiceError::validation("All fields are required"));
    }

    // `validate` guarantees every field is present and non-empty.
    let full_name = request.full_name.unwrap_or_default();
    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    if password_length(&password) < MIN_PASSWORD_LENGTH {
        return Err(ServiceError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let email = normalize_email(&email);
    if !is_valid_email(&email) {
        return Err(ServiceError::validation("Invalid email format"));
    }

    Ok(Registration {
        full_name,
        email,
        password,
    })
}

pub fn validate_login(request: LoginRequest) -> ServiceResult<Credentials> {
    if request.validate().is_err() {
        return Err(ServiceError::validation("Email and password are required"));
    }

    Ok(Credentials {
        email: normalize_email(&request.email.unwrap_or_default()),
        password: request.password.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(full_name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            full_name: Some(full_name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn message(err: ServiceError) -> String {
        match err {
            ServiceError::Validation { message } => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email(" Alice@Example.COM "), "alice@example.com");
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@example.com"));
        assert!(is_valid_email("name.surname@example.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing-at.example.com"));
        assert!(!is_valid_email("missing-domain@"));
        assert!(!is_valid_email("no-tld@example"));
        assert!(!is_valid_email("two@@example.com"));
    }

    #[test]
    fn test_email_pattern_compiles() {
        assert!(EMAIL_REGEX.as_str().starts_with('^'));
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // Each emoji is a surrogate pair, so three of them meet the minimum.
        assert_eq!(password_length("😀😀😀"), 6);
        assert!(validate_registration(register("Ada", "ada@example.com", "😀😀😀")).is_ok());

        assert_eq!(password_length("ééééé"), 5);
        assert_eq!(
            message(validate_registration(register("Ada", "ada@example.com", "ééééé")).unwrap_err()),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_registration_accepts_and_normalizes() {
        let registration =
            validate_registration(register("Ada", " Ada@Example.com ", "secret1")).unwrap();
        assert_eq!(registration.email, "ada@example.com");
        assert_eq!(registration.full_name, "Ada");
        assert_eq!(registration.password, "secret1");
    }

    #[test]
    fn test_registration_requires_all_fields() {
        let missing = RegisterRequest {
            full_name: None,
            ..register("Ada", "ada@example.com", "secret1")
        };
        assert_eq!(
            message(validate_registration(missing).unwrap_err()),
            "All fields are required"
        );

        let empty = register("Ada", "", "secret1");
        assert_eq!(
            message(validate_registration(empty).unwrap_err()),
            "All fields are required"
        );
    }

    #[test]
    fn test_registration_check_order() {
        // Missing field wins over a short password.
        let request = RegisterRequest {
            email: None,
            ..register("Ada", "x", "abc")
        };
        assert_eq!(
            message(validate_registration(request).unwrap_err()),
            "All fields are required"
        );

        // Short password wins over a bad email.
        assert_eq!(
            message(validate_registration(register("Ada", "not-an-email", "abc12")).unwrap_err()),
            "Password must be at least 6 characters"
        );

        assert_eq!(
            message(validate_registration(register("Ada", "not-an-email", "abc123")).unwrap_err()),
            "Invalid email format"
        );
    }

    #[test]
    fn test_login_requires_both_fields() {
        let request = LoginRequest {
            email: Some("ada@example.com".to_string()),
            password: None,
        };
        assert_eq!(
            message(validate_login(request).unwrap_err()),
            "Email and password are required"
        );

        let request = LoginRequest {
            email: Some(String::new()),
            password: Some("secret1".to_string()),
        };
        assert!(validate_login(request).is_err());
    }

    #[test]
    fn test_login_normalizes_email() {
        let credentials = validate_login(LoginRequest {
            email: Some("ADA@example.com".to_string()),
            password: Some("secret1".to_string()),
        })
        .unwrap();
        assert_eq!(credentials.email, "ada@example.com");
    }
}
