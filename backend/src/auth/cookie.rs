//! Session cookie side channel.
//!
//! The session token never travels in a JSON body; it is set and cleared
//! through the `jwt` cookie built here, and read back from the request
//! headers by the session middleware.

use axum::http::{
    HeaderMap, HeaderValue,
    header::{AUTHORIZATION, COOKIE, InvalidHeaderValue},
};

pub const SESSION_COOKIE_NAME: &str = "jwt";

/// A `Set-Cookie` instruction for the session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    value: String,
    max_age_seconds: u64,
    secure: bool,
}

impl SessionCookie {
    /// Cookie carrying a freshly issued token for `max_age_seconds`.
    pub fn issued(token: String, max_age_seconds: u64, secure: bool) -> Self {
        Self {
            value: token,
            max_age_seconds,
            secure,
        }
    }

    /// Cookie that overwrites the session with an empty value and zero lifetime.
    pub fn cleared(secure: bool) -> Self {
        Self {
            value: String::new(),
            max_age_seconds: 0,
            secure,
        }
    }

    #[cfg(test)]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn max_age_seconds(&self) -> u64 {
        self.max_age_seconds
    }

    #[cfg(test)]
    pub fn is_cleared(&self) -> bool {
        self.max_age_seconds == 0
    }

    /// Render as a `Set-Cookie` header value.
    pub fn to_header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let mut cookie = format!(
            "{SESSION_COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Strict; Max-Age={}",
            self.value, self.max_age_seconds
        );
        // Plain-HTTP development servers would drop a Secure cookie.
        if self.secure {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie)
    }
}

/// Reads the session token from a `Bearer` header or the session cookie.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_bearer_token(headers) {
        return Some(token);
    }
    let value = headers.get(COOKIE)?.to_str().ok()?;
    value
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == SESSION_COOKIE_NAME)
        .map(|(_, val)| val.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let trimmed = value.trim();
    let token = trimmed
        .strip_prefix("Bearer ")
        .or_else(|| trimmed.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
