use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::csrf::{constant_time_eq, generate_token};

/// The single account the demo accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownCredentials {
    pub email: String,
    pub password: String,
}

impl Default for KnownCredentials {
    fn default() -> Self {
        Self {
            email: "testuser@example.com".to_string(),
            password: "Test123!".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    MissingFields,
    /// Deliberately does not say which field was wrong.
    InvalidCredentials,
}

impl LoginError {
    pub fn message(&self) -> &'static str {
        match self {
            LoginError::MissingFields => "Please enter both email and password",
            LoginError::InvalidCredentials => "Invalid email or password",
        }
    }
}

impl KnownCredentials {
    /// Exact match on both fields.
    pub fn check(&self, email: &str, password: &str) -> Result<(), LoginError> {
        if email.is_empty() || password.is_empty() {
            return Err(LoginError::MissingFields);
        }
        let email_ok = constant_time_eq(&self.email, email);
        let password_ok = constant_time_eq(&self.password, password);
        if email_ok && password_ok {
            Ok(())
        } else {
            Err(LoginError::InvalidCredentials)
        }
    }
}

/// Opaque marker stored in the session after a successful login.
/// Nothing verifies it beyond its presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
    pub email: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn issue(email: &str, now: DateTime<Utc>) -> Self {
        Self {
            token: generate_token(),
            email: email.to_string(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
        }
    }
}
