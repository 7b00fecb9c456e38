use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::validate;

/// Which optional checks registration enforces on top of field presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistrationPolicy {
    pub require_email_format: bool,
    pub require_password_match: bool,
}

impl RegistrationPolicy {
    pub fn strict() -> Self {
        Self { require_email_format: true, require_password_match: true }
    }
}

/// Posted registration form. The checkbox is absent from the body when unchecked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default, deserialize_with = "checkbox")]
    pub terms_agreed: bool,
    #[serde(default)]
    pub csrf_token: String,
    /// Set by the eye buttons; absent for a plain submit.
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub password_visible: Option<String>,
    #[serde(default)]
    pub confirm_visible: Option<String>,
}

fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(raw.as_deref(), Some("on" | "true" | "1" | "yes")))
}

/// First failed check wins; the message is shown as a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    MissingName,
    MissingEmail,
    InvalidEmail,
    MissingPassword,
    PasswordMismatch,
    TermsNotAgreed,
}

impl RegistrationError {
    pub fn message(&self) -> &'static str {
        match self {
            RegistrationError::MissingName => "Please enter your full name",
            RegistrationError::MissingEmail => "Please enter your email",
            RegistrationError::InvalidEmail => "Please enter a valid email",
            RegistrationError::MissingPassword => "Please enter a password",
            RegistrationError::PasswordMismatch => "Passwords do not match",
            RegistrationError::TermsNotAgreed => "Please agree to the Terms and Conditions",
        }
    }
}

/// Fail-fast validation: name, email, password, terms.
pub fn validate(form: &RegistrationForm, policy: RegistrationPolicy) -> Result<(), RegistrationError> {
    if form.full_name.is_empty() {
        return Err(RegistrationError::MissingName);
    }
    if form.email.is_empty() {
        return Err(RegistrationError::MissingEmail);
    }
    if policy.require_email_format && !validate::is_email_shaped(&form.email) {
        return Err(RegistrationError::InvalidEmail);
    }
    if form.password.is_empty() {
        return Err(RegistrationError::MissingPassword);
    }
    if policy.require_password_match && form.password != form.confirm_password {
        return Err(RegistrationError::PasswordMismatch);
    }
    if !form.terms_agreed {
        return Err(RegistrationError::TermsNotAgreed);
    }
    Ok(())
}

/// Receipt for an accepted registration. Nothing consumes it; it is logged.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationTicket {
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl RegistrationTicket {
    pub fn issue(form: &RegistrationForm, now: DateTime<Utc>) -> Self {
        Self {
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            created_at: now,
            expires_at: now + Duration::hours(1),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
