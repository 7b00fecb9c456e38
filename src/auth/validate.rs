use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld`: no whitespace, exactly one '@', at least one '.' after it.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const MIN_PASSWORD_LEN: usize = 6;

/// True if the address has the `local@domain.tld` shape.
pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a required text field (blank after trim is missing).
pub fn validate_required(value: &str, field_name: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{field_name} is required"));
    }
    None
}

/// Validate an email: present, then shaped like an address.
pub fn validate_email(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        return Some("Email is required".to_string());
    }
    if !is_email_shaped(email) {
        return Some("Invalid email format".to_string());
    }
    None
}

/// Validate a password: present, then at least six characters.
pub fn validate_password(password: &str) -> Option<String> {
    if password.trim().is_empty() {
        return Some("Password is required".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Some(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    None
}
