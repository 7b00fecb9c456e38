//! Runtime settings read from the environment (and `.env`, via dotenvy).

use std::str::FromStr;
use std::time::Duration;

use crate::auth::credentials::KnownCredentials;
use crate::models::registration::RegistrationPolicy;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Raw `SESSION_KEY`; validated when the cookie key is built.
    pub session_key: Option<String>,
    pub credentials: KnownCredentials,
    pub autofill_credentials: bool,
    pub login_redirect_delay: Duration,
    pub require_login: bool,
    pub registration_policy: RegistrationPolicy,
    pub max_workspaces: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            session_key: None,
            credentials: KnownCredentials::default(),
            autofill_credentials: true,
            login_redirect_delay: Duration::from_secs(2),
            require_login: false,
            registration_policy: RegistrationPolicy::default(),
            max_workspaces: 1024,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let strict = parse_or(&lookup, "STRICT_REGISTRATION", false);
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            session_key: lookup("SESSION_KEY"),
            credentials: KnownCredentials {
                email: lookup("DEMO_EMAIL").unwrap_or(defaults.credentials.email),
                password: lookup("DEMO_PASSWORD").unwrap_or(defaults.credentials.password),
            },
            autofill_credentials: parse_or(&lookup, "AUTOFILL_CREDENTIALS", defaults.autofill_credentials),
            login_redirect_delay: Duration::from_secs(parse_or(
                &lookup,
                "LOGIN_REDIRECT_SECS",
                defaults.login_redirect_delay.as_secs(),
            )),
            require_login: parse_or(&lookup, "REQUIRE_LOGIN", defaults.require_login),
            registration_policy: if strict {
                RegistrationPolicy::strict()
            } else {
                defaults.registration_policy
            },
            max_workspaces: parse_or(&lookup, "MAX_WORKSPACES", defaults.max_workspaces).max(1),
        }
    }
}

fn parse_or<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                log::warn!("Ignoring unparseable {key}={raw:?}, using default");
                default
            }
        },
        None => default,
    }
}
