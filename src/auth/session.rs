use actix_session::Session;

use crate::auth::csrf::generate_token;
use crate::auth::credentials::AuthToken;
use crate::errors::AppError;

const AUTH_TOKEN_KEY: &str = "auth_token";
const FLASH_KEY: &str = "flash";
const WORKSPACE_KEY: &str = "workspace";

/// Kind of one-shot notice; drives the banner colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: FlashKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: FlashKind::Error, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == FlashKind::Error
    }
}

pub fn set_flash(session: &Session, flash: Flash) -> Result<(), AppError> {
    session.insert(FLASH_KEY, flash)?;
    Ok(())
}

pub fn take_flash(session: &Session) -> Option<Flash> {
    let flash = session.get::<Flash>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

pub fn store_auth_token(session: &Session, token: &AuthToken) -> Result<(), AppError> {
    session.insert(AUTH_TOKEN_KEY, token)?;
    Ok(())
}

pub fn get_auth_token(session: &Session) -> Option<AuthToken> {
    session.get::<AuthToken>(AUTH_TOKEN_KEY).unwrap_or(None)
}

/// Key of this browser's user-management workspace, minted on first use.
pub fn workspace_key(session: &Session) -> Result<String, AppError> {
    if let Some(key) = session.get::<String>(WORKSPACE_KEY)? {
        return Ok(key);
    }
    let key = generate_token();
    session.insert(WORKSPACE_KEY, &key)?;
    Ok(key)
}

pub fn peek_workspace_key(session: &Session) -> Option<String> {
    session.get::<String>(WORKSPACE_KEY).unwrap_or(None)
}
