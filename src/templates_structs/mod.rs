// Template context structures for Askama templates, organized by screen.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{Flash, take_flash};
use crate::errors::AppError;

/// Common context shared by every page.
/// Templates access these as `ctx.flash`, `ctx.csrf_token`.
pub struct PageContext {
    pub flash: Option<Flash>,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session) -> Result<Self, AppError> {
        let flash = take_flash(session);
        let csrf_token = csrf::get_or_create_token(session)?;
        Ok(Self { flash, csrf_token })
    }

    /// Show `flash` now instead of whatever was queued.
    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flash = Some(flash);
        self
    }
}

mod common;
mod user;

pub use self::common::{LoginRedirect, LoginTemplate, RegisterTemplate};
pub use self::user::{FieldView, ModalView, StatusOption, UserListTemplate};
