use actix_session::Session;
use actix_web::HttpResponse;

use crate::auth::session::{Flash, set_flash, workspace_key};
use crate::errors::{AppError, see_other};
use crate::models::user::{UserForm, UserScreen};
use crate::workspace::WorkspaceStore;

/// Run one transition on this session's screen.
pub fn with_screen<R>(
    session: &Session,
    store: &WorkspaceStore,
    f: impl FnOnce(&mut UserScreen) -> R,
) -> Result<R, AppError> {
    let key = workspace_key(session)?;
    Ok(store.with(&key, f))
}

/// Copy posted values into the draft. Only fields that differ are written,
/// so untouched fields keep their messages until the next validation.
pub fn apply_form(screen: &mut UserScreen, form: &UserForm) {
    for (field, value) in form.fields() {
        if screen.draft().value(field) != value {
            screen.set_field(field, value);
        }
    }
}

pub fn back_to_list(session: &Session, flash: Option<Flash>) -> Result<HttpResponse, AppError> {
    if let Some(flash) = flash {
        set_flash(session, flash)?;
    }
    Ok(see_other("/home"))
}
