use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::csrf;
use crate::auth::session::Flash;
use crate::errors::AppError;
use crate::models::user::{Commit, Modal, UserForm};
use crate::workspace::WorkspaceStore;
use super::helpers::{apply_form, back_to_list, with_screen};

pub async fn update(
    store: web::Data<WorkspaceStore>,
    session: Session,
    form: web::Form<UserForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let outcome = with_screen(&session, &store, |screen| {
        // A post from a stale tab must not touch another dialog's draft.
        if matches!(screen.modal(), Modal::Edit(_)) {
            apply_form(screen, &form);
        }
        screen.edit()
    })?;

    let flash = match outcome {
        Commit::Updated(id) => {
            log::info!("Updated user {id}");
            Some(Flash::success("User updated successfully"))
        }
        Commit::Invalid => None,
        _ => Some(Flash::error("That user no longer exists")),
    };
    back_to_list(&session, flash)
}
