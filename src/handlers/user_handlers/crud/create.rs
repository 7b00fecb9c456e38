use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::csrf;
use crate::auth::session::Flash;
use crate::errors::AppError;
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::user::{Commit, Modal, UserForm};
use crate::workspace::WorkspaceStore;
use super::helpers::{apply_form, back_to_list, with_screen};

pub async fn open_add(
    store: web::Data<WorkspaceStore>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    with_screen(&session, &store, |screen| screen.open_add())?;
    back_to_list(&session, None)
}

pub async fn create(
    store: web::Data<WorkspaceStore>,
    session: Session,
    form: web::Form<UserForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let outcome = with_screen(&session, &store, |screen| {
        // A post from a stale tab must not touch another dialog's draft.
        if matches!(screen.modal(), Modal::Add) {
            apply_form(screen, &form);
        }
        screen.add()
    })?;

    let flash = match outcome {
        Commit::Added(id) => {
            log::info!("Added user {id} '{}'", form.name.trim());
            Some(Flash::success("User added"))
        }
        // Modal stays open with field messages.
        Commit::Invalid => None,
        _ => Some(Flash::error("The add dialog is no longer open")),
    };
    back_to_list(&session, flash)
}
