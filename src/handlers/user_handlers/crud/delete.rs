use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::csrf;
use crate::auth::session::Flash;
use crate::errors::AppError;
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::user::Commit;
use crate::workspace::WorkspaceStore;
use super::helpers::{back_to_list, with_screen};

pub async fn prepare_delete(
    store: web::Data<WorkspaceStore>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    if with_screen(&session, &store, |screen| screen.prepare_delete(&id))? {
        back_to_list(&session, None)
    } else {
        log::warn!("Delete requested for unknown user {id}");
        Err(AppError::NotFound)
    }
}

pub async fn delete(
    store: web::Data<WorkspaceStore>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let flash = match with_screen(&session, &store, |screen| screen.delete())? {
        Commit::Deleted(user) => {
            log::info!("Deleted user {} '{}'", user.id, user.name);
            Flash::success("User deleted")
        }
        _ => Flash::error("Error deleting user"),
    };
    back_to_list(&session, Some(flash))
}
