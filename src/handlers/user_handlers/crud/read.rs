use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::csrf;
use crate::errors::AppError;
use crate::handlers::auth_handlers::CsrfOnly;
use crate::workspace::WorkspaceStore;
use super::helpers::{back_to_list, with_screen};

pub async fn prepare_edit(
    store: web::Data<WorkspaceStore>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    if with_screen(&session, &store, |screen| screen.prepare_edit(&id))? {
        back_to_list(&session, None)
    } else {
        log::warn!("Edit requested for unknown user {id}");
        Err(AppError::NotFound)
    }
}
