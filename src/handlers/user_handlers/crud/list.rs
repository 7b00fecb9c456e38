use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::csrf;
use crate::errors::{AppError, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::templates_structs::{ModalView, PageContext, UserListTemplate};
use crate::workspace::WorkspaceStore;
use super::helpers::{back_to_list, with_screen};

pub async fn list(
    store: web::Data<WorkspaceStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session)?;
    let (users, modal) = with_screen(&session, &store, |screen| {
        (screen.users().to_vec(), ModalView::from_screen(screen))
    })?;

    render(UserListTemplate { ctx, users, modal })
}

pub async fn cancel(
    store: web::Data<WorkspaceStore>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    with_screen(&session, &store, |screen| screen.cancel())?;
    back_to_list(&session, None)
}
