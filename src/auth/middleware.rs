use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web,
};

use crate::auth::session::get_auth_token;
use crate::config::AppConfig;

/// Middleware function guarding the user-management screen.
/// A no-op unless `require_login` is set; then redirects to / without an auth token.
pub async fn require_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let required = req
        .app_data::<web::Data<AppConfig>>()
        .is_some_and(|cfg| cfg.require_login);

    if required && get_auth_token(&req.get_session()).is_none() {
        let response = HttpResponse::SeeOther()
            .insert_header(("Location", "/"))
            .finish();
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}
