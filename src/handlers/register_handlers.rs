use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::auth::csrf;
use crate::auth::session::Flash;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::registration::{self, RegistrationForm, RegistrationTicket};
use crate::models::view::PasswordVisibility;
use crate::templates_structs::{PageContext, RegisterTemplate};

pub async fn register_page(session: Session) -> Result<HttpResponse, AppError> {
    render(RegisterTemplate {
        ctx: PageContext::build(&session)?,
        form: RegistrationForm::default(),
        password_visibility: PasswordVisibility::Hidden,
        confirm_visibility: PasswordVisibility::Hidden,
    })
}

pub async fn register_submit(
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<RegistrationForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();

    let mut password_visibility = PasswordVisibility::from_flag(form.password_visible.as_deref());
    let mut confirm_visibility = PasswordVisibility::from_flag(form.confirm_visible.as_deref());
    match form.action.as_deref() {
        Some("toggle_password") => password_visibility = password_visibility.toggled(),
        Some("toggle_confirm") => confirm_visibility = confirm_visibility.toggled(),
        _ => {
            let (flash, form) = submit(form, &config, RegistrationTicket::to_json);
            return render(RegisterTemplate {
                ctx: PageContext::build(&session)?.with_flash(flash),
                form,
                password_visibility,
                confirm_visibility,
            });
        }
    }

    render(RegisterTemplate {
        ctx: PageContext::build(&session)?,
        form,
        password_visibility,
        confirm_visibility,
    })
}

/// Validate, issue a ticket and hand it to `record`. Returns the notice plus the
/// form to redisplay: the same values on failure, a blank form on success.
fn submit<E: std::fmt::Display>(
    form: RegistrationForm,
    config: &AppConfig,
    record: impl FnOnce(&RegistrationTicket) -> Result<String, E>,
) -> (Flash, RegistrationForm) {
    if let Err(e) = registration::validate(&form, config.registration_policy) {
        return (Flash::error(e.message()), form);
    }

    let ticket = RegistrationTicket::issue(&form, Utc::now());
    match record(&ticket) {
        Ok(json) => {
            log::info!("Registration ticket created: {json}");
            (
                Flash::success("Registration Successful! Token created for testing."),
                RegistrationForm::default(),
            )
        }
        Err(e) => {
            log::error!("Registration failed for '{}': {e}", form.email);
            (Flash::error("Registration failed. Please try again."), form)
        }
    }
}
