use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::credentials::AuthToken;
use crate::auth::session::{Flash, peek_workspace_key, set_flash, store_auth_token};
use crate::auth::csrf;
use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::models::view::PasswordVisibility;
use crate::templates_structs::{LoginRedirect, LoginTemplate, PageContext};
use crate::workspace::WorkspaceStore;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub csrf_token: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub password_visible: Option<String>,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn login_page(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let mut ctx = PageContext::build(&session)?;

    let (email, password) = if config.autofill_credentials {
        if ctx.flash.is_none() {
            ctx = ctx.with_flash(Flash::success("Credentials autofilled for testing"));
        }
        (config.credentials.email.clone(), config.credentials.password.clone())
    } else {
        (String::new(), String::new())
    };

    render(LoginTemplate {
        ctx,
        email,
        password,
        password_visibility: PasswordVisibility::Hidden,
        redirect: None,
    })
}

pub async fn login_submit(
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();
    let visibility = PasswordVisibility::from_flag(form.password_visible.as_deref());

    if form.action.as_deref() == Some("toggle_password") {
        return render(LoginTemplate {
            ctx: PageContext::build(&session)?,
            email: form.email,
            password: form.password,
            password_visibility: visibility.toggled(),
            redirect: None,
        });
    }

    if let Err(e) = config.credentials.check(&form.email, &form.password) {
        log::info!("Rejected login attempt for '{}'", form.email);
        return render(LoginTemplate {
            ctx: PageContext::build(&session)?.with_flash(Flash::error(e.message())),
            email: form.email,
            password: form.password,
            password_visibility: visibility,
            redirect: None,
        });
    }

    let token = AuthToken::issue(&form.email, chrono::Utc::now());
    store_auth_token(&session, &token)?;
    log::info!("Login succeeded for '{}'", form.email);

    let delay_secs = config.login_redirect_delay.as_secs();
    if delay_secs == 0 {
        set_flash(&session, Flash::success("Login Successful!"))?;
        return Ok(see_other("/home"));
    }

    render(LoginTemplate {
        ctx: PageContext::build(&session)?.with_flash(Flash::success("Login Successful!")),
        email: form.email,
        password: form.password,
        password_visibility: visibility,
        redirect: Some(LoginRedirect { url: "/home".to_string(), delay_secs }),
    })
}

pub async fn logout(
    session: Session,
    store: web::Data<WorkspaceStore>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    if let Some(key) = peek_workspace_key(&session) {
        store.remove(&key);
    }
    session.clear();
    session.renew();
    set_flash(&session, Flash::success("Logout Successful"))?;

    Ok(see_other("/"))
}
