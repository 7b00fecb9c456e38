use askama::Template;

use crate::models::registration::RegistrationForm;
use crate::models::view::PasswordVisibility;
use super::PageContext;

/// Scheduled navigation after a successful login, rendered as a meta refresh.
pub struct LoginRedirect {
    pub url: String,
    pub delay_secs: u64,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    pub email: String,
    pub password: String,
    pub password_visibility: PasswordVisibility,
    pub redirect: Option<LoginRedirect>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub ctx: PageContext,
    pub form: RegistrationForm,
    pub password_visibility: PasswordVisibility,
    pub confirm_visibility: PasswordVisibility,
}
