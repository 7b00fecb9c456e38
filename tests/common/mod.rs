//! Shared test infrastructure for the HTTP-level tests.
//!
//! - `test_app!(config)` builds the full app with a cookie session store.
//! - `send!(app, browser, request)` runs a request carrying the browser's session cookie.
//! - `Browser` remembers the session cookie and the latest CSRF token.
#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::test::{self, TestRequest};
use regex::Regex;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const DEMO_EMAIL: &str = "testuser@example.com";
pub const DEMO_PASSWORD: &str = "Test123!";

// ============================================================================
// APP SETUP
// ============================================================================

macro_rules! test_app {
    ($config:expr) => {{
        let config = actix_web::web::Data::new($config);
        let store = actix_web::web::Data::new(
            userdesk::workspace::WorkspaceStore::new(config.max_workspaces),
        );
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(
                    actix_session::SessionMiddleware::builder(
                        actix_session::storage::CookieSessionStore::default(),
                        actix_web::cookie::Key::generate(),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .app_data(config)
                .app_data(store)
                .configure(userdesk::configure),
        )
        .await
    }};
}

macro_rules! send {
    ($app:expr, $browser:expr, $req:expr) => {{
        let req = $browser.attach($req).to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        $browser.absorb(resp).await
    }};
}

// ============================================================================
// BROWSER STATE
// ============================================================================

/// What a test sees of a response.
#[derive(Debug)]
pub struct Page {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl Page {
    /// Number of rows in the user table.
    pub fn row_count(&self) -> usize {
        self.body.matches("<tr id=\"user-").count()
    }

    /// Row ids in table order.
    pub fn row_ids(&self) -> Vec<String> {
        let re = Regex::new(r#"<tr id="user-([^"]+)""#).expect("Failed to compile regex");
        re.captures_iter(&self.body).map(|c| c[1].to_string()).collect()
    }

    pub fn has_modal(&self) -> bool {
        self.body.contains("role=\"dialog\"")
    }
}

#[derive(Default)]
pub struct Browser {
    cookie: Option<Cookie<'static>>,
    pub csrf: String,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, req: TestRequest) -> TestRequest {
        match &self.cookie {
            Some(c) => req.cookie(c.clone()),
            None => req,
        }
    }

    pub async fn absorb<B: MessageBody>(&mut self, resp: ServiceResponse<B>) -> Page {
        if let Some(c) = resp.response().cookies().find(|c| c.name() == "id") {
            self.cookie = Some(c.into_owned());
        }
        let status = resp.status();
        let location = resp
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = String::from_utf8(test::read_body(resp).await.to_vec())
            .expect("Response body is not UTF-8");
        if let Some(token) = extract_csrf_token(&body) {
            self.csrf = token;
        }
        Page { status, location, body }
    }
}

// ============================================================================
// REQUEST BUILDERS
// ============================================================================

pub fn get(path: &str) -> TestRequest {
    TestRequest::get().uri(path)
}

/// Url-encoded POST; the CSRF token is added by the caller.
pub fn post(path: &str, pairs: &[(&str, &str)]) -> TestRequest {
    let body = serde_urlencoded::to_string(pairs).expect("Failed to encode form");
    TestRequest::post()
        .uri(path)
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload(body)
}

// ============================================================================
// CSRF TOKEN EXTRACTION
// ============================================================================

pub fn extract_csrf_token(html: &str) -> Option<String> {
    // <input type="hidden" name="csrf_token" value="...">
    let re = Regex::new(r#"name="csrf_token" value="([^"]+)""#)
        .expect("Failed to compile regex");
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}
