//! User management screen: add, edit, delete and cancel through the modal routes.

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use common::*;
use userdesk::config::AppConfig;

fn user_fields<'a>(
    csrf: &'a str,
    name: &'a str,
    role: &'a str,
    email: &'a str,
    password: &'a str,
    status: &'a str,
) -> Vec<(&'a str, &'a str)> {
    vec![
        ("csrf_token", csrf),
        ("name", name),
        ("role", role),
        ("email", email),
        ("password", password),
        ("status", status),
    ]
}

#[actix_rt::test]
async fn test_list_shows_seeded_users() {
    let app = test_app!(AppConfig::default());
    let mut browser = Browser::new();

    let page = send!(app, browser, get("/home"));

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.row_ids(), ["1", "2", "3", "4"]);
    assert!(page.body.contains("Tony Reichert"));
    assert!(page.body.contains("Vacation"));
    assert!(!page.has_modal());
}

#[actix_rt::test]
async fn test_add_user_valid() {
    let app = test_app!(AppConfig::default());
    let mut browser = Browser::new();
    send!(app, browser, get("/home"));

    let csrf = browser.csrf.clone();
    send!(app, browser, post("/home/add/open", &[("csrf_token", csrf.as_str())]));
    let page = send!(app, browser, get("/home"));
    assert!(page.has_modal());
    assert!(page.body.contains("Add New User"));

    let csrf = browser.csrf.clone();
    let page = send!(
        app,
        browser,
        post("/home/add", &user_fields(&csrf, "Ann Lee", "QA Engineer", "ann@example.com", "secret1", "Paused"))
    );
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location.as_deref(), Some("/home"));

    let page = send!(app, browser, get("/home"));
    assert_eq!(page.row_ids(), ["1", "2", "3", "4", "5"]);
    assert!(page.body.contains("Ann Lee"));
    assert!(page.body.contains("User added"));
    assert!(!page.has_modal());
}

#[actix_rt::test]
async fn test_add_user_invalid_shows_all_messages() {
    let app = test_app!(AppConfig::default());
    let mut browser = Browser::new();
    send!(app, browser, get("/home"));

    let csrf = browser.csrf.clone();
    send!(app, browser, post("/home/add/open", &[("csrf_token", csrf.as_str())]));
    send!(app, browser, post("/home/add", &user_fields(&csrf, "", "", "nope", "123", "Active")));

    let page = send!(app, browser, get("/home"));
    assert_eq!(page.row_count(), 4);
    assert!(page.has_modal());
    assert!(page.body.contains("Name is required"));
    assert!(page.body.contains("Role is required"));
    assert!(page.body.contains("Invalid email format"));
    assert!(page.body.contains("Password must be at least 6 characters long"));
}

#[actix_rt::test]
async fn test_add_user_only_short_password_rejected() {
    let app = test_app!(AppConfig::default());
    let mut browser = Browser::new();
    send!(app, browser, get("/home"));

    let csrf = browser.csrf.clone();
    send!(app, browser, post("/home/add/open", &[("csrf_token", csrf.as_str())]));
    send!(
        app,
        browser,
        post("/home/add", &user_fields(&csrf, "Ann", "QA", "ann@example.com", "12345", "Active"))
    );

    let page = send!(app, browser, get("/home"));
    assert_eq!(page.row_count(), 4);
    assert_eq!(page.body.matches("class=\"field-error\"").count(), 1);
    assert!(page.body.contains("data-field=\"password\""));
}

#[actix_rt::test]
async fn test_add_without_open_modal_is_refused() {
    let app = test_app!(AppConfig::default());
    let mut browser = Browser::new();
    send!(app, browser, get("/home"));

    let csrf = browser.csrf.clone();
    send!(
        app,
        browser,
        post("/home/add", &user_fields(&csrf, "Ann", "QA", "ann@example.com", "secret1", "Active"))
    );

    let page = send!(app, browser, get("/home"));
    assert_eq!(page.row_count(), 4);
    assert!(page.body.contains("The add dialog is no longer open"));
}

#[actix_rt::test]
async fn test_stale_add_leaves_edit_draft_alone() {
    let app = test_app!(AppConfig::default());
    let mut browser = Browser::new();
    send!(app, browser, get("/home"));

    let csrf = browser.csrf.clone();
    send!(app, browser, post("/home/users/2/edit", &[("csrf_token", csrf.as_str())]));
    send!(
        app,
        browser,
        post("/home/add", &user_fields(&csrf, "Ann", "QA", "ann@example.com", "secret1", "Active"))
    );

    let page = send!(app, browser, get("/home"));
    assert_eq!(page.row_count(), 4);
    assert!(page.body.contains("The add dialog is no longer open"));
    assert!(page.body.contains("Edit User"));
    assert!(page.body.contains("value=\"zoey@example.com\""));
    assert!(!page.body.contains("ann@example.com"));
}

#[actix_rt::test]
async fn test_edit_user_replaces_record() {
    let app = test_app!(AppConfig::default());
    let mut browser = Browser::new();
    send!(app, browser, get("/home"));

    let csrf = browser.csrf.clone();
    send!(app, browser, post("/home/users/2/edit", &[("csrf_token", csrf.as_str())]));
    let page = send!(app, browser, get("/home"));
    assert!(page.body.contains("Edit User"));
    assert!(page.body.contains("value=\"zoey@example.com\""));

    send!(
        app,
        browser,
        post("/home/edit", &user_fields(&csrf, "Zoey Lang", "CTO", "zoey@example.com", "securePass!1", "Active"))
    );

    let page = send!(app, browser, get("/home"));
    assert_eq!(page.row_ids(), ["1", "2", "3", "4"]);
    assert!(page.body.contains("CTO"));
    assert!(!page.body.contains("Technical Lead"));
    assert_eq!(page.body.matches("Zoey Lang").count(), 1);
    assert!(page.body.contains("User updated successfully"));
}

#[actix_rt::test]
async fn test_edit_invalid_keeps_stored_record() {
    let app = test_app!(AppConfig::default());
    let mut browser = Browser::new();
    send!(app, browser, get("/home"));

    let csrf = browser.csrf.clone();
    send!(app, browser, post("/home/users/1/edit", &[("csrf_token", csrf.as_str())]));
    send!(
        app,
        browser,
        post("/home/edit", &user_fields(&csrf, "Tony Reichert", "CEO", "tony@example.com", "abc", "Active"))
    );

    let page = send!(app, browser, get("/home"));
    assert!(page.has_modal());
    assert!(page.body.contains("Password must be at least 6 characters long"));
    assert!(page.body.contains("<td>pass1234</td>"));
}

#[actix_rt::test]
async fn test_edit_unknown_user_is_404() {
    let app = test_app!(AppConfig::default());
    let mut browser = Browser::new();
    send!(app, browser, get("/home"));

    let csrf = browser.csrf.clone();
    let page = send!(app, browser, post("/home/users/99/edit", &[("csrf_token", csrf.as_str())]));

    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert!(page.body.contains("That page does not exist."));
}

#[actix_rt::test]
async fn test_delete_user_preserves_order() {
    let app = test_app!(AppConfig::default());
    let mut browser = Browser::new();
    send!(app, browser, get("/home"));

    let csrf = browser.csrf.clone();
    send!(app, browser, post("/home/users/3/delete", &[("csrf_token", csrf.as_str())]));
    let page = send!(app, browser, get("/home"));
    assert!(page.body.contains("Are you sure you want to delete the user Jane Fisher?"));

    send!(app, browser, post("/home/delete", &[("csrf_token", csrf.as_str())]));

    let page = send!(app, browser, get("/home"));
    assert_eq!(page.row_ids(), ["1", "2", "4"]);
    assert!(!page.body.contains("Jane Fisher"));
    assert!(page.body.contains("User deleted"));
}

#[actix_rt::test]
async fn test_cancel_closes_modal_without_changes() {
    let app = test_app!(AppConfig::default());
    let mut browser = Browser::new();
    send!(app, browser, get("/home"));

    let csrf = browser.csrf.clone();
    send!(app, browser, post("/home/users/4/delete", &[("csrf_token", csrf.as_str())]));
    send!(app, browser, post("/home/cancel", &[("csrf_token", csrf.as_str())]));

    let page = send!(app, browser, get("/home"));
    assert!(!page.has_modal());
    assert_eq!(page.row_count(), 4);

    // A delete confirmation after cancel has nothing staged.
    send!(app, browser, post("/home/delete", &[("csrf_token", csrf.as_str())]));
    let page = send!(app, browser, get("/home"));
    assert_eq!(page.row_count(), 4);
    assert!(page.body.contains("Error deleting user"));
}

#[actix_rt::test]
async fn test_workspaces_are_per_session() {
    let app = test_app!(AppConfig::default());
    let mut alice = Browser::new();
    let mut bob = Browser::new();
    send!(app, alice, get("/home"));
    send!(app, bob, get("/home"));

    let csrf = alice.csrf.clone();
    send!(app, alice, post("/home/users/1/delete", &[("csrf_token", csrf.as_str())]));
    send!(app, alice, post("/home/delete", &[("csrf_token", csrf.as_str())]));

    assert_eq!(send!(app, alice, get("/home")).row_count(), 3);
    assert_eq!(send!(app, bob, get("/home")).row_count(), 4);
}

#[actix_rt::test]
async fn test_modal_routes_require_csrf() {
    let app = test_app!(AppConfig::default());
    let mut browser = Browser::new();
    send!(app, browser, get("/home"));

    let page = send!(app, browser, post("/home/users/1/delete", &[("csrf_token", "forged")]));

    assert_eq!(page.status, StatusCode::FORBIDDEN);
}
