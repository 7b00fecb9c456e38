//! Userdesk: a demo sign-in, sign-up and user-management site with in-memory data.

pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod templates_structs;
pub mod workspace;

use actix_web::{cookie::Key, middleware::from_fn, web};

use crate::config::AppConfig;

/// Register every route. Shared by the binary and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Static files
        .service(actix_files::Files::new("/static", "./static"))
        // Public routes
        .route("/", web::get().to(handlers::auth_handlers::login_page))
        .route("/login", web::post().to(handlers::auth_handlers::login_submit))
        .route("/logout", web::post().to(handlers::auth_handlers::logout))
        .route("/register", web::get().to(handlers::register_handlers::register_page))
        .route("/register", web::post().to(handlers::register_handlers::register_submit))
        // User management, guarded only when REQUIRE_LOGIN is set
        .service(
            web::scope("/home")
                .wrap(from_fn(auth::middleware::require_auth))
                .route("", web::get().to(handlers::user_handlers::list))
                .route("/add/open", web::post().to(handlers::user_handlers::open_add))
                .route("/add", web::post().to(handlers::user_handlers::create))
                .route("/users/{id}/edit", web::post().to(handlers::user_handlers::prepare_edit))
                .route("/edit", web::post().to(handlers::user_handlers::update))
                .route("/users/{id}/delete", web::post().to(handlers::user_handlers::prepare_delete))
                .route("/delete", web::post().to(handlers::user_handlers::delete))
                .route("/cancel", web::post().to(handlers::user_handlers::cancel)),
        )
        // Default 404 handler
        .default_service(web::to(|| async { errors::not_found_page() }));
}

/// Cookie key from `SESSION_KEY`, or a random one when absent or too short.
pub fn session_key(config: &AppConfig) -> Key {
    match config.session_key.as_deref() {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}
