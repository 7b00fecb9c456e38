use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use userdesk::config::AppConfig;
use userdesk::workspace::WorkspaceStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();
    let secret_key = userdesk::session_key(&config);
    let store = WorkspaceStore::new(config.max_workspaces);
    let bind_addr = config.bind_addr.clone();
    let config = web::Data::new(config);
    let store = web::Data::new(store);

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(store.clone())
            .configure(userdesk::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
