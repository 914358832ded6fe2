//! Single binary web server: REST API under /api, web client from STATIC_DIR at /.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:3001 by default; see `config` for the environment variables.

use actix_web::{middleware::Logger, App, HttpServer};
use std::io;
use tennis_tournament_web::{
    api::{self, AppState},
    store::file,
    AppConfig, Database,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config =
        AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    if config.admin_password.is_none() {
        log::warn!("ADMIN_PASSWORD is not set: admin login is disabled, the API is read-only");
    }

    let db = match &config.data_file {
        Some(path) => file::load(path)
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
        None => {
            log::info!("DATA_FILE is empty, records live in memory only");
            Database::new()
        }
    };

    let key = api::session_key(&config);
    let bind = (config.host.clone(), config.port);
    let cookie_secure = config.cookie_secure;
    let cors_origins = config.cors_origins.clone();
    if !cors_origins.is_empty() {
        log::info!("Allowing credentialed requests from {}", cors_origins.join(", "));
    }
    let static_dir = config.static_dir.clone();
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = actix_web::web::Data::new(AppState::new(db, config));

    HttpServer::new(move || {
        let static_dir = static_dir.clone();
        App::new()
            .app_data(state.clone())
            .wrap(api::session_middleware(key.clone(), cookie_secure))
            .wrap(api::cors(&cors_origins))
            .wrap(Logger::default())
            .configure(api::configure)
            .configure(move |cfg| api::configure_client(cfg, &static_dir))
    })
    .bind(bind)?
    .run()
    .await
}
