//! REST API: actix-web handlers, shared state and the admin session guard.
//!
//! Reads are public. Every write requires an admin session cookie set by
//! `POST /api/admin/login`.

mod admin;
mod matches;
mod players;
mod rankings;
mod tournaments;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::store::{file, Database, StoreError};
use actix_cors::Cors;
use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    get,
    http::{header, Method},
    web::{self, Data},
    HttpResponse, Responder,
};
use std::path::Path;
use tokio::sync::RwLock;

/// Session key holding `true` for a logged-in admin.
const ADMIN_SESSION_KEY: &str = "admin";

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "tennis_session";

/// Shared state: the record store behind a lock plus configuration.
pub struct AppState {
    pub db: RwLock<Database>,
    pub config: AppConfig,
}

/// Handler extractor for the shared state.
pub type SharedState = Data<AppState>;

impl AppState {
    pub fn new(db: Database, config: AppConfig) -> Self {
        Self {
            db: RwLock::new(db),
            config,
        }
    }

    /// Write a snapshot of `db` when a data file is configured.
    pub async fn persist(&self, db: &Database) -> Result<(), StoreError> {
        match &self.config.data_file {
            Some(path) => file::save(path, db).await,
            None => Ok(()),
        }
    }

    /// Run a mutation on a copy of the store, snapshot the copy, then swap it in.
    ///
    /// A failed mutation or snapshot leaves the live store untouched.
    pub async fn update<T, F>(&self, mutate: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Database) -> Result<T, StoreError>,
    {
        let mut db = self.db.write().await;
        let mut next = db.clone();
        let out = mutate(&mut next)?;
        self.persist(&next).await?;
        *db = next;
        Ok(out)
    }
}

/// Fail with 401 unless the session belongs to a logged-in admin.
pub fn require_admin(session: &Session) -> Result<(), ApiError> {
    match session.get::<bool>(ADMIN_SESSION_KEY) {
        Ok(Some(true)) => Ok(()),
        Ok(_) => Err(ApiError::Unauthorized),
        Err(e) => {
            log::warn!("Unreadable session: {}", e);
            Err(ApiError::Unauthorized)
        }
    }
}

fn is_admin(session: &Session) -> bool {
    require_admin(session).is_ok()
}

/// Signing key for the session cookie: the configured one, or a fresh random key.
pub fn session_key(config: &AppConfig) -> Key {
    match config.session_key.as_deref().map(Key::try_from) {
        Some(Ok(key)) => key,
        Some(Err(e)) => {
            log::warn!("SESSION_KEY unusable ({}), generating a random key", e);
            Key::generate()
        }
        None => Key::generate(),
    }
}

/// Cookie-backed session middleware for the admin login.
pub fn session_middleware(key: Key, secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_string())
        .cookie_secure(secure)
        .build()
}

/// CORS for a web client served from another origin.
///
/// Listed origins may send the session cookie. With no origins configured any origin
/// may call the API, but browsers will not attach credentials.
pub fn cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);
    if origins.is_empty() {
        return cors.allow_any_origin().send_wildcard();
    }
    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
        .supports_credentials()
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tennis-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

async fn greeting() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello from the Tennis Championship Backend!")
}

/// Register every API route, plus JSON error bodies for malformed paths, queries and bodies.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::NotFound(err.to_string()).into()),
    )
    .service(api_health)
    .service(favicon)
    .configure(admin::configure)
    .configure(players::configure)
    .configure(tournaments::configure)
    .configure(matches::configure)
    .configure(rankings::configure);
}

/// Serve the web client from `static_dir` at `/` when it exists, else a plain greeting.
/// Register after [`configure`] so API routes take precedence.
pub fn configure_client(cfg: &mut web::ServiceConfig, static_dir: &Path) {
    if static_dir.is_dir() {
        cfg.service(Files::new("/", static_dir).index_file("index.html"));
    } else {
        cfg.route("/", web::get().to(greeting));
    }
}
