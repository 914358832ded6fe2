//! Admin login/logout and the pre-built tournament action.

use super::{is_admin, require_admin, SharedState, ADMIN_SESSION_KEY};
use crate::error::ApiError;
use crate::roster::parse_roster;
use actix_session::Session;
use actix_web::{
    get, post,
    web::{self, Bytes, Json, Query},
    HttpResponse,
};
use serde::Deserialize;

/// Name given to the seeded tournament when the request does not pick one.
const DEFAULT_SEEDED_NAME: &str = "Pre-built Tournament";

#[derive(Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

/// Query of `POST /api/initialize-tournament`.
#[derive(Deserialize)]
struct InitializeQuery {
    name: Option<String>,
    groups: Option<usize>,
}

#[post("/api/admin/login")]
async fn api_admin_login(
    state: SharedState,
    session: Session,
    body: Json<LoginBody>,
) -> Result<HttpResponse, ApiError> {
    if !state
        .config
        .admin_credentials_match(&body.username, &body.password)
    {
        log::warn!("Rejected admin login for '{}'", body.username);
        return Err(ApiError::InvalidCredentials);
    }
    session.renew();
    session
        .insert(ADMIN_SESSION_KEY, true)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    log::info!("Admin '{}' logged in", body.username);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Login successful" })))
}

#[post("/api/admin/logout")]
async fn api_admin_logout(session: Session) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}

/// Whether the caller currently holds an admin session.
#[get("/api/admin/session")]
async fn api_admin_session(session: Session) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "loggedIn": is_admin(&session) }))
}

/// Create a group-based tournament from a roster and seed its groups.
///
/// The roster CSV is the request body; an empty body falls back to the configured roster file.
#[post("/api/initialize-tournament")]
async fn api_initialize_tournament(
    state: SharedState,
    session: Session,
    query: Query<InitializeQuery>,
    body: Bytes,
) -> Result<HttpResponse, ApiError> {
    require_admin(&session)?;

    let roster = if body.iter().all(u8::is_ascii_whitespace) {
        let path = &state.config.roster_file;
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            ApiError::BadRequest(format!("Cannot read roster file {:?}: {}", path, e))
        })?;
        parse_roster(bytes.as_slice())?
    } else {
        parse_roster(body.as_ref())?
    };

    let query = query.into_inner();
    let name = query
        .name
        .unwrap_or_else(|| DEFAULT_SEEDED_NAME.to_string());
    let groups = query.groups.unwrap_or(state.config.seed_groups);

    let max_groups = state.config.max_groups;
    let seeded = state
        .update(|db| db.seed_tournament(&name, roster, groups, max_groups))
        .await?;
    Ok(HttpResponse::Created().json(seeded))
}

pub(super) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_admin_login)
        .service(api_admin_logout)
        .service(api_admin_session)
        .service(api_initialize_tournament);
}
