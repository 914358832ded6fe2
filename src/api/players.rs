use super::{require_admin, SharedState};
use crate::error::ApiError;
use crate::models::{NewPlayer, PlayerId};
use actix_session::Session;
use actix_web::{
    delete, get, post,
    web::{self, Json, Path},
    HttpResponse,
};
use serde::Deserialize;

/// Path segment: player id (e.g. /api/players/{id})
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

#[get("/api/players")]
async fn api_list_players(state: SharedState) -> HttpResponse {
    let db = state.db.read().await;
    HttpResponse::Ok().json(&db.players)
}

#[get("/api/players/{id}")]
async fn api_get_player(
    state: SharedState,
    path: Path<PlayerPath>,
) -> Result<HttpResponse, ApiError> {
    let db = state.db.read().await;
    Ok(HttpResponse::Ok().json(db.player(path.id)?))
}

#[post("/api/players")]
async fn api_add_player(
    state: SharedState,
    session: Session,
    body: Json<NewPlayer>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&session)?;
    let new = body.into_inner();
    let player = state.update(|db| db.add_player(new)).await?;
    log::info!("Added player {} ({})", player.full_name(), player.id);
    Ok(HttpResponse::Created().json(player))
}

/// Delete a player. Matches it played stay on record.
#[delete("/api/players/{id}")]
async fn api_remove_player(
    state: SharedState,
    session: Session,
    path: Path<PlayerPath>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&session)?;
    let player = state.update(|db| db.remove_player(path.id)).await?;
    log::info!("Removed player {} ({})", player.full_name(), player.id);
    Ok(HttpResponse::NoContent().finish())
}

pub(super) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_list_players)
        .service(api_get_player)
        .service(api_add_player)
        .service(api_remove_player);
}
