//! Tournaments and their groups.

use super::{require_admin, SharedState};
use crate::error::ApiError;
use crate::models::{GroupId, NewTournament, PlayerId, TournamentId};
use actix_session::Session;
use actix_web::{
    delete, get, post, put,
    web::{self, Json, Path},
    HttpResponse,
};
use serde::Deserialize;

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segment: group id (e.g. /api/groups/{id})
#[derive(Deserialize)]
struct GroupPath {
    id: GroupId,
}

#[derive(Deserialize)]
struct NewGroupBody {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupPlayersBody {
    player_ids: Vec<PlayerId>,
}

#[get("/api/tournaments")]
async fn api_list_tournaments(state: SharedState) -> HttpResponse {
    let db = state.db.read().await;
    HttpResponse::Ok().json(&db.tournaments)
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(
    state: SharedState,
    path: Path<TournamentPath>,
) -> Result<HttpResponse, ApiError> {
    let db = state.db.read().await;
    Ok(HttpResponse::Ok().json(db.tournament(path.id)?))
}

#[post("/api/tournaments")]
async fn api_create_tournament(
    state: SharedState,
    session: Session,
    body: Json<NewTournament>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&session)?;
    let new = body.into_inner();
    let tournament = state.update(|db| db.add_tournament(new)).await?;
    log::info!("Created tournament '{}' ({})", tournament.name, tournament.id);
    Ok(HttpResponse::Created().json(tournament))
}

/// Delete a tournament and its groups. Its matches stay on record.
#[delete("/api/tournaments/{id}")]
async fn api_remove_tournament(
    state: SharedState,
    session: Session,
    path: Path<TournamentPath>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&session)?;
    let tournament = state.update(|db| db.remove_tournament(path.id)).await?;
    log::info!("Removed tournament '{}' ({})", tournament.name, tournament.id);
    Ok(HttpResponse::NoContent().finish())
}

#[get("/api/tournaments/{id}/groups")]
async fn api_tournament_groups(
    state: SharedState,
    path: Path<TournamentPath>,
) -> Result<HttpResponse, ApiError> {
    let db = state.db.read().await;
    Ok(HttpResponse::Ok().json(db.tournament_groups(path.id)?))
}

/// Add a group (at most `MAX_GROUPS` per tournament).
#[post("/api/tournaments/{id}/groups")]
async fn api_add_group(
    state: SharedState,
    session: Session,
    path: Path<TournamentPath>,
    body: Json<NewGroupBody>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&session)?;
    let max_groups = state.config.max_groups;
    let group = state
        .update(|db| db.add_group(path.id, &body.name, max_groups))
        .await?;
    Ok(HttpResponse::Created().json(group))
}

#[get("/api/groups")]
async fn api_list_groups(state: SharedState) -> HttpResponse {
    let db = state.db.read().await;
    HttpResponse::Ok().json(&db.groups)
}

#[get("/api/groups/{id}")]
async fn api_get_group(
    state: SharedState,
    path: Path<GroupPath>,
) -> Result<HttpResponse, ApiError> {
    let db = state.db.read().await;
    Ok(HttpResponse::Ok().json(db.group(path.id)?))
}

/// Replace the members of a group.
#[put("/api/groups/{id}/players")]
async fn api_set_group_players(
    state: SharedState,
    session: Session,
    path: Path<GroupPath>,
    body: Json<GroupPlayersBody>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&session)?;
    let group = state
        .update(|db| db.set_group_players(path.id, &body.player_ids))
        .await?;
    Ok(HttpResponse::Ok().json(group))
}

pub(super) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_list_tournaments)
        .service(api_get_tournament)
        .service(api_create_tournament)
        .service(api_remove_tournament)
        .service(api_tournament_groups)
        .service(api_add_group)
        .service(api_list_groups)
        .service(api_get_group)
        .service(api_set_group_players);
}
