use super::{require_admin, SharedState};
use crate::error::ApiError;
use crate::models::{GroupId, MatchId, NewMatch, TournamentId};
use actix_session::Session;
use actix_web::{
    delete, get, post,
    web::{self, Json, Path, Query},
    HttpResponse,
};
use serde::Deserialize;

/// Path segment: match id (e.g. /api/matches/{id})
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

/// Optional `?tournamentId=..&groupId=..` filter.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchFilter {
    tournament_id: Option<TournamentId>,
    group_id: Option<GroupId>,
}

#[get("/api/matches")]
async fn api_list_matches(state: SharedState, filter: Query<MatchFilter>) -> HttpResponse {
    let db = state.db.read().await;
    HttpResponse::Ok().json(db.matches_for(filter.tournament_id, filter.group_id))
}

#[post("/api/matches")]
async fn api_add_match(
    state: SharedState,
    session: Session,
    body: Json<NewMatch>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&session)?;
    let new = body.into_inner();
    let m = state.update(|db| db.add_match(new)).await?;
    log::info!("Recorded match {} ({}-{})", m.id, m.score1, m.score2);
    Ok(HttpResponse::Created().json(m))
}

#[delete("/api/matches/{id}")]
async fn api_remove_match(
    state: SharedState,
    session: Session,
    path: Path<MatchPath>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&session)?;
    state.update(|db| db.remove_match(path.id)).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub(super) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_list_matches)
        .service(api_add_match)
        .service(api_remove_match);
}
