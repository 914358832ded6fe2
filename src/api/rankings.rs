//! Ranking endpoints: overall, per tournament, per tournament group.

use super::SharedState;
use crate::error::ApiError;
use crate::export::rankings_csv;
use crate::logic::{rank_filtered, rank_overall};
use crate::models::{GroupId, TournamentId};
use actix_web::{
    get,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    web::{self, Path},
    HttpResponse,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct TournamentRankingPath {
    tournament_id: TournamentId,
}

#[derive(Deserialize)]
struct GroupRankingPath {
    tournament_id: TournamentId,
    group_id: GroupId,
}

/// Every player, including those without matches.
#[get("/api/rankings/overall")]
async fn api_overall_ranking(state: SharedState) -> HttpResponse {
    let db = state.db.read().await;
    HttpResponse::Ok().json(rank_overall(&db.players, &db.matches))
}

#[get("/api/rankings/overall.csv")]
async fn api_overall_ranking_csv(state: SharedState) -> Result<HttpResponse, ApiError> {
    let rankings = {
        let db = state.db.read().await;
        rank_overall(&db.players, &db.matches)
    };
    let body = rankings_csv(&rankings).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename("rankings.csv".to_string())],
        })
        .body(body))
}

/// Players who played in the tournament. A match naming a deleted player is a 500.
#[get("/api/rankings/tournament/{tournament_id}")]
async fn api_tournament_ranking(
    state: SharedState,
    path: Path<TournamentRankingPath>,
) -> Result<HttpResponse, ApiError> {
    let db = state.db.read().await;
    let rankings = rank_filtered(&db.players, &db.matches, path.tournament_id, None)?;
    Ok(HttpResponse::Ok().json(rankings))
}

#[get("/api/rankings/tournament/{tournament_id}/group/{group_id}")]
async fn api_group_ranking(
    state: SharedState,
    path: Path<GroupRankingPath>,
) -> Result<HttpResponse, ApiError> {
    let db = state.db.read().await;
    let rankings = rank_filtered(
        &db.players,
        &db.matches,
        path.tournament_id,
        Some(path.group_id),
    )?;
    Ok(HttpResponse::Ok().json(rankings))
}

pub(super) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_overall_ranking)
        .service(api_overall_ranking_csv)
        .service(api_tournament_ranking)
        .service(api_group_ranking);
}
