//! A played match between two players.

use crate::models::player::PlayerId;
use crate::models::tournament::{GroupId, TournamentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// A single 1v1 match. Scores are sets won by each side.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub score1: u32,
    pub score2: u32,
    pub location: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
}

impl GameMatch {
    pub fn new(
        tournament_id: TournamentId,
        player1_id: PlayerId,
        player2_id: PlayerId,
        score1: u32,
        score2: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            player1_id,
            player2_id,
            score1,
            score2,
            location: String::new(),
            date: Utc::now(),
            group_id: None,
        }
    }

    /// Equal scores: nobody is credited a win.
    pub fn is_tie(&self) -> bool {
        self.score1 == self.score2
    }

    /// The winning player, or None for a tie.
    pub fn winner(&self) -> Option<PlayerId> {
        if self.is_tie() {
            None
        } else if self.score1 > self.score2 {
            Some(self.player1_id)
        } else {
            Some(self.player2_id)
        }
    }

    /// Whether the match was played in `tournament_id` (and in `group_id`, when given).
    pub fn qualifies(&self, tournament_id: TournamentId, group_id: Option<GroupId>) -> bool {
        self.tournament_id == tournament_id
            && group_id.map_or(true, |g| self.group_id == Some(g))
    }
}

/// Body of `POST /api/matches`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub tournament_id: TournamentId,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub score1: u32,
    pub score2: u32,
    #[serde(default)]
    pub location: String,
    /// Defaults to the time the match is recorded.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub group_id: Option<GroupId>,
}

impl NewMatch {
    pub fn into_match(self) -> GameMatch {
        GameMatch {
            id: Uuid::new_v4(),
            tournament_id: self.tournament_id,
            player1_id: self.player1_id,
            player2_id: self.player2_id,
            score1: self.score1,
            score2: self.score2,
            location: self.location.trim().to_string(),
            date: self.date.unwrap_or_else(Utc::now),
            group_id: self.group_id,
        }
    }
}
