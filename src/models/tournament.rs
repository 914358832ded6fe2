//! Tournament and Group.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Unique identifier for a group within a tournament.
pub type GroupId = Uuid;

/// A tournament, optionally divided into groups.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// Groups in creation order.
    #[serde(default)]
    pub group_ids: Vec<GroupId>,
    #[serde(default)]
    pub is_group_based: bool,
}

impl Tournament {
    /// Create a new tournament with no groups.
    pub fn new(name: impl Into<String>, is_group_based: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            group_ids: Vec::new(),
            is_group_based,
        }
    }

    pub fn has_group(&self, group_id: GroupId) -> bool {
        self.group_ids.contains(&group_id)
    }
}

/// Body of `POST /api/tournaments`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTournament {
    pub name: String,
    #[serde(default)]
    pub is_group_based: bool,
}

/// A group of players inside one tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub tournament_id: TournamentId,
    #[serde(default)]
    pub player_ids: Vec<PlayerId>,
}

impl Group {
    /// Create an empty group owned by `tournament_id`.
    pub fn new(name: impl Into<String>, tournament_id: TournamentId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tournament_id,
            player_ids: Vec::new(),
        }
    }
}
