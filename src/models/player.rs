//! Player and the request shape used to create one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches, groups and rankings).
pub type PlayerId = Uuid;

/// A registered player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    /// Seed ranking; lower is stronger. Only group seeding looks at it.
    pub ranking: u32,
}

impl Player {
    /// Create a new player with a fresh id.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        location: impl Into<String>,
        ranking: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            location: location.into(),
            ranking,
        }
    }

    /// "First Last", for logs and CSV export.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Same first and last name, ignoring ASCII case.
    pub fn same_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name.eq_ignore_ascii_case(first_name.trim())
            && self.last_name.eq_ignore_ascii_case(last_name.trim())
    }
}

/// Body of `POST /api/players` and one row of a roster CSV.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub ranking: u32,
}

impl NewPlayer {
    pub fn into_player(self) -> Player {
        Player::new(
            self.first_name.trim(),
            self.last_name.trim(),
            self.location.trim(),
            self.ranking,
        )
    }
}
