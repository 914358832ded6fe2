//! In-memory record store: players, tournaments, groups and matches.
//!
//! `Database` is plain data plus validated mutations; the web layer wraps it in a lock
//! and snapshots it to disk with [`file::save`] after every write.

pub mod file;

use crate::logic::{group_name, snake_draft};
use crate::models::{
    GameMatch, Group, GroupId, MatchId, NewMatch, NewPlayer, NewTournament, Player, PlayerId,
    Tournament, TournamentId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Highest score accepted for either side of a match.
pub const MAX_SCORE: u32 = 1000;

/// Kind of record, for error messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityKind {
    Player,
    Tournament,
    Group,
    Match,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Player => "Player",
            EntityKind::Tournament => "Tournament",
            EntityKind::Group => "Group",
            EntityKind::Match => "Match",
        };
        f.write_str(s)
    }
}

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The addressed record does not exist.
    #[error("{kind} not found")]
    NotFound { kind: EntityKind, id: Uuid },

    /// A request body refers to a record that does not exist.
    #[error("Unknown {kind} {id}")]
    UnknownReference { kind: EntityKind, id: Uuid },

    #[error("Maximum of {max} groups allowed per tournament")]
    TooManyGroups { max: usize },

    #[error("A match needs two different players")]
    SamePlayerTwice,

    #[error("Scores must be between 0 and {max}")]
    ScoreOutOfRange { max: u32 },

    #[error("Group {group_id} does not belong to tournament {tournament_id}")]
    GroupNotInTournament {
        group_id: GroupId,
        tournament_id: TournamentId,
    },

    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("Roster has no players")]
    EmptyRoster,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything a seeded tournament created, for the response body.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeededTournament {
    pub tournament: Tournament,
    pub groups: Vec<Group>,
    pub players_created: usize,
}

fn non_empty(value: &str, field: &'static str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::EmptyField(field));
    }
    Ok(())
}

/// All records, in insertion order. Serialized as-is into the JSON snapshot.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub matches: Vec<GameMatch>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    // --- players ---

    pub fn player(&self, id: PlayerId) -> Result<&Player, StoreError> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Player,
                id,
            })
    }

    /// Add a player. Names and location are trimmed and must not be empty.
    pub fn add_player(&mut self, new: NewPlayer) -> Result<Player, StoreError> {
        non_empty(&new.first_name, "firstName")?;
        non_empty(&new.last_name, "lastName")?;
        non_empty(&new.location, "location")?;
        let player = new.into_player();
        self.players.push(player.clone());
        Ok(player)
    }

    /// Remove a player and its group memberships. Its matches stay on record.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, StoreError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Player,
                id,
            })?;
        for g in &mut self.groups {
            g.player_ids.retain(|&p| p != id);
        }
        Ok(self.players.remove(idx))
    }

    // --- tournaments ---

    pub fn tournament(&self, id: TournamentId) -> Result<&Tournament, StoreError> {
        self.tournaments
            .iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Tournament,
                id,
            })
    }

    fn tournament_mut(&mut self, id: TournamentId) -> Result<&mut Tournament, StoreError> {
        self.tournaments
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Tournament,
                id,
            })
    }

    pub fn add_tournament(&mut self, new: NewTournament) -> Result<Tournament, StoreError> {
        non_empty(&new.name, "name")?;
        let tournament = Tournament::new(new.name.trim(), new.is_group_based);
        self.tournaments.push(tournament.clone());
        Ok(tournament)
    }

    /// Remove a tournament and its groups. Its matches stay on record.
    pub fn remove_tournament(&mut self, id: TournamentId) -> Result<Tournament, StoreError> {
        let idx = self
            .tournaments
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Tournament,
                id,
            })?;
        let tournament = self.tournaments.remove(idx);
        self.groups.retain(|g| g.tournament_id != id);
        Ok(tournament)
    }

    // --- groups ---

    pub fn group(&self, id: GroupId) -> Result<&Group, StoreError> {
        self.groups
            .iter()
            .find(|g| g.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Group,
                id,
            })
    }

    /// Groups of one tournament, in the tournament's `group_ids` order.
    pub fn tournament_groups(&self, id: TournamentId) -> Result<Vec<&Group>, StoreError> {
        let tournament = self.tournament(id)?;
        Ok(tournament
            .group_ids
            .iter()
            .filter_map(|gid| self.groups.iter().find(|g| g.id == *gid))
            .collect())
    }

    /// Add an empty group to a tournament that has fewer than `max_groups` groups.
    pub fn add_group(
        &mut self,
        tournament_id: TournamentId,
        name: &str,
        max_groups: usize,
    ) -> Result<Group, StoreError> {
        non_empty(name, "name")?;
        let tournament = self.tournament_mut(tournament_id)?;
        if tournament.group_ids.len() >= max_groups {
            return Err(StoreError::TooManyGroups { max: max_groups });
        }
        let group = Group::new(name.trim(), tournament_id);
        tournament.group_ids.push(group.id);
        self.groups.push(group.clone());
        Ok(group)
    }

    /// Replace a group's members. Every id must be a known player; repeats are dropped.
    pub fn set_group_players(
        &mut self,
        group_id: GroupId,
        player_ids: &[PlayerId],
    ) -> Result<Group, StoreError> {
        if let Some(&id) = player_ids
            .iter()
            .find(|id| !self.players.iter().any(|p| p.id == **id))
        {
            return Err(StoreError::UnknownReference {
                kind: EntityKind::Player,
                id,
            });
        }
        let mut seen = HashSet::new();
        let members: Vec<PlayerId> = player_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        let group = self
            .groups
            .iter_mut()
            .find(|g| g.id == group_id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Group,
                id: group_id,
            })?;
        group.player_ids = members;
        Ok(group.clone())
    }

    // --- matches ---

    /// Record a match between two existing, different players of an existing tournament.
    pub fn add_match(&mut self, new: NewMatch) -> Result<GameMatch, StoreError> {
        if new.player1_id == new.player2_id {
            return Err(StoreError::SamePlayerTwice);
        }
        if new.score1 > MAX_SCORE || new.score2 > MAX_SCORE {
            return Err(StoreError::ScoreOutOfRange { max: MAX_SCORE });
        }
        for id in [new.player1_id, new.player2_id] {
            if !self.players.iter().any(|p| p.id == id) {
                return Err(StoreError::UnknownReference {
                    kind: EntityKind::Player,
                    id,
                });
            }
        }
        let tournament = self
            .tournaments
            .iter()
            .find(|t| t.id == new.tournament_id)
            .ok_or(StoreError::UnknownReference {
                kind: EntityKind::Tournament,
                id: new.tournament_id,
            })?;
        if let Some(group_id) = new.group_id {
            if !tournament.has_group(group_id) {
                return Err(StoreError::GroupNotInTournament {
                    group_id,
                    tournament_id: tournament.id,
                });
            }
        }
        let m = new.into_match();
        self.matches.push(m.clone());
        Ok(m)
    }

    pub fn remove_match(&mut self, id: MatchId) -> Result<GameMatch, StoreError> {
        let idx = self
            .matches
            .iter()
            .position(|m| m.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Match,
                id,
            })?;
        Ok(self.matches.remove(idx))
    }

    /// Matches narrowed by tournament and/or group; `None` for both returns all matches.
    pub fn matches_for(
        &self,
        tournament_id: Option<TournamentId>,
        group_id: Option<GroupId>,
    ) -> Vec<&GameMatch> {
        self.matches
            .iter()
            .filter(|m| tournament_id.map_or(true, |t| m.tournament_id == t))
            .filter(|m| group_id.map_or(true, |g| m.group_id == Some(g)))
            .collect()
    }

    // --- seeding ---

    /// Create a group-based tournament from a roster, dealing players into groups by seed.
    ///
    /// Roster entries matching an existing player's first and last name reuse that player.
    pub fn seed_tournament(
        &mut self,
        name: &str,
        roster: Vec<NewPlayer>,
        group_count: usize,
        max_groups: usize,
    ) -> Result<SeededTournament, StoreError> {
        non_empty(name, "name")?;
        if max_groups == 0 {
            return Err(StoreError::TooManyGroups { max: max_groups });
        }
        if roster.is_empty() {
            return Err(StoreError::EmptyRoster);
        }
        for entry in &roster {
            non_empty(&entry.first_name, "firstName")?;
            non_empty(&entry.last_name, "lastName")?;
            non_empty(&entry.location, "location")?;
        }

        let mut entrants: Vec<Player> = Vec::with_capacity(roster.len());
        let mut players_created = 0;
        for entry in roster {
            let existing = self
                .players
                .iter()
                .find(|p| p.same_name(&entry.first_name, &entry.last_name))
                .cloned();
            let player = match existing {
                Some(p) => p,
                None => {
                    players_created += 1;
                    self.add_player(entry)?
                }
            };
            if !entrants.iter().any(|p| p.id == player.id) {
                entrants.push(player);
            }
        }

        let draft = snake_draft(&entrants, group_count.min(max_groups));
        let mut tournament = Tournament::new(name.trim(), true);
        let mut groups = Vec::with_capacity(draft.len());
        for (i, members) in draft.into_iter().enumerate() {
            let mut group = Group::new(group_name(i), tournament.id);
            group.player_ids = members;
            tournament.group_ids.push(group.id);
            groups.push(group);
        }

        self.tournaments.push(tournament.clone());
        self.groups.extend(groups.iter().cloned());
        log::info!(
            "Seeded tournament '{}' with {} players in {} groups",
            tournament.name,
            entrants.len(),
            groups.len()
        );
        Ok(SeededTournament {
            tournament,
            groups,
            players_created,
        })
    }
}
