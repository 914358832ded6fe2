//! Tennis tournament tracker: library with models, rankings, storage and the REST API.

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod logic;
pub mod models;
pub mod roster;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use error::ApiError;
pub use logic::{group_name, rank_filtered, rank_overall, snake_draft, PlayerRanking, RankingError};
pub use models::{
    GameMatch, Group, GroupId, MatchId, NewMatch, NewPlayer, NewTournament, Player, PlayerId,
    Tournament, TournamentId,
};
pub use roster::{parse_roster, RosterError};
pub use store::{Database, EntityKind, SeededTournament, StoreError};
