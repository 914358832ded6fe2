//! Data structures for the tennis tracker: players, tournaments, groups, matches.

mod game;
mod player;
mod tournament;

pub use game::{GameMatch, MatchId, NewMatch};
pub use player::{NewPlayer, Player, PlayerId};
pub use tournament::{Group, GroupId, NewTournament, Tournament, TournamentId};
