//! Rankings: per-player win/loss and set aggregates, ordered by wins then set ratio.

use crate::models::{GameMatch, GroupId, Player, PlayerId, TournamentId};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Errors from computing a ranking.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RankingError {
    /// A qualifying match names a player that is not in the player set.
    #[error("Player with ID {0} not found")]
    UnknownPlayer(PlayerId),
}

/// One row of a ranking table.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRanking {
    pub player: Player,
    pub wins: u32,
    pub losses: u32,
    /// wins / (wins + losses), 0 without decided matches.
    pub win_loss_ratio: f64,
    pub sets_won: u64,
    pub sets_lost: u64,
    /// sets_won / (sets_won + sets_lost), 0 without sets played.
    pub sets_ratio: f64,
}

/// Running totals for one player.
#[derive(Clone, Copy, Debug, Default)]
struct Tally {
    wins: u32,
    losses: u32,
    sets_won: u64,
    sets_lost: u64,
}

impl Tally {
    /// Credit one side of a match: `scored` sets for, `conceded` against.
    /// `won` is None for a tie.
    fn record(&mut self, scored: u32, conceded: u32, won: Option<bool>) {
        match won {
            Some(true) => self.wins += 1,
            Some(false) => self.losses += 1,
            None => {}
        }
        self.sets_won += u64::from(scored);
        self.sets_lost += u64::from(conceded);
    }

    fn into_ranking(self, player: &Player) -> PlayerRanking {
        PlayerRanking {
            player: player.clone(),
            wins: self.wins,
            losses: self.losses,
            win_loss_ratio: ratio(self.wins.into(), self.losses.into()),
            sets_won: self.sets_won,
            sets_lost: self.sets_lost,
            sets_ratio: ratio(self.sets_won, self.sets_lost),
        }
    }
}

fn ratio(part: u64, rest: u64) -> f64 {
    let total = part.saturating_add(rest);
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// Apply both sides of a match. Caller guarantees both players have a tally.
fn apply(stats: &mut HashMap<PlayerId, Tally>, m: &GameMatch) {
    let winner = m.winner();
    let sides = [
        (m.player1_id, m.score1, m.score2),
        (m.player2_id, m.score2, m.score1),
    ];
    for (id, scored, conceded) in sides {
        if let Some(t) = stats.get_mut(&id) {
            t.record(scored, conceded, winner.map(|w| w == id));
        }
    }
}

/// Wins descending, then set ratio descending. `sort_by` is stable, so full ties keep input order.
fn sort_rankings(rankings: &mut [PlayerRanking]) {
    rankings.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.sets_ratio.total_cmp(&a.sets_ratio))
    });
}

/// Ranking over every match. Every player appears, including those without matches.
///
/// Matches naming a player outside `players` (e.g. a deleted player) are skipped entirely.
pub fn rank_overall(players: &[Player], matches: &[GameMatch]) -> Vec<PlayerRanking> {
    let mut stats: HashMap<PlayerId, Tally> =
        players.iter().map(|p| (p.id, Tally::default())).collect();

    for m in matches {
        if !stats.contains_key(&m.player1_id) || !stats.contains_key(&m.player2_id) {
            log::debug!("Skipping match {} with unknown player", m.id);
            continue;
        }
        apply(&mut stats, m);
    }

    let mut rankings: Vec<PlayerRanking> = players
        .iter()
        .map(|p| stats[&p.id].into_ranking(p))
        .collect();
    sort_rankings(&mut rankings);
    rankings
}

/// Ranking over the matches of one tournament, optionally narrowed to one group.
///
/// Only players who played a qualifying match are listed. A qualifying match naming a
/// player outside `players` fails the whole ranking with [`RankingError::UnknownPlayer`].
/// `matches` may be the full set or already filtered; the result is the same.
pub fn rank_filtered(
    players: &[Player],
    matches: &[GameMatch],
    tournament_id: TournamentId,
    group_id: Option<GroupId>,
) -> Result<Vec<PlayerRanking>, RankingError> {
    let known: HashSet<PlayerId> = players.iter().map(|p| p.id).collect();
    let mut stats: HashMap<PlayerId, Tally> = HashMap::new();

    for m in matches.iter().filter(|m| m.qualifies(tournament_id, group_id)) {
        for id in [m.player1_id, m.player2_id] {
            if !known.contains(&id) {
                return Err(RankingError::UnknownPlayer(id));
            }
            stats.entry(id).or_default();
        }
        apply(&mut stats, m);
    }

    let mut rankings: Vec<PlayerRanking> = players
        .iter()
        .filter_map(|p| stats.get(&p.id).map(|t| t.into_ranking(p)))
        .collect();
    sort_rankings(&mut rankings);
    Ok(rankings)
}
