//! CSV export of a ranking table.

use crate::logic::PlayerRanking;

const HEADER: [&str; 10] = [
    "rank",
    "firstName",
    "lastName",
    "location",
    "wins",
    "losses",
    "winLossRatio",
    "setsWon",
    "setsLost",
    "setsRatio",
];

/// One row per ranking in the given order, ranks starting at 1. Ratios use 3 decimals.
pub fn rankings_csv(rankings: &[PlayerRanking]) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(HEADER)?;
    for (i, r) in rankings.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            r.player.first_name.clone(),
            r.player.last_name.clone(),
            r.player.location.clone(),
            r.wins.to_string(),
            r.losses.to_string(),
            format!("{:.3}", r.win_loss_ratio),
            r.sets_won.to_string(),
            r.sets_lost.to_string(),
            format!("{:.3}", r.sets_ratio),
        ])?;
    }
    wtr.into_inner().map_err(|e| e.into_error().into())
}
