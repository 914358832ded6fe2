//! CSV roster import: `firstName,lastName,location,ranking` per row.

use crate::models::NewPlayer;
use std::io::Read;

/// Errors from reading a roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Roster line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Roster is not valid CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Parse a roster. Headers are required; surrounding whitespace is ignored.
pub fn parse_roster<R: Read>(reader: R) -> Result<Vec<NewPlayer>, RosterError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut players = Vec::new();
    for row in rdr.deserialize::<NewPlayer>() {
        match row {
            Ok(p) => players.push(p),
            Err(source) => {
                let line = source.position().map_or(0, |pos| pos.line());
                return Err(RosterError::Row { line, source });
            }
        }
    }
    Ok(players)
}
