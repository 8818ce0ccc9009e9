//! CSV roster import: `pot,name` rows into pots.

use crate::models::{Pot, TournamentError, TournamentShape};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RosterRow {
    pot: u32,
    name: String,
}

/// Parse a CSV roster with a `pot,name` header into pots 1..=pot_count (in pot order).
///
/// Names keep their file order within a pot; blank names are dropped. A pot count outside
/// 1..=`TournamentShape::MAX_POTS` is `InvalidShape`.
pub fn parse_csv(input: &str, pot_count: u32) -> Result<Vec<Pot>, TournamentError> {
    if pot_count == 0 || pot_count > TournamentShape::MAX_POTS {
        return Err(TournamentError::InvalidShape {
            pot_count,
            group_count: 0,
        });
    }
    let mut names: Vec<Vec<String>> = vec![Vec::new(); pot_count as usize];
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());
    for row in reader.deserialize::<RosterRow>() {
        let row = row.map_err(|e| TournamentError::InvalidRoster(e.to_string()))?;
        if row.pot == 0 || row.pot > pot_count {
            return Err(TournamentError::PotOutOfRange {
                pot: row.pot,
                pot_count,
            });
        }
        names[row.pot as usize - 1].push(row.name);
    }
    Ok(names
        .into_iter()
        .zip(1..)
        .map(|(names, index)| Pot::new(index, names))
        .collect())
}
