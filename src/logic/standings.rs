//! Group standings: aggregate results into a ranked table.

use crate::models::{MatchResult, StandingsRow, TournamentError, TournamentId};
use crate::store::TournamentStore;
use std::collections::HashMap;

/// Build the standings table for a roster from its results.
///
/// Every roster player gets a row, even without matches. Sorted by points, goal difference,
/// goals scored (all descending), then name ascending. Results naming a player outside the
/// roster are ignored.
pub fn compute(roster: &[String], results: &[MatchResult]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = roster.iter().map(StandingsRow::new).collect();
    let index: HashMap<&str, usize> = roster
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    for r in results {
        let (Some(&a), Some(&b)) = (index.get(r.pair.first()), index.get(r.pair.second())) else {
            log::warn!(
                "Ignoring result {} vs {}: player not in group {}",
                r.pair.first(),
                r.pair.second(),
                r.group
            );
            continue;
        };
        rows[a].record(r.score_first, r.score_second);
        rows[b].record(r.score_second, r.score_first);
    }

    for row in &mut rows {
        row.compute_goal_difference();
    }

    rows.sort_by(|x, y| {
        y.points
            .cmp(&x.points)
            .then(y.goal_difference.cmp(&x.goal_difference))
            .then(y.goals_scored.cmp(&x.goals_scored))
            .then_with(|| x.name.cmp(&y.name))
    });
    for (i, row) in rows.iter_mut().enumerate() {
        row.position = i + 1;
    }
    rows
}

/// Standings of one group, read fresh from the store.
pub fn group_standings<S: TournamentStore + ?Sized>(
    store: &S,
    id: TournamentId,
    group: u32,
) -> Result<Vec<StandingsRow>, TournamentError> {
    let roster = store.group_roster(id, group)?;
    let results = store.group_results(id, group)?;
    Ok(compute(&roster, &results))
}
