//! Group-stage business logic: pot draw, results, standings, roster import.

mod draw;
mod results;
mod roster;
mod standings;

pub use draw::{assign, draw_pot, draw_tournament, ensure_unique_names, GroupTotals};
pub use results::{
    canonicalize, group_fixtures, lookup_result, pairings, record_result, submit_results, Fixture,
    RejectedScore, ScoreInput, SubmissionReport, MAX_SCORE,
};
pub use roster::parse_csv;
pub use standings::{compute, group_standings};
