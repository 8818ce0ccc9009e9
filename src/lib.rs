//! Group-stage tournament web app: library with models, business logic and storage.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    assign, canonicalize, compute, draw_tournament, group_fixtures, group_standings,
    lookup_result, pairings, parse_csv, record_result, submit_results, Fixture, ScoreInput,
    SubmissionReport,
};
pub use models::{
    Assignment, GroupDraw, MatchResult, Player, PlayerId, PlayerPair, Pot, StandingsRow,
    Tournament, TournamentError, TournamentId, TournamentShape,
};
pub use store::{MemoryStore, TournamentStore};
