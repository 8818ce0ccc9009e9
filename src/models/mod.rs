//! Data structures for the group stage: tournaments, players, results, standings.

mod player;
mod result;
mod standings;
mod tournament;

pub use player::{Assignment, Player, PlayerId, Pot};
pub use result::{MatchResult, PlayerPair};
pub use standings::{StandingsRow, DRAW_POINTS, WIN_POINTS};
pub use tournament::{GroupDraw, Tournament, TournamentError, TournamentId, TournamentShape};
