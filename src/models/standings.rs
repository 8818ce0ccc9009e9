//! Derived standings table rows.

use serde::{Deserialize, Serialize};

/// Points for a win.
pub const WIN_POINTS: u32 = 3;
/// Points for a draw.
pub const DRAW_POINTS: u32 = 1;

/// One player's aggregated record within a group. Never persisted.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// 1-based rank after sorting.
    pub position: usize,
    pub name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_scored: u64,
    pub goals_conceded: u64,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingsRow {
    /// All-zero row for a player with no recorded matches.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Apply one match from this player's side. Counters saturate instead of overflowing.
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.played = self.played.saturating_add(1);
        self.goals_scored = self.goals_scored.saturating_add(u64::from(scored));
        self.goals_conceded = self.goals_conceded.saturating_add(u64::from(conceded));
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.wins = self.wins.saturating_add(1);
                self.points = self.points.saturating_add(WIN_POINTS);
            }
            std::cmp::Ordering::Equal => {
                self.draws = self.draws.saturating_add(1);
                self.points = self.points.saturating_add(DRAW_POINTS);
            }
            std::cmp::Ordering::Less => self.losses = self.losses.saturating_add(1),
        }
    }

    /// Goals scored minus goals conceded, clamped to the `i64` range.
    pub fn compute_goal_difference(&mut self) {
        let scored = i64::try_from(self.goals_scored).unwrap_or(i64::MAX);
        let conceded = i64::try_from(self.goals_conceded).unwrap_or(i64::MAX);
        self.goal_difference = scored.saturating_sub(conceded);
    }
}
