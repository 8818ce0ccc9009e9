//! Canonical player pairs and recorded match results.

use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Two distinct players, stored with the lexicographically smaller name first.
///
/// Field order matters: the derived `Ord` compares `first` then `second`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct PlayerPair {
    first: String,
    second: String,
}

impl PlayerPair {
    /// Build the canonical pair. Also returns whether the input order was swapped.
    pub fn new(
        player_1: impl Into<String>,
        player_2: impl Into<String>,
    ) -> Result<(Self, bool), TournamentError> {
        let (player_1, player_2) = (player_1.into(), player_2.into());
        match player_1.cmp(&player_2) {
            Ordering::Equal => Err(TournamentError::SelfPairing(player_1)),
            Ordering::Less => Ok((
                Self {
                    first: player_1,
                    second: player_2,
                },
                false,
            )),
            Ordering::Greater => Ok((
                Self {
                    first: player_2,
                    second: player_1,
                },
                true,
            )),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

/// Result of one group match, keyed by (group, pair). `score_first` belongs to `pair.first()`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub group: u32,
    pub pair: PlayerPair,
    pub score_first: u32,
    pub score_second: u32,
}

impl MatchResult {
    /// Scores as seen from `name`'s side: (own, opponent). None if `name` did not play.
    pub fn scores_for(&self, name: &str) -> Option<(u32, u32)> {
        if self.pair.first() == name {
            Some((self.score_first, self.score_second))
        } else if self.pair.second() == name {
            Some((self.score_second, self.score_first))
        } else {
            None
        }
    }
}
