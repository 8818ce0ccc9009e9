//! Tournament, its shape, and the crate-wide error type.

use crate::models::player::Player;
use crate::models::result::MatchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Pot count or group count is zero or above its limit.
    InvalidShape { pot_count: u32, group_count: u32 },
    /// A player was paired with themselves.
    SelfPairing(String),
    /// A paired player is not on the stated group's roster.
    PlayerNotInGroup { name: String, group: u32 },
    /// A score for a pairing is missing, not an integer, or above the score limit.
    MalformedScore {
        player_1: String,
        player_2: String,
        score: String,
    },
    /// No tournament with this id.
    UnknownTournament(TournamentId),
    /// Group number outside 1..=group_count.
    UnknownGroup(u32),
    /// A name appears more than once in one draw (names are unique, case-insensitive).
    DuplicatePlayerName(String),
    /// The CSV roster could not be read.
    InvalidRoster(String),
    /// A roster row names a pot outside 1..=pot_count.
    PotOutOfRange { pot: u32, pot_count: u32 },
}

impl TournamentError {
    /// Stable tag for API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            TournamentError::InvalidShape { .. } => "invalid_shape",
            TournamentError::SelfPairing(_) | TournamentError::PlayerNotInGroup { .. } => {
                "invalid_pairing"
            }
            TournamentError::MalformedScore { .. } => "malformed_score",
            TournamentError::UnknownTournament(_) => "unknown_tournament",
            TournamentError::UnknownGroup(_) => "unknown_group",
            TournamentError::DuplicatePlayerName(_) => "duplicate_player_name",
            TournamentError::InvalidRoster(_) | TournamentError::PotOutOfRange { .. } => {
                "invalid_roster"
            }
        }
    }

    /// True for lookup failures the caller should surface as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TournamentError::UnknownTournament(_) | TournamentError::UnknownGroup(_)
        )
    }
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidShape {
                pot_count,
                group_count,
            } => write!(
                f,
                "Need 1..={} pots and 1..={} groups (got {} pots, {} groups)",
                TournamentShape::MAX_POTS,
                TournamentShape::MAX_GROUPS,
                pot_count,
                group_count
            ),
            TournamentError::SelfPairing(name) => {
                write!(f, "{} cannot play against themselves", name)
            }
            TournamentError::PlayerNotInGroup { name, group } => {
                write!(f, "{} is not a member of group {}", name, group)
            }
            TournamentError::MalformedScore {
                player_1,
                player_2,
                score,
            } => write!(
                f,
                "Invalid score {:?} for {} vs {}",
                score, player_1, player_2
            ),
            TournamentError::UnknownTournament(_) => write!(f, "No tournament"),
            TournamentError::UnknownGroup(group) => write!(f, "No group {}", group),
            TournamentError::DuplicatePlayerName(name) => {
                write!(f, "A player named {} already exists", name)
            }
            TournamentError::InvalidRoster(msg) => write!(f, "Invalid roster: {}", msg),
            TournamentError::PotOutOfRange { pot, pot_count } => {
                write!(f, "Pot {} is outside 1..={}", pot, pot_count)
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Pot and group counts, fixed at creation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentShape {
    pub pot_count: u32,
    pub group_count: u32,
}

impl TournamentShape {
    /// Most pots a tournament may have.
    pub const MAX_POTS: u32 = 64;
    /// Most groups a tournament may have.
    pub const MAX_GROUPS: u32 = 256;

    /// Fails unless 1..=MAX_POTS pots and 1..=MAX_GROUPS groups.
    pub fn new(pot_count: u32, group_count: u32) -> Result<Self, TournamentError> {
        if !(1..=Self::MAX_POTS).contains(&pot_count)
            || !(1..=Self::MAX_GROUPS).contains(&group_count)
        {
            return Err(TournamentError::InvalidShape {
                pot_count,
                group_count,
            });
        }
        Ok(Self {
            pot_count,
            group_count,
        })
    }

    /// Error unless `group` is in 1..=group_count.
    pub fn check_group(&self, group: u32) -> Result<(), TournamentError> {
        if group == 0 || group > self.group_count {
            return Err(TournamentError::UnknownGroup(group));
        }
        Ok(())
    }
}

/// One group of the draw, players ordered by pot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupDraw {
    pub group: u32,
    pub players: Vec<Player>,
}

/// A tournament: its fixed shape, the drawn players, and recorded results.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub shape: TournamentShape,
    pub created_at: DateTime<Utc>,
    /// None until the first draw.
    pub drawn_at: Option<DateTime<Utc>>,
    /// Drawn players, ordered by group then pot.
    pub players: Vec<Player>,
    /// Canonical results across all groups.
    pub results: Vec<MatchResult>,
}

impl Tournament {
    /// Create a tournament with no players. Fails on a pot or group count out of range.
    pub fn new(
        name: impl Into<String>,
        pot_count: u32,
        group_count: u32,
    ) -> Result<Self, TournamentError> {
        let shape = TournamentShape::new(pot_count, group_count)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into().trim().to_string(),
            shape,
            created_at: Utc::now(),
            drawn_at: None,
            players: Vec::new(),
            results: Vec::new(),
        })
    }

    /// Replace the draw. Results are discarded since group membership changed.
    pub fn set_players(&mut self, mut players: Vec<Player>) {
        players.sort_by_key(|p| (p.group, p.pot));
        self.players = players;
        self.results.clear();
        self.drawn_at = Some(Utc::now());
    }

    /// Players of one group, ordered by pot.
    pub fn group_players(&self, group: u32) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.group == group)
    }

    /// Every group 1..=group_count, including empty ones.
    pub fn groups(&self) -> Vec<GroupDraw> {
        (1..=self.shape.group_count)
            .map(|group| GroupDraw {
                group,
                players: self.group_players(group).cloned().collect(),
            })
            .collect()
    }

    /// Insert or overwrite the result for the same group and pair.
    pub fn upsert_result(&mut self, result: MatchResult) {
        match self
            .results
            .iter_mut()
            .find(|r| r.group == result.group && r.pair == result.pair)
        {
            Some(existing) => *existing = result,
            None => self.results.push(result),
        }
    }
}
