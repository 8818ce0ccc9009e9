//! Player, Pot, and Assignment data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player.
pub type PlayerId = Uuid;

/// A seeding tier: names submitted together and spread across the groups.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pot {
    /// 1-based pot index.
    pub index: u32,
    pub names: Vec<String>,
}

impl Pot {
    /// Names are trimmed and empty ones dropped. Duplicates are kept.
    pub fn new<I, S>(index: u32, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            index,
            names: names
                .into_iter()
                .map(|n| n.as_ref().trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    /// One name per line, as typed into a pot text box.
    pub fn from_lines(index: u32, raw: &str) -> Self {
        Self::new(index, raw.lines())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Output of the draw: which group a player from which pot landed in.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub name: String,
    pub pot: u32,
    pub group: u32,
}

/// A drawn player in the tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub pot: u32,
    pub group: u32,
}

impl Player {
    /// Create a player with the given name, pot and group.
    pub fn new(name: impl Into<String>, pot: u32, group: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            pot,
            group,
        }
    }
}

impl From<Assignment> for Player {
    fn from(a: Assignment) -> Self {
        Player::new(a.name, a.pot, a.group)
    }
}
