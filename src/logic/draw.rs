//! Pot draw: spread each pot's players over the groups, keeping group sizes balanced.

use crate::models::{Assignment, Player, Pot, TournamentError, TournamentId, TournamentShape};
use crate::store::TournamentStore;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Running number of players per group (index 0 is group 1), threaded through the pots.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GroupTotals(Vec<usize>);

impl GroupTotals {
    pub fn new(group_count: u32) -> Self {
        Self(vec![0; group_count as usize])
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Largest group minus smallest group.
    pub fn spread(&self) -> usize {
        let max = self.0.iter().max().copied().unwrap_or(0);
        let min = self.0.iter().min().copied().unwrap_or(0);
        max - min
    }

    /// Group indices by ascending running total; ties keep group order.
    fn fill_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.0.len()).collect();
        order.sort_by_key(|&g| self.0[g]);
        order
    }
}

/// Assign every pot's players to groups 1..=group_count.
///
/// Pots are processed in the given order. For each pot:
/// 1. Shuffle the names with `rng`.
/// 2. Quota q = N / G, remainder r = N % G.
/// 3. Order the groups by running total (ascending, ties by group number).
/// 4. The first r groups in that order take q + 1 players, the rest take q.
/// 5. Hand out the shuffled names in that order, then update the running totals.
pub fn assign<R: Rng + ?Sized>(
    pots: &[Pot],
    group_count: u32,
    rng: &mut R,
) -> Result<Vec<Assignment>, TournamentError> {
    if group_count == 0 || group_count > TournamentShape::MAX_GROUPS {
        return Err(TournamentError::InvalidShape {
            pot_count: pots.len() as u32,
            group_count,
        });
    }
    let (assignments, totals) = pots.iter().fold(
        (Vec::new(), GroupTotals::new(group_count)),
        |(mut out, totals), pot| {
            let (drawn, totals) = draw_pot(pot, totals, rng);
            out.extend(drawn);
            (out, totals)
        },
    );
    log::debug!(
        "Draw finished, group totals {:?} (spread {})",
        totals.as_slice(),
        totals.spread()
    );
    Ok(assignments)
}

/// Draw a single pot against the running totals. Returns the pot's assignments and the
/// updated totals.
pub fn draw_pot<R: Rng + ?Sized>(
    pot: &Pot,
    mut totals: GroupTotals,
    rng: &mut R,
) -> (Vec<Assignment>, GroupTotals) {
    let groups = totals.0.len();
    if pot.is_empty() || groups == 0 {
        return (Vec::new(), totals);
    }

    let mut names = pot.names.clone();
    names.shuffle(rng);

    let quota = names.len() / groups;
    let remainder = names.len() % groups;

    let mut names = names.into_iter();
    let mut drawn = Vec::with_capacity(pot.len());
    for (rank, g) in totals.fill_order().into_iter().enumerate() {
        let take = if rank < remainder { quota + 1 } else { quota };
        for name in names.by_ref().take(take) {
            drawn.push(Assignment {
                name,
                pot: pot.index,
                group: g as u32 + 1,
            });
        }
        totals.0[g] += take;
    }
    (drawn, totals)
}

/// Reject a submission where any name repeats (case-insensitive).
pub fn ensure_unique_names(pots: &[Pot]) -> Result<(), TournamentError> {
    let mut seen = HashSet::new();
    for name in pots.iter().flat_map(|p| p.names.iter()) {
        if !seen.insert(name.to_lowercase()) {
            return Err(TournamentError::DuplicatePlayerName(name.clone()));
        }
    }
    Ok(())
}

/// Draw a tournament: validate names, assign groups, and replace the stored players.
///
/// Returns the new players. Previously recorded results are dropped by the store.
pub fn draw_tournament<S, R>(
    store: &mut S,
    id: TournamentId,
    pots: &[Pot],
    rng: &mut R,
) -> Result<Vec<Player>, TournamentError>
where
    S: TournamentStore + ?Sized,
    R: Rng + ?Sized,
{
    let shape: TournamentShape = store.shape(id)?;
    ensure_unique_names(pots)?;
    let players: Vec<Player> = assign(pots, shape.group_count, rng)?
        .into_iter()
        .map(Player::from)
        .collect();
    log::info!(
        "Drew {} player(s) from {} pot(s) into {} group(s) for tournament {}",
        players.len(),
        pots.len(),
        shape.group_count,
        id
    );
    store.replace_players(id, players.clone())?;
    Ok(players)
}
