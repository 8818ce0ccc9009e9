//! Storage seam: the accessors the draw, results and standings logic need, plus an
//! in-memory implementation keyed by tournament id.

use crate::models::{
    MatchResult, Player, Tournament, TournamentError, TournamentId, TournamentShape,
};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Read/write access to tournaments by id and group number.
///
/// Each mutating call is atomic for the row(s) it touches. Callers hold exclusive access to
/// a tournament for the duration of one draw or one result submission.
pub trait TournamentStore {
    /// Pot and group counts of a tournament.
    fn shape(&self, id: TournamentId) -> Result<TournamentShape, TournamentError>;

    /// Replace every player of a tournament (and drop its results).
    fn replace_players(
        &mut self,
        id: TournamentId,
        players: Vec<Player>,
    ) -> Result<(), TournamentError>;

    /// Names of a group's players, in stored order.
    fn group_roster(&self, id: TournamentId, group: u32) -> Result<Vec<String>, TournamentError>;

    /// Recorded results of one group.
    fn group_results(
        &self,
        id: TournamentId,
        group: u32,
    ) -> Result<Vec<MatchResult>, TournamentError>;

    /// Insert or overwrite one canonical result. Last write wins.
    fn upsert_result(&mut self, id: TournamentId, result: MatchResult)
        -> Result<(), TournamentError>;
}

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory tournaments by id.
#[derive(Default)]
pub struct MemoryStore {
    tournaments: HashMap<TournamentId, TournamentEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }

    /// Store a tournament and return its id.
    pub fn insert(&mut self, tournament: Tournament) -> TournamentId {
        let id = tournament.id;
        self.tournaments.insert(
            id,
            TournamentEntry {
                tournament,
                last_activity: Instant::now(),
            },
        );
        id
    }

    pub fn get(&self, id: TournamentId) -> Result<&Tournament, TournamentError> {
        self.tournaments
            .get(&id)
            .map(|e| &e.tournament)
            .ok_or(TournamentError::UnknownTournament(id))
    }

    pub fn get_mut(&mut self, id: TournamentId) -> Result<&mut Tournament, TournamentError> {
        self.tournaments
            .get_mut(&id)
            .map(|e| &mut e.tournament)
            .ok_or(TournamentError::UnknownTournament(id))
    }

    /// Refresh a tournament's last activity time.
    pub fn touch(&mut self, id: TournamentId) -> Result<(), TournamentError> {
        let entry = self
            .tournaments
            .get_mut(&id)
            .ok_or(TournamentError::UnknownTournament(id))?;
        entry.last_activity = Instant::now();
        Ok(())
    }

    pub fn remove(&mut self, id: TournamentId) -> Result<Tournament, TournamentError> {
        self.tournaments
            .remove(&id)
            .map(|e| e.tournament)
            .ok_or(TournamentError::UnknownTournament(id))
    }

    /// Drop tournaments idle for at least `timeout`. Returns how many were removed.
    pub fn purge_inactive(&mut self, timeout: Duration) -> usize {
        let before = self.tournaments.len();
        self.tournaments
            .retain(|_, entry| entry.last_activity.elapsed() < timeout);
        before - self.tournaments.len()
    }

    fn group_of(&self, id: TournamentId, group: u32) -> Result<&Tournament, TournamentError> {
        let t = self.get(id)?;
        t.shape.check_group(group)?;
        Ok(t)
    }
}

impl TournamentStore for MemoryStore {
    fn shape(&self, id: TournamentId) -> Result<TournamentShape, TournamentError> {
        Ok(self.get(id)?.shape)
    }

    fn replace_players(
        &mut self,
        id: TournamentId,
        players: Vec<Player>,
    ) -> Result<(), TournamentError> {
        self.get_mut(id)?.set_players(players);
        Ok(())
    }

    fn group_roster(&self, id: TournamentId, group: u32) -> Result<Vec<String>, TournamentError> {
        Ok(self
            .group_of(id, group)?
            .group_players(group)
            .map(|p| p.name.clone())
            .collect())
    }

    fn group_results(
        &self,
        id: TournamentId,
        group: u32,
    ) -> Result<Vec<MatchResult>, TournamentError> {
        Ok(self
            .group_of(id, group)?
            .results
            .iter()
            .filter(|r| r.group == group)
            .cloned()
            .collect())
    }

    fn upsert_result(
        &mut self,
        id: TournamentId,
        result: MatchResult,
    ) -> Result<(), TournamentError> {
        let t = self.get_mut(id)?;
        t.shape.check_group(result.group)?;
        t.upsert_result(result);
        Ok(())
    }
}
