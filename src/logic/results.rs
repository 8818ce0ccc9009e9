//! Match results: canonical pair identity, upsert/lookup, fixtures and batch submission.

use crate::models::{MatchResult, PlayerPair, TournamentError, TournamentId};
use crate::store::TournamentStore;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Order a result so the lexicographically smaller name comes first, swapping scores along.
pub fn canonicalize(
    group: u32,
    player_1: &str,
    player_2: &str,
    score_1: u32,
    score_2: u32,
) -> Result<MatchResult, TournamentError> {
    let (pair, swapped) = PlayerPair::new(player_1, player_2)?;
    let (score_first, score_second) = if swapped {
        (score_2, score_1)
    } else {
        (score_1, score_2)
    };
    Ok(MatchResult {
        group,
        pair,
        score_first,
        score_second,
    })
}

/// Every unordered pair of the roster, in roster order. Each player meets each other once.
pub fn pairings(roster: &[String]) -> Vec<(String, String)> {
    roster
        .iter()
        .tuple_combinations()
        .map(|(a, b)| (a.clone(), b.clone()))
        .collect()
}

/// Record (or overwrite) one result. Both players must be on the group's roster.
pub fn record_result<S: TournamentStore + ?Sized>(
    store: &mut S,
    id: TournamentId,
    group: u32,
    player_1: &str,
    player_2: &str,
    score_1: u32,
    score_2: u32,
) -> Result<MatchResult, TournamentError> {
    let result = canonicalize(group, player_1, player_2, score_1, score_2)?;
    let roster = store.group_roster(id, group)?;
    for name in [player_1, player_2] {
        if !roster.iter().any(|n| n == name) {
            return Err(TournamentError::PlayerNotInGroup {
                name: name.to_string(),
                group,
            });
        }
    }
    store.upsert_result(id, result.clone())?;
    Ok(result)
}

/// Scores of a recorded match, oriented as (player_1, player_2). None if not played yet.
pub fn lookup_result<S: TournamentStore + ?Sized>(
    store: &S,
    id: TournamentId,
    group: u32,
    player_1: &str,
    player_2: &str,
) -> Result<Option<(u32, u32)>, TournamentError> {
    let (pair, _) = PlayerPair::new(player_1, player_2)?;
    Ok(store
        .group_results(id, group)?
        .iter()
        .find(|r| r.pair == pair)
        .and_then(|r| r.scores_for(player_1)))
}

/// A round-robin pairing with its score, if one has been recorded.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub player_1: String,
    pub player_2: String,
    pub score_1: Option<u32>,
    pub score_2: Option<u32>,
}

/// All pairings of a group, pre-filled with recorded scores.
pub fn group_fixtures<S: TournamentStore + ?Sized>(
    store: &S,
    id: TournamentId,
    group: u32,
) -> Result<Vec<Fixture>, TournamentError> {
    let roster = store.group_roster(id, group)?;
    let results = store.group_results(id, group)?;
    pairings(&roster)
        .into_iter()
        .map(|(player_1, player_2)| {
            let (pair, _) = PlayerPair::new(player_1.as_str(), player_2.as_str())?;
            let scores = results
                .iter()
                .find(|r| r.pair == pair)
                .and_then(|r| r.scores_for(&player_1));
            Ok(Fixture {
                score_1: scores.map(|s| s.0),
                score_2: scores.map(|s| s.1),
                player_1,
                player_2,
            })
        })
        .collect()
}

/// One submitted score line, as typed (scores may be blank or garbage).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub player_1: String,
    pub player_2: String,
    #[serde(default)]
    pub score_1: String,
    #[serde(default)]
    pub score_2: String,
}

/// A score line that was not recorded.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RejectedScore {
    pub player_1: String,
    pub player_2: String,
    pub kind: &'static str,
    pub error: String,
}

/// Outcome of a batch submission.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SubmissionReport {
    pub recorded: Vec<MatchResult>,
    /// Lines with both scores blank (not played yet).
    pub skipped: usize,
    pub rejected: Vec<RejectedScore>,
}

/// Largest score accepted from a submitted line.
pub const MAX_SCORE: u32 = 9_999;

fn parse_score(input: &ScoreInput, raw: &str) -> Result<u32, TournamentError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|&score| score <= MAX_SCORE)
        .ok_or_else(|| TournamentError::MalformedScore {
            player_1: input.player_1.clone(),
            player_2: input.player_2.clone(),
            score: raw.to_string(),
        })
}

/// Record a batch of score lines for one group, each independently.
///
/// A bad line is reported in `rejected` and does not stop the rest. Only an unknown
/// tournament or group fails the whole call.
pub fn submit_results<S: TournamentStore + ?Sized>(
    store: &mut S,
    id: TournamentId,
    group: u32,
    entries: &[ScoreInput],
) -> Result<SubmissionReport, TournamentError> {
    store.shape(id)?.check_group(group)?;
    let mut report = SubmissionReport::default();
    for entry in entries {
        if entry.score_1.trim().is_empty() && entry.score_2.trim().is_empty() {
            report.skipped += 1;
            continue;
        }
        let outcome = parse_score(entry, &entry.score_1)
            .and_then(|s1| parse_score(entry, &entry.score_2).map(|s2| (s1, s2)))
            .and_then(|(s1, s2)| {
                record_result(store, id, group, &entry.player_1, &entry.player_2, s1, s2)
            });
        match outcome {
            Ok(result) => report.recorded.push(result),
            Err(e) if e.is_not_found() => return Err(e),
            Err(e) => {
                log::warn!(
                    "Rejected score {} vs {} in group {}: {}",
                    entry.player_1,
                    entry.player_2,
                    group,
                    e
                );
                report.rejected.push(RejectedScore {
                    player_1: entry.player_1.clone(),
                    player_2: entry.player_2.clone(),
                    kind: e.kind(),
                    error: e.to_string(),
                });
            }
        }
    }
    log::info!(
        "Group {} of tournament {}: {} recorded, {} skipped, {} rejected",
        group,
        id,
        report.recorded.len(),
        report.skipped,
        report.rejected.len()
    );
    Ok(report)
}
