//! Integration tests for standings: aggregation, ordering, and zero-match rows.

use group_draw_web::{
    canonicalize, compute, group_standings, record_result, MatchResult, MemoryStore, Player,
    StandingsRow, Tournament, TournamentStore,
};

fn roster(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn result(p1: &str, p2: &str, s1: u32, s2: u32) -> MatchResult {
    canonicalize(1, p1, p2, s1, s2).unwrap()
}

fn row(rows: &[StandingsRow], name: &str) -> StandingsRow {
    rows.iter().find(|r| r.name == name).unwrap().clone()
}

#[test]
fn three_player_group_table() {
    let results = vec![
        result("Ann", "Bob", 2, 1),
        result("Bob", "Cy", 0, 0),
        result("Cy", "Ann", 1, 3),
    ];
    let rows = compute(&roster(&["Ann", "Bob", "Cy"]), &results);

    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bob", "Cy"]);

    let ann = row(&rows, "Ann");
    assert_eq!(
        (ann.played, ann.wins, ann.draws, ann.losses),
        (2, 2, 0, 0)
    );
    assert_eq!(
        (ann.goals_scored, ann.goals_conceded, ann.goal_difference, ann.points),
        (5, 2, 3, 6)
    );
    assert_eq!(ann.position, 1);

    let bob = row(&rows, "Bob");
    assert_eq!((bob.played, bob.wins, bob.draws, bob.losses), (2, 0, 1, 1));
    assert_eq!(
        (bob.goals_scored, bob.goals_conceded, bob.goal_difference, bob.points),
        (1, 2, -1, 1)
    );

    let cy = row(&rows, "Cy");
    assert_eq!((cy.played, cy.wins, cy.draws, cy.losses), (2, 0, 1, 1));
    assert_eq!(
        (cy.goals_scored, cy.goals_conceded, cy.goal_difference, cy.points),
        (1, 3, -2, 1)
    );
    assert_eq!(cy.position, 3);
}

#[test]
fn huge_scores_accumulate_without_overflow() {
    let results = vec![
        result("Ann", "Bob", u32::MAX, 0),
        result("Ann", "Cy", u32::MAX, u32::MAX),
        result("Bob", "Cy", 1, u32::MAX),
    ];
    let rows = compute(&roster(&["Ann", "Bob", "Cy"]), &results);

    let ann = row(&rows, "Ann");
    assert_eq!(ann.goals_scored, 2 * u64::from(u32::MAX));
    assert_eq!(ann.goals_conceded, u64::from(u32::MAX));
    assert_eq!(ann.goal_difference, i64::from(u32::MAX));
    assert_eq!(ann.points, 4);

    let cy = row(&rows, "Cy");
    assert_eq!(cy.goals_scored, 2 * u64::from(u32::MAX));
    assert_eq!(cy.goals_conceded, u64::from(u32::MAX) + 1);
    assert_eq!(cy.goal_difference, i64::from(u32::MAX) - 1);

    let bob = row(&rows, "Bob");
    assert_eq!(bob.goal_difference, 1 - 2 * i64::from(u32::MAX));
    assert_eq!(rows[0].name, "Ann");
}

#[test]
fn players_without_matches_get_zero_rows_last() {
    let rows = compute(
        &roster(&["Zed", "Ann", "Bob"]),
        &[result("Ann", "Bob", 0, 0)],
    );
    let zed = rows.last().unwrap();
    assert_eq!(zed.name, "Zed");
    assert_eq!(
        *zed,
        StandingsRow {
            position: 3,
            ..StandingsRow::new("Zed")
        }
    );
}

#[test]
fn goals_scored_breaks_goal_difference_ties() {
    // Ann and Bob both have 3 points and GD +1; Bob scored more.
    let results = vec![result("Ann", "Cy", 1, 0), result("Bob", "Cy", 3, 2)];
    let rows = compute(&roster(&["Ann", "Bob", "Cy"]), &results);
    assert_eq!(rows[0].name, "Bob");
    assert_eq!(rows[1].name, "Ann");
    assert_eq!(rows[0].goal_difference, rows[1].goal_difference);
}

#[test]
fn full_ties_fall_back_to_name() {
    let rows = compute(
        &roster(&["Cy", "Bob", "Ann"]),
        &[result("Cy", "Bob", 1, 1)],
    );
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Cy", "Ann"]);
    let positions: Vec<usize> = rows.iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
}

#[test]
fn results_for_unknown_players_are_ignored() {
    let rows = compute(&roster(&["Ann"]), &[result("Ann", "Ghost", 5, 0)]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].played, 0);
}

#[test]
fn compute_is_repeatable() {
    let results = vec![result("Ann", "Bob", 2, 2), result("Bob", "Cy", 4, 0)];
    let names = roster(&["Ann", "Bob", "Cy"]);
    let first = serde_json::to_string(&compute(&names, &results)).unwrap();
    let second = serde_json::to_string(&compute(&names, &results)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn group_standings_reads_from_store() {
    let mut store = MemoryStore::new();
    let id = store.insert(Tournament::new("Cup", 1, 2).unwrap());
    store
        .replace_players(
            id,
            vec![
                Player::new("Ann", 1, 1),
                Player::new("Bob", 1, 1),
                Player::new("Cy", 1, 2),
            ],
        )
        .unwrap();
    record_result(&mut store, id, 1, "Bob", "Ann", 2, 0).unwrap();

    let rows = group_standings(&store, id, 1).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Bob");
    assert_eq!(rows[0].points, 3);

    let rows = group_standings(&store, id, 2).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].played, 0);
    assert!(group_standings(&store, id, 3).unwrap_err().is_not_found());
}
