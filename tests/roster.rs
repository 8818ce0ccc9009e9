//! Integration tests for CSV roster import.

use group_draw_web::{parse_csv, TournamentError, TournamentShape};

#[test]
fn rows_are_grouped_into_pots_in_file_order() {
    let csv = "pot,name\n2, Cy \n1,Ann\n1,Bob\n2,\n";
    let pots = parse_csv(csv, 3).unwrap();
    assert_eq!(pots.len(), 3);
    assert_eq!(pots[0].index, 1);
    assert_eq!(pots[0].names, vec!["Ann", "Bob"]);
    assert_eq!(pots[1].names, vec!["Cy"]);
    assert!(pots[2].is_empty());
}

#[test]
fn pot_outside_shape_is_rejected() {
    assert_eq!(
        parse_csv("pot,name\n4,Ann\n", 3).unwrap_err(),
        TournamentError::PotOutOfRange { pot: 4, pot_count: 3 }
    );
    assert!(matches!(
        parse_csv("pot,name\n0,Ann\n", 3),
        Err(TournamentError::PotOutOfRange { pot: 0, .. })
    ));
}

#[test]
fn unreadable_rows_are_invalid_roster() {
    let err = parse_csv("pot,name\none,Ann\n", 2).unwrap_err();
    assert_eq!(err.kind(), "invalid_roster");
}

#[test]
fn pot_count_outside_limit_is_invalid_shape() {
    assert!(matches!(
        parse_csv("pot,name\n1,Ann\n", u32::MAX),
        Err(TournamentError::InvalidShape { pot_count: u32::MAX, .. })
    ));
    assert!(matches!(
        parse_csv("pot,name\n1,Ann\n", 0),
        Err(TournamentError::InvalidShape { pot_count: 0, .. })
    ));
    let pots = parse_csv("pot,name\n1,Ann\n", TournamentShape::MAX_POTS).unwrap();
    assert_eq!(pots.len(), TournamentShape::MAX_POTS as usize);
}
