//! Integration tests for the in-memory store: lookups, removal, and the inactivity sweep.

use group_draw_web::{MemoryStore, Tournament, TournamentError, TournamentStore};
use std::time::Duration;

#[test]
fn insert_get_and_remove() {
    let mut store = MemoryStore::new();
    assert!(store.is_empty());
    let id = store.insert(Tournament::new("Cup", 2, 4).unwrap());
    assert_eq!(store.len(), 1);
    assert_eq!(store.shape(id).unwrap().group_count, 4);
    assert!(store.touch(id).is_ok());

    let removed = store.remove(id).unwrap();
    assert_eq!(removed.id, id);
    assert!(store.is_empty());
    assert!(matches!(
        store.get(id),
        Err(TournamentError::UnknownTournament(_))
    ));
    assert!(store.touch(id).unwrap_err().is_not_found());
}

#[test]
fn sweep_purges_only_idle_tournaments() {
    let mut store = MemoryStore::new();
    store.insert(Tournament::new("Cup", 1, 1).unwrap());
    store.insert(Tournament::new("Plate", 1, 1).unwrap());

    assert_eq!(store.purge_inactive(Duration::from_secs(3600)), 0);
    assert_eq!(store.len(), 2);

    assert_eq!(store.purge_inactive(Duration::ZERO), 2);
    assert!(store.is_empty());
}
