mod common;

use std::collections::BTreeSet;

use common::{create_test_saved_set, reopen};
use dabble_core::{store::SAVED_CRAFTS_KEY, KeyValueStore, SessionBuilder, StoreOutcome};
use tempfile::TempDir;

#[test]
fn test_saved_set_survives_restart() {
    let (_temp_dir, db_path, mut saved) = create_test_saved_set();
    assert_eq!(saved.add(1), StoreOutcome::Changed);
    assert_eq!(saved.add(2), StoreOutcome::Changed);
    assert_eq!(saved.add(3), StoreOutcome::Changed);
    drop(saved);

    let mut saved = reopen(&db_path);
    assert_eq!(saved.remove(2), StoreOutcome::Changed);
    drop(saved);

    let saved = reopen(&db_path);
    let expected: BTreeSet<u64> = [1, 3].into_iter().collect();
    assert_eq!(saved.load(), expected);
}

#[test]
fn test_add_add_remove_across_restarts_is_empty() {
    let (_temp_dir, db_path, mut saved) = create_test_saved_set();
    let _ = saved.add(5);
    drop(saved);

    let mut saved = reopen(&db_path);
    assert_eq!(saved.add(5), StoreOutcome::Unchanged);
    drop(saved);

    let mut saved = reopen(&db_path);
    assert_eq!(saved.remove(5), StoreOutcome::Changed);
    drop(saved);

    assert!(reopen(&db_path).load().is_empty());
}

#[test]
fn test_payload_is_plain_integer_array() {
    let (_temp_dir, _db_path, mut saved) = create_test_saved_set();
    let _ = saved.add(4);
    let _ = saved.add(8);

    let raw = saved
        .backend()
        .get(SAVED_CRAFTS_KEY)
        .expect("Failed to read slot");
    assert_eq!(raw.as_deref(), Some("[4,8]"));
}

#[test]
fn test_corrupt_payload_on_disk_reads_empty() {
    let (_temp_dir, db_path, mut saved) = create_test_saved_set();
    saved
        .backend_mut()
        .set(SAVED_CRAFTS_KEY, "{oops")
        .expect("Failed to write slot");
    drop(saved);

    let saved = reopen(&db_path);
    assert!(saved.load().is_empty());
    assert!(!saved.contains(1));
}

#[test]
fn test_session_saves_persist_between_builds() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("session.db");

    let mut session = SessionBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to build session");
    assert_eq!(session.toggle_save(3), StoreOutcome::Changed);
    drop(session);

    let session = SessionBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to rebuild session");
    assert!(session.is_saved(3));
    assert_eq!(session.saved_crafts().len(), 1);
}
