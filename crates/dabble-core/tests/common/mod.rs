use dabble_core::{Database, SavedSet};
use tempfile::TempDir;

/// Helper function to open a saved set backed by a database in a fresh
/// temporary directory
pub fn create_test_saved_set() -> (TempDir, std::path::PathBuf, SavedSet<Database>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let saved = SavedSet::new(Database::new(&db_path).expect("Failed to open database"));
    (temp_dir, db_path, saved)
}

/// Reopens the saved set at `db_path`, as a restarted process would
pub fn reopen(db_path: &std::path::Path) -> SavedSet<Database> {
    SavedSet::new(Database::new(db_path).expect("Failed to reopen database"))
}
