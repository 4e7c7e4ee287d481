use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TEST_CATALOG: &str = r#"[
  {"id": 1, "name": "Yarn Tassel", "time": 30, "difficulty": "Easy",
   "materials": ["Yarn", "Needle"], "instructions": ["Wrap", "Tie"]},
  {"id": 2, "name": "Finger Knit Cord", "time": 90, "difficulty": "Easy",
   "materials": ["Yarn"]},
  {"id": 3, "name": "Paper Fan", "time": 10, "difficulty": "Medium",
   "materials": ["Paper", "Glue", "Stick"]}
]"#;

/// Temporary database and catalog for one test
struct TestEnv {
    _dir: TempDir,
    db_path: PathBuf,
    catalog_path: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        let db_path = dir.path().join("cli_test.db");
        let catalog_path = dir.path().join("crafts.json");
        std::fs::write(&catalog_path, TEST_CATALOG).expect("Failed to write catalog");
        Self {
            _dir: dir,
            db_path,
            catalog_path,
        }
    }

    /// Command with --no-color and the test database and catalog
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("dabble").expect("Failed to find dabble binary");
        cmd.arg("--no-color")
            .arg("--database-file")
            .arg(&self.db_path)
            .arg("--catalog")
            .arg(&self.catalog_path);
        cmd
    }
}

#[test]
fn test_cli_default_lists_quickest_first() {
    let env = TestEnv::new();

    let output = env.cmd().assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).expect("utf-8 output");

    assert!(stdout.contains("Found 3 crafts"));
    assert!(stdout.contains("## More Ideas"));
    let fan = stdout.find("Paper Fan").expect("fan listed");
    let tassel = stdout.find("Yarn Tassel").expect("tassel listed");
    let cord = stdout.find("Finger Knit Cord").expect("cord listed");
    assert!(fan < tassel && tassel < cord);
}

#[test]
fn test_cli_match_with_time_limit() {
    let env = TestEnv::new();

    env.cmd()
        .args(["match", "--have", "yarn,needle", "--time", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 crafts\n"))
        .stdout(predicate::str::contains("## Perfect Matches\n\n- **1. Yarn Tassel**"))
        .stdout(predicate::str::contains("## More Ideas\n\n- **3. Paper Fan**"))
        .stdout(predicate::str::contains("## Partial Matches").not())
        .stdout(predicate::str::contains("Finger Knit Cord").not());
}

#[test]
fn test_cli_match_partial_badge() {
    let env = TestEnv::new();

    env.cmd()
        .args(["match", "--have", "Yarn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Perfect Matches"))
        .stdout(predicate::str::contains("## Partial Matches"))
        .stdout(predicate::str::contains("Partial Match (Missing 1): needle"));
}

#[test]
fn test_cli_match_no_results() {
    let env = TestEnv::new();

    env.cmd()
        .args(["match", "--time", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No crafts found matching your criteria"));
}

#[test]
fn test_cli_match_rejects_zero_time() {
    let env = TestEnv::new();

    env.cmd().args(["match", "--time", "0"]).assert().failure();
}

#[test]
fn test_cli_materials_list_and_search() {
    let env = TestEnv::new();

    env.cmd()
        .arg("materials")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- glue\n- needle\n- paper\n- stick\n- yarn\n",
        ));

    env.cmd()
        .args(["materials", "--search", "PA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- paper"))
        .stdout(predicate::str::contains("- yarn").not());
}

#[test]
fn test_cli_show_craft() {
    let env = TestEnv::new();

    env.cmd()
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Yarn Tassel"))
        .stdout(predicate::str::contains("- Time: 30 min"))
        .stdout(predicate::str::contains("1. Wrap"));
}

#[test]
fn test_cli_show_unknown_craft_fails() {
    let env = TestEnv::new();

    env.cmd()
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Craft with ID 42 not found"));
}

#[test]
fn test_cli_saved_round_trip() {
    let env = TestEnv::new();

    env.cmd()
        .args(["saved", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 crafts saved"));

    env.cmd()
        .args(["saved", "add", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Saved \"Paper Fan\""));

    env.cmd()
        .args(["saved", "add", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already saved"));

    env.cmd()
        .args(["saved", "add", "1"])
        .assert()
        .success();

    env.cmd()
        .args(["saved", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 crafts saved"))
        .stdout(predicate::str::contains("Yarn Tassel"))
        .stdout(predicate::str::contains("Paper Fan"));

    env.cmd()
        .args(["show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*Saved*"));

    env.cmd()
        .args(["saved", "remove", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed \"Paper Fan\""));

    env.cmd()
        .args(["saved", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 craft saved"))
        .stdout(predicate::str::contains("Paper Fan").not());
}

#[test]
fn test_cli_saved_toggle_and_clear() {
    let env = TestEnv::new();

    env.cmd()
        .args(["saved", "toggle", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved \"Finger Knit Cord\""));

    env.cmd()
        .args(["saved", "toggle", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed \"Finger Knit Cord\""));

    env.cmd().args(["saved", "add", "1"]).assert().success();

    env.cmd()
        .args(["saved", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared saved crafts"));

    env.cmd()
        .args(["saved", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 crafts saved"));

    env.cmd()
        .args(["saved", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved crafts to clear"));
}

#[test]
fn test_cli_saved_add_unknown_craft_fails() {
    let env = TestEnv::new();

    env.cmd()
        .args(["saved", "add", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Craft with ID 99 not found"));
}

#[test]
fn test_cli_remove_unsaved_is_noop() {
    let env = TestEnv::new();

    env.cmd()
        .args(["saved", "remove", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"craft 99\" was not saved"));
}

#[test]
fn test_cli_invalid_catalog_fails() {
    let env = TestEnv::new();
    std::fs::write(&env.catalog_path, "not a catalog").expect("Failed to write catalog");

    env.cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize session"));
}
