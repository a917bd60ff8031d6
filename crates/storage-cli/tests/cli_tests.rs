//! Integration tests for the storage commands

use assert_cmd::Command;
use predicates::prelude::*;
use storage_test_utils::TestStore;

/// Get a Command for the storage binary rooted at `store`
fn storage_cmd(store: &TestStore) -> Command {
    let mut cmd = Command::cargo_bin("storage").expect("Failed to find storage binary");
    cmd.env_remove("STORAGE_ROOT")
        .env_remove("STORAGE_CONFIG")
        .arg("--root")
        .arg(store.root());
    cmd
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_create_read_list_delete() {
    let store = TestStore::new();

    storage_cmd(&store)
        .args(["create", "foo/bar", "--content", "Hello world!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    storage_cmd(&store)
        .args(["read", "foo/bar"])
        .assert()
        .success()
        .stdout("Hello world!");

    storage_cmd(&store)
        .arg("list")
        .assert()
        .success()
        .stdout("foo/bar\n");

    storage_cmd(&store)
        .args(["delete", "foo/bar"])
        .assert()
        .success();

    storage_cmd(&store)
        .args(["read", "foo/bar"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No such file"));
}

#[test]
fn test_create_from_stdin() {
    let store = TestStore::new();

    storage_cmd(&store)
        .args(["create", "piped"])
        .write_stdin("from stdin")
        .assert()
        .success();

    store.assert_file_contains("piped", "from stdin");
}

#[test]
fn test_update_existing_file() {
    let store = TestStore::new().with_file("note", "old");

    storage_cmd(&store)
        .args(["update", "note", "-c", "new"])
        .assert()
        .success();

    store.assert_file_contains("note", "new");
}

#[test]
fn test_create_existing_fails() {
    let store = TestStore::new().with_file("note", "old");

    storage_cmd(&store)
        .args(["create", "note", "-c", "new"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Couldn't create the file"));

    store.assert_file_contains("note", "old");
}

// ============================================================================
// Paths
// ============================================================================

#[test]
fn test_resolve_normalizes() {
    let store = TestStore::new();
    let expected = format!("{}\n", store.root().join("foobar").display());

    storage_cmd(&store)
        .args(["resolve", "./notRelevant/../foobar"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_resolve_escape_fails() {
    let store = TestStore::new();

    storage_cmd(&store)
        .args(["resolve", "../foobar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("escapes the storage root"));
}

#[test]
fn test_resolve_must_exist() {
    let store = TestStore::new();

    storage_cmd(&store)
        .args(["resolve", "missing", "--must-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such file"));
}

#[test]
fn test_exists() {
    let store = TestStore::new().with_file("present", "x");

    storage_cmd(&store)
        .args(["exists", "present"])
        .assert()
        .success()
        .stdout("true\n");

    storage_cmd(&store)
        .args(["exists", "absent"])
        .assert()
        .success()
        .stdout("false\n");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_list_missing_root_fails() {
    let store = TestStore::without_root();

    storage_cmd(&store)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Couldn't read"));
}

#[test]
fn test_root_from_environment() {
    let store = TestStore::new().with_file("a", "x");

    Command::cargo_bin("storage")
        .unwrap()
        .env("STORAGE_ROOT", store.root())
        .arg("list")
        .assert()
        .success()
        .stdout("a\n");
}

#[test]
fn test_root_from_config_file() {
    let store = TestStore::new().with_file("a", "x");
    let config = store.scratch().join("storage.toml");
    std::fs::write(
        &config,
        format!("root = {:?}\n", store.root().display().to_string()),
    )
    .unwrap();

    Command::cargo_bin("storage")
        .unwrap()
        .env_remove("STORAGE_ROOT")
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .success()
        .stdout("a\n");
}

#[test]
fn test_command_without_root_fails() {
    Command::cargo_bin("storage")
        .unwrap()
        .env_remove("STORAGE_ROOT")
        .env_remove("STORAGE_CONFIG")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No storage root given"));
}

#[test]
fn test_no_command_shows_hint() {
    Command::cargo_bin("storage")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("storage --help"));
}
