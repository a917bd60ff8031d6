//! End-to-end integration test for the storage layer
//!
//! Exercises the complete flow an embedding application goes through:
//! config loading -> storage construction -> file lifecycle -> enumeration.

use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::fs;
use storage_fs::{Error, FileStorage, LocalFileStorage, StoreConfig, TemporaryFileStorage};
use storage_test_utils::TestStore;
use tempfile::TempDir;

/// Write a TOML configuration pointing at `root`
fn write_config(dir: &TempDir, root: &std::path::Path) -> std::path::PathBuf {
    let path = dir.path().join("storage.toml");
    fs::write(
        &path,
        format!(
            "root = {:?}\nfile_mode = 0o664\ndir_mode = 0o2770\n",
            root.display().to_string()
        ),
    )
    .unwrap();
    path
}

/// Uploads, lists and removes module assets the way a consumer would,
/// depending only on the storage trait.
fn manage_assets<S: FileStorage>(storage: &S) -> Result<BTreeSet<String>, Error> {
    storage.create("modules/monitoring/logo.png", &[0x89, b'P', b'N', b'G'])?;
    storage.create("modules/monitoring/config.ini", b"[general]\n")?;
    storage.create("README", b"assets")?;
    storage.update("modules/monitoring/config.ini", b"[general]\nenabled = 1\n")?;
    storage.delete("README")?;

    storage
        .files()?
        .map(|entry| entry.map(|path| path.to_string()))
        .collect()
}

#[test]
fn test_configured_storage_lifecycle() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("var").join("storage");
    let config_path = write_config(&temp, &root);

    let config = StoreConfig::load(&config_path).unwrap();
    let storage = LocalFileStorage::with_config(&config);

    let files = manage_assets(&storage).unwrap();

    assert_eq!(
        files,
        BTreeSet::from([
            "modules/monitoring/config.ini".to_string(),
            "modules/monitoring/logo.png".to_string(),
        ])
    );
    assert_eq!(
        storage.read("modules/monitoring/config.ini").unwrap(),
        b"[general]\nenabled = 1\n"
    );
}

#[test]
fn test_temporary_storage_lifecycle() {
    let storage = TemporaryFileStorage::new().unwrap();
    let root = storage.root().to_path_buf();

    let files = manage_assets(&storage).unwrap();
    assert_eq!(files.len(), 2);

    drop(storage);
    assert!(!root.exists(), "temporary storage should clean up after itself");
}

#[test]
fn test_concrete_scenario() {
    let store = TestStore::new();
    let storage = store.storage();

    storage.create("foo/bar", b"Hello world!").unwrap();
    assert_eq!(storage.read("foo/bar").unwrap(), b"Hello world!");
    assert_eq!(store.listed(), vec!["foo/bar".to_string()]);
    storage.delete("foo/bar").unwrap();

    assert!(matches!(
        storage.read("foo/bar"),
        Err(Error::NotFound { .. })
    ));
    // The emptied directory remains but is never listed.
    assert!(store.listed().is_empty());
    assert!(store.root().join("foo").is_dir());
}

#[test]
fn test_two_stores_sharing_a_root() {
    let store = TestStore::new();
    let other = LocalFileStorage::new(store.root());

    store.storage().create("shared", b"first").unwrap();

    assert!(other.exists("shared").unwrap());
    assert!(matches!(
        other.create("shared", b"second"),
        Err(Error::AlreadyExists { .. })
    ));
    assert_eq!(other.read("shared").unwrap(), b"first");
}
