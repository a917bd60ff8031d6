//! [`TestStore`] builder for file-storage test scenarios.

use std::fs;
use std::path::Path;

use storage_fs::LocalFileStorage;
use tempfile::TempDir;

/// A scratch directory with a [`LocalFileStorage`] rooted in it.
///
/// The storage root is a subdirectory of the scratch directory, so tests can
/// also start from a root that does not exist yet.
///
/// # Example
///
/// ```rust,no_run
/// use storage_test_utils::TestStore;
///
/// let store = TestStore::new().with_file("dir/b", "content");
/// store.assert_file_contains("dir/b", "content");
/// assert_eq!(store.listed(), vec!["dir/b".to_string()]);
/// ```
pub struct TestStore {
    temp_dir: TempDir,
    storage: LocalFileStorage,
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStore {
    /// Create a store whose root directory already exists.
    pub fn new() -> Self {
        let store = Self::without_root();
        fs::create_dir(store.root()).unwrap();
        store
    }

    /// Create a store whose root directory has not been created.
    pub fn without_root() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalFileStorage::new(temp_dir.path().join("storage"));
        Self { temp_dir, storage }
    }

    /// Write a file directly to disk, bypassing the storage.
    pub fn with_file(self, path: &str, content: impl AsRef<[u8]>) -> Self {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        self
    }

    /// Create an empty directory directly on disk.
    pub fn with_dir(self, path: &str) -> Self {
        fs::create_dir_all(self.root().join(path)).unwrap();
        self
    }

    pub fn storage(&self) -> &LocalFileStorage {
        &self.storage
    }

    /// The storage root.
    pub fn root(&self) -> &Path {
        self.storage.root()
    }

    /// The scratch directory containing the root.
    pub fn scratch(&self) -> &Path {
        self.temp_dir.path()
    }

    /// All listed files, sorted.
    ///
    /// # Panics
    /// Panics if listing fails or yields an error.
    pub fn listed(&self) -> Vec<String> {
        let mut files = self
            .storage
            .list()
            .unwrap()
            .map(|entry| entry.unwrap().to_string())
            .collect::<Vec<_>>();
        files.sort();
        files
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to the root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
