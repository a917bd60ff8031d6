//! Storage in a self-cleaning temporary directory

use std::ops::Deref;

use tempfile::TempDir;

use crate::{Error, LocalFileStorage, Result};

/// A [`LocalFileStorage`] rooted in a fresh temporary directory.
///
/// The directory and everything stored in it are removed when the value is
/// dropped.
#[derive(Debug)]
pub struct TemporaryFileStorage {
    storage: LocalFileStorage,
    // Dropped after `storage`; removes the directory.
    dir: TempDir,
}

impl TemporaryFileStorage {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().map_err(|e| Error::not_writable(std::env::temp_dir(), e))?;
        tracing::trace!(root = %dir.path().display(), "Created temporary storage");

        Ok(Self {
            storage: LocalFileStorage::new(dir.path()),
            dir,
        })
    }

    pub fn storage(&self) -> &LocalFileStorage {
        &self.storage
    }

    /// Remove the directory now, reporting failures instead of ignoring them.
    pub fn close(self) -> Result<()> {
        let root = self.dir.path().to_path_buf();
        self.dir.close().map_err(|e| Error::not_writable(root, e))
    }
}

impl Deref for TemporaryFileStorage {
    type Target = LocalFileStorage;

    fn deref(&self) -> &Self::Target {
        &self.storage
    }
}
