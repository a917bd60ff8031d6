//! Local file storage rooted at a fixed directory

use std::io;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_DIR_MODE, DEFAULT_FILE_MODE};
use crate::{Error, Files, LogicalPath, Result, StoreConfig, io as fs_io};

/// Stores files in the local file system below one root directory.
///
/// Every operation resolves its logical path afresh; nothing is cached
/// between calls. The root need not exist for writes (it is created on
/// demand) but must exist and be readable for reads and listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFileStorage {
    root: PathBuf,
    file_mode: u32,
    dir_mode: u32,
}

impl LocalFileStorage {
    /// Create a storage rooted at `root`. Performs no I/O.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: strip_trailing_separators(root.as_ref()),
            file_mode: DEFAULT_FILE_MODE,
            dir_mode: DEFAULT_DIR_MODE,
        }
    }

    /// Create a storage from configuration, including permission modes.
    pub fn with_config(config: &StoreConfig) -> Self {
        Self::new(&config.root).with_modes(config.file_mode, config.dir_mode)
    }

    /// Override the modes applied to created files and directories.
    pub fn with_modes(mut self, file_mode: u32, dir_mode: u32) -> Self {
        self.file_mode = file_mode;
        self.dir_mode = dir_mode;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_mode(&self) -> u32 {
        self.file_mode
    }

    pub fn dir_mode(&self) -> u32 {
        self.dir_mode
    }

    /// Map a logical path to its location on disk.
    ///
    /// Fails with [`Error::InvalidPath`] if the path escapes the root, no
    /// matter the value of `must_exist`. With `must_exist`, a path that is
    /// not an existing regular file fails with [`Error::NotFound`].
    pub fn resolve(&self, path: &str, must_exist: bool) -> Result<PathBuf> {
        let logical = LogicalPath::parse(path).inspect_err(|_| {
            tracing::debug!(root = %self.root.display(), path, "Rejected path escaping the storage root");
        })?;

        if must_exist && !self.exists_logical(&logical)? {
            return Err(Error::not_found(path));
        }

        Ok(logical.to_native_under(&self.root))
    }

    /// Whether `path` names an existing regular file.
    ///
    /// Absence is only reported once the nearest existing ancestor (at most
    /// the root) is confirmed readable; otherwise this fails with
    /// [`Error::NotReadable`] so that a permission problem is never mistaken
    /// for a missing file.
    pub fn exists(&self, path: &str) -> Result<bool> {
        let logical = LogicalPath::parse(path)?;
        self.exists_logical(&logical)
    }

    /// Create `path` with `content`. Fails if the file already exists.
    pub fn create(&self, path: &str, content: &[u8]) -> Result<()> {
        let resolved = self.resolve(path, false)?;

        // Never create anything above the root, even for the root itself.
        let parent = match resolved.parent() {
            Some(parent) if resolved != self.root => parent,
            _ => self.root.as_path(),
        };
        fs_io::ensure_dir(parent, self.dir_mode)?;

        let file = fs_io::create_new(&resolved, self.file_mode).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                Error::AlreadyExists {
                    path: path.to_string(),
                    source: e,
                }
            } else {
                Error::not_writable(&resolved, e)
            }
        })?;

        fs_io::write_content(file, content).map_err(|e| Error::not_writable(&resolved, e))?;

        tracing::debug!(path = %resolved.display(), bytes = content.len(), "Created file");
        Ok(())
    }

    /// Load the full content of `path`.
    pub fn read(&self, path: &str) -> Result<Vec<u8>> {
        let resolved = self.resolve(path, true)?;
        std::fs::read(&resolved).map_err(|e| Error::not_readable(&resolved, e))
    }

    /// Load the content of `path` as UTF-8 text.
    pub fn read_to_string(&self, path: &str) -> Result<String> {
        let resolved = self.resolve(path, true)?;
        std::fs::read_to_string(&resolved).map_err(|e| Error::not_readable(&resolved, e))
    }

    /// Overwrite the content of the existing file `path`.
    pub fn update(&self, path: &str, content: &[u8]) -> Result<()> {
        let resolved = self.resolve(path, true)?;
        fs_io::overwrite(&resolved, content).map_err(|e| Error::not_writable(&resolved, e))?;

        tracing::debug!(path = %resolved.display(), bytes = content.len(), "Updated file");
        Ok(())
    }

    /// Delete the existing file `path`.
    pub fn delete(&self, path: &str) -> Result<()> {
        let resolved = self.resolve(path, true)?;
        std::fs::remove_file(&resolved).map_err(|e| Error::not_writable(&resolved, e))?;

        tracing::debug!(path = %resolved.display(), "Deleted file");
        Ok(())
    }

    /// Lazily enumerate every regular file below the root.
    ///
    /// The root is opened before this returns, so an unreadable or missing
    /// root fails here rather than on first iteration.
    pub fn list(&self) -> Result<Files> {
        Files::open(&self.root)
    }

    fn exists_logical(&self, logical: &LogicalPath) -> Result<bool> {
        let resolved = logical.to_native_under(&self.root);

        match std::fs::metadata(&resolved) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if is_absent(&e) => {
                self.check_nearest_ancestor(logical)?;
                Ok(false)
            }
            Err(e) => Err(Error::not_readable(resolved, e)),
        }
    }

    /// Find the closest existing ancestor of `logical` and make sure it can
    /// be listed. The walk stops at the root; a missing root is unreadable.
    fn check_nearest_ancestor(&self, logical: &LogicalPath) -> Result<()> {
        let mut current = logical.parent().or_else(|| Some(logical.clone()));

        while let Some(dir) = current {
            let native = dir.to_native_under(&self.root);

            match std::fs::metadata(&native) {
                Ok(metadata) if metadata.is_dir() => {
                    return fs_io::check_listable(&native)
                        .map_err(|e| Error::not_readable(native, e));
                }
                // A regular file where a directory should be: plainly absent.
                Ok(_) => return Ok(()),
                Err(e) if is_absent(&e) && !dir.is_root() => current = dir.parent(),
                Err(e) => return Err(Error::not_readable(native, e)),
            }
        }

        Ok(())
    }
}

fn is_absent(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

fn strip_trailing_separators(root: &Path) -> PathBuf {
    let raw = root.to_string_lossy();
    let trimmed = raw.trim_end_matches(std::path::is_separator);

    if trimmed.is_empty() && !raw.is_empty() {
        // Made only of separators: the filesystem root.
        PathBuf::from(&raw[..1])
    } else if trimmed.len() == raw.len() {
        root.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_separators() {
        let store = LocalFileStorage::new("/tmp/storeA///");
        assert_eq!(store.root(), Path::new("/tmp/storeA"));
    }

    #[test]
    fn new_keeps_filesystem_root() {
        let store = LocalFileStorage::new("/");
        assert_eq!(store.root(), Path::new("/"));
    }

    #[test]
    fn new_uses_default_modes() {
        let store = LocalFileStorage::new("/tmp/storeA");
        assert_eq!(store.file_mode(), 0o664);
        assert_eq!(store.dir_mode(), 0o2770);
    }

    #[test]
    fn resolve_root_itself() {
        let store = LocalFileStorage::new("/tmp/storeA");
        assert_eq!(store.resolve("./", false).unwrap(), PathBuf::from("/tmp/storeA"));
    }
}
