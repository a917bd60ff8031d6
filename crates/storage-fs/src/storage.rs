//! Backend-agnostic storage interface

use crate::{LocalFileStorage, LogicalPath, Result, TemporaryFileStorage};

/// A place files can be created in, read from, updated and deleted from.
///
/// Paths are logical paths as accepted by [`LogicalPath::parse`]; every
/// implementation must reject paths escaping its root with
/// [`Error::InvalidPath`](crate::Error::InvalidPath).
pub trait FileStorage {
    /// Iterator returned by [`FileStorage::files`].
    type Files: Iterator<Item = Result<LogicalPath>>;

    /// Get all existing files' paths.
    ///
    /// # Errors
    ///
    /// [`Error::NotReadable`](crate::Error::NotReadable) if the storage
    /// cannot be listed at all.
    fn files(&self) -> Result<Self::Files>;

    /// Whether the given file exists.
    fn has(&self, path: &str) -> Result<bool>;

    /// Create the given file with the given content.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyExists`](crate::Error::AlreadyExists) or
    /// [`Error::NotWritable`](crate::Error::NotWritable).
    fn create(&self, path: &str, content: &[u8]) -> Result<()>;

    /// Load the content of the given file.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`](crate::Error::NotFound) or
    /// [`Error::NotReadable`](crate::Error::NotReadable).
    fn read(&self, path: &str) -> Result<Vec<u8>>;

    /// Overwrite the given file with the given content.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`](crate::Error::NotFound) or
    /// [`Error::NotWritable`](crate::Error::NotWritable).
    fn update(&self, path: &str, content: &[u8]) -> Result<()>;

    /// Delete the given file.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`](crate::Error::NotFound) or
    /// [`Error::NotWritable`](crate::Error::NotWritable).
    fn delete(&self, path: &str) -> Result<()>;
}

impl FileStorage for LocalFileStorage {
    type Files = crate::Files;

    fn files(&self) -> Result<Self::Files> {
        self.list()
    }

    fn has(&self, path: &str) -> Result<bool> {
        self.exists(path)
    }

    fn create(&self, path: &str, content: &[u8]) -> Result<()> {
        LocalFileStorage::create(self, path, content)
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        LocalFileStorage::read(self, path)
    }

    fn update(&self, path: &str, content: &[u8]) -> Result<()> {
        LocalFileStorage::update(self, path, content)
    }

    fn delete(&self, path: &str) -> Result<()> {
        LocalFileStorage::delete(self, path)
    }
}

impl FileStorage for TemporaryFileStorage {
    type Files = crate::Files;

    fn files(&self) -> Result<Self::Files> {
        self.storage().files()
    }

    fn has(&self, path: &str) -> Result<bool> {
        self.storage().has(path)
    }

    fn create(&self, path: &str, content: &[u8]) -> Result<()> {
        self.storage().create(path, content)
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        self.storage().read(path)
    }

    fn update(&self, path: &str, content: &[u8]) -> Result<()> {
        self.storage().update(path, content)
    }

    fn delete(&self, path: &str) -> Result<()> {
        self.storage().delete(path)
    }
}
