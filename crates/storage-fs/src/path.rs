//! Logical path handling
//!
//! Callers address files with slash-separated relative paths. Those strings
//! are never handed to the filesystem directly: they are lexically
//! normalized first, and anything that would climb above the storage root
//! is rejected.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{Error, Result};

/// A normalized, root-relative path.
///
/// The only way to obtain one is through [`LogicalPath::parse`], so every
/// value is free of `.` segments, empty segments and leading `..`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalPath {
    /// Segments joined with forward slashes
    inner: String,
}

impl LogicalPath {
    /// Normalize a caller-supplied path.
    ///
    /// Segments are separated by `/` only; any other character, including
    /// `\`, is part of a segment. Repeated separators collapse, `.` is
    /// dropped and `..` removes the preceding segment. A `..` with nothing
    /// left to remove is an escape attempt and fails with
    /// [`Error::InvalidPath`].
    pub fn parse(path: &str) -> Result<Self> {
        // Windows would read a backslash inside a segment as a separator.
        #[cfg(windows)]
        if path.contains('\\') {
            return Err(Error::invalid_path(path));
        }

        let mut segments: Vec<&str> = Vec::new();

        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => match segments.last() {
                    Some(&last) if last != ".." => {
                        segments.pop();
                    }
                    _ => segments.push(".."),
                },
                other => segments.push(other),
            }
        }

        if segments.first() == Some(&"..") {
            return Err(Error::invalid_path(path));
        }

        Ok(Self {
            inner: segments.join("/"),
        })
    }

    /// Build a logical path from a native path relative to a root.
    ///
    /// Returns `None` if `path` is not below `root` or contains segments
    /// that are not valid UTF-8.
    pub(crate) fn from_native(root: &Path, path: &Path) -> Option<Self> {
        let relative = path.strip_prefix(root).ok()?;
        let segments = relative
            .components()
            .map(|component| component.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()?;

        Self::parse(&segments.join("/")).ok()
    }

    /// Get the normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Iterate over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split('/').filter(|s| !s.is_empty())
    }

    /// Whether this path names the storage root itself.
    pub fn is_root(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the parent path. The root has no parent.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }

        let inner = match self.inner.rfind('/') {
            Some(idx) => self.inner[..idx].to_string(),
            None => String::new(),
        };
        Some(Self { inner })
    }

    /// Get the last segment.
    pub fn file_name(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Join this path with a further logical path.
    ///
    /// The joined result is normalized again, so `..` in `segment` may
    /// consume segments of `self` but never escape the root.
    pub fn join(&self, segment: &str) -> Result<Self> {
        Self::parse(&format!("{}/{}", self.inner, segment))
    }

    /// Map this path onto the filesystem below `root`.
    pub fn to_native_under(&self, root: &Path) -> PathBuf {
        let mut native = root.to_path_buf();
        native.extend(self.segments());
        native
    }
}

impl AsRef<str> for LogicalPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for LogicalPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for LogicalPath {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LogicalPath {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_of_single_segment_is_root() {
        let path = LogicalPath::parse("foo").unwrap();
        let parent = path.parent().unwrap();
        assert!(parent.is_root());
        assert!(parent.parent().is_none());
    }

    #[test]
    fn from_native_strips_root() {
        let root = Path::new("/srv/storage");
        let path = LogicalPath::from_native(root, &root.join("dir").join("file")).unwrap();
        assert_eq!(path.as_str(), "dir/file");
    }

    #[cfg(unix)]
    #[test]
    fn from_native_keeps_backslash_in_file_name() {
        let root = Path::new("/srv/storage");
        let path = LogicalPath::from_native(root, &root.join("dir").join("a\\b")).unwrap();
        assert_eq!(path.as_str(), "dir/a\\b");
        assert_eq!(path.file_name(), Some("a\\b"));
    }

    #[test]
    fn from_native_rejects_foreign_paths() {
        let root = Path::new("/srv/storage");
        assert!(LogicalPath::from_native(root, Path::new("/etc/passwd")).is_none());
    }
}
