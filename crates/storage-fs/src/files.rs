//! Lazy enumeration of stored files

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{Error, LogicalPath, Result, io as fs_io};

/// Depth-first walk over the regular files of a storage root.
///
/// Yields the logical path of each file as the walk reaches it. Directories
/// are descended into but never yielded. A symbolic link is yielded when it
/// points at a regular file, matching what [`LocalFileStorage::exists`]
/// reports for it; symlinked directories are never descended into. Entries
/// within a directory come in file name order.
///
/// [`LocalFileStorage::exists`]: crate::LocalFileStorage::exists
///
/// A subdirectory that cannot be read produces one `Err` item; the walk then
/// carries on with its siblings.
pub struct Files {
    root: PathBuf,
    walker: walkdir::IntoIter,
}

impl Files {
    pub(crate) fn open(root: &Path) -> Result<Self> {
        fs_io::check_listable(root).map_err(|e| Error::not_readable(root, e))?;

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Ok(Self {
            root: root.to_path_buf(),
            walker,
        })
    }

    fn walk_error(&self, error: walkdir::Error) -> Error {
        let path = error.path().unwrap_or(&self.root).to_path_buf();
        let source = error
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
        Error::not_readable(path, source)
    }
}

impl Iterator for Files {
    type Item = Result<LogicalPath>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(self.walk_error(e))),
            };

            if !is_stored_file(&entry) {
                continue;
            }

            return Some(
                LogicalPath::from_native(&self.root, entry.path()).ok_or_else(|| {
                    Error::not_readable(
                        entry.path(),
                        io::Error::new(io::ErrorKind::InvalidData, "file name is not valid UTF-8"),
                    )
                }),
            );
        }
    }
}

/// Regular files, and symlinks whose target is one. Dangling links are not.
fn is_stored_file(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        return entry.path().metadata().is_ok_and(|m| m.is_file());
    }
    file_type.is_file()
}

impl std::fmt::Debug for Files {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Files").field("root", &self.root).finish_non_exhaustive()
    }
}
