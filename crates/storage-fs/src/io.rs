//! Filesystem primitives with permission handling

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::{Error, Result};

/// Ensure that `dir` and all of its ancestors exist.
///
/// Missing directories are created top-down, each with `mode`. A directory
/// that appears concurrently counts as created.
pub fn ensure_dir(dir: &Path, mode: u32) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }

    if let Some(parent) = dir.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent, mode)?;
    }

    match dir_builder(mode).create(dir) {
        Ok(()) => {
            set_mode(dir, mode).map_err(|e| Error::not_writable(dir, e))?;
            tracing::trace!(dir = %dir.display(), mode = %format!("{mode:o}"), "Created directory");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(Error::not_writable(dir, e)),
    }
}

/// Atomically create `path`, failing if anything already exists there.
///
/// Relies on `O_CREAT | O_EXCL` semantics, so of several concurrent callers
/// exactly one succeeds.
pub fn create_new(path: &Path, mode: u32) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }

    let file = options.open(path)?;
    // The open mode is filtered through the umask; set it explicitly.
    set_mode(path, mode)?;
    Ok(file)
}

/// Write all of `content` to an already opened file.
pub fn write_content(mut file: File, content: &[u8]) -> io::Result<()> {
    file.write_all(content)?;
    file.flush()
}

/// Replace the content of an existing file.
///
/// Never creates the file: if it vanished since the caller checked, this
/// fails instead of resurrecting it.
pub fn overwrite(path: &Path, content: &[u8]) -> io::Result<()> {
    let file = OpenOptions::new().write(true).truncate(true).open(path)?;
    write_content(file, content)
}

/// Check that `dir` can be opened for listing.
pub fn check_listable(dir: &Path) -> io::Result<()> {
    fs::read_dir(dir).map(|_| ())
}

/// Apply permission bits to `path`. A no-op off Unix.
pub fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))
    }

    #[cfg(not(unix))]
    {
        let _ = (path, mode);
        Ok(())
    }
}

fn dir_builder(mode: u32) -> fs::DirBuilder {
    let mut builder = fs::DirBuilder::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }

    #[cfg(not(unix))]
    let _ = mode;

    builder
}
