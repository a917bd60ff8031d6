//! Permission fixtures for Unix-only failure tests.
//!
//! Tests that provoke permission errors must skip themselves when running as
//! root, which bypasses the checks, and must restore modes afterwards so the
//! temporary directory can be cleaned up.

use std::path::{Path, PathBuf};

/// Whether the current process runs with root privileges.
pub fn is_root() -> bool {
    match std::process::Command::new("id").arg("-u").output() {
        Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
        Err(_) => false,
    }
}

/// Changes the mode of a path and restores the previous mode on drop.
///
/// # Example
///
/// ```rust,no_run
/// use storage_test_utils::PermissionGuard;
///
/// let _guard = PermissionGuard::set("/tmp/some-dir", 0o500);
/// // ... exercise code that must fail to write ...
/// ```
#[derive(Debug)]
pub struct PermissionGuard {
    path: PathBuf,
    #[cfg(unix)]
    previous: u32,
}

impl PermissionGuard {
    /// Apply `mode` to `path`.
    ///
    /// # Panics
    /// Panics if the current mode cannot be read or the new one applied.
    #[cfg(unix)]
    pub fn set(path: impl AsRef<Path>, mode: u32) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let path = path.as_ref().to_path_buf();
        let previous = std::fs::metadata(&path)
            .unwrap_or_else(|e| panic!("PermissionGuard: cannot stat {}: {e}", path.display()))
            .permissions()
            .mode();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode))
            .unwrap_or_else(|e| panic!("PermissionGuard: cannot chmod {}: {e}", path.display()));

        Self { path, previous }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(unix)]
impl Drop for PermissionGuard {
    fn drop(&mut self) {
        use std::os::unix::fs::PermissionsExt;

        let _ = std::fs::set_permissions(
            &self.path,
            std::fs::Permissions::from_mode(self.previous),
        );
    }
}
