//! Storage context resolution
//!
//! Works out which storage root a command operates on from the command
//! line, the environment and an optional configuration file.

use std::path::Path;

use storage_fs::{LocalFileStorage, StoreConfig};

use crate::error::{CliError, Result};

/// Build the storage a command operates on.
///
/// An explicit root wins over the root named in the configuration file;
/// the file still contributes its permission modes.
pub fn open_storage(root: Option<&Path>, config: Option<&Path>) -> Result<LocalFileStorage> {
    let config = match (root, config) {
        (root, Some(path)) => {
            let mut config = StoreConfig::load(path)?;
            if let Some(root) = root {
                config.root = root.to_path_buf();
            }
            config
        }
        (Some(root), None) => StoreConfig::new(root),
        (None, None) => {
            return Err(CliError::user(
                "No storage root given. Pass --root <DIR> or --config <FILE>.",
            ));
        }
    };

    tracing::debug!(root = %config.root.display(), "Opening storage");
    Ok(LocalFileStorage::with_config(&config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_root_is_a_user_error() {
        let err = open_storage(None, None).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }

    #[test]
    fn explicit_root() {
        let storage = open_storage(Some(Path::new("/srv/files/")), None).unwrap();
        assert_eq!(storage.root(), Path::new("/srv/files"));
    }

    #[test]
    fn root_overrides_config_but_keeps_modes() {
        let temp = tempfile::tempdir().unwrap();
        let config = temp.path().join("storage.toml");
        fs::write(&config, "root = \"/from/config\"\nfile_mode = 0o600\n").unwrap();

        let storage = open_storage(Some(Path::new("/from/flag")), Some(&config)).unwrap();

        assert_eq!(storage.root(), Path::new("/from/flag"));
        assert_eq!(storage.file_mode(), 0o600);
    }

    #[test]
    fn config_root_used_without_flag() {
        let temp = tempfile::tempdir().unwrap();
        let config = temp.path().join("storage.json");
        fs::write(&config, r#"{"root": "/from/config"}"#).unwrap();

        let storage = open_storage(None, Some(&config)).unwrap();
        assert_eq!(storage.root(), Path::new("/from/config"));
    }
}
