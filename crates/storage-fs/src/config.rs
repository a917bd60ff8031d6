//! Storage configuration loading

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{DEFAULT_DIR_MODE, DEFAULT_FILE_MODE};
use crate::{Error, Result};

/// Where a store lives and which permissions it hands out.
///
/// ```toml
/// root = "/var/lib/storage"
/// file_mode = 0o640
/// dir_mode = 0o2750
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    pub root: PathBuf,
    #[serde(default = "default_file_mode")]
    pub file_mode: u32,
    #[serde(default = "default_dir_mode")]
    pub dir_mode: u32,
}

fn default_file_mode() -> u32 {
    DEFAULT_FILE_MODE
}

fn default_dir_mode() -> u32 {
    DEFAULT_DIR_MODE
}

impl StoreConfig {
    /// Configuration for `root` with default permissions.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_mode: DEFAULT_FILE_MODE,
            dir_mode: DEFAULT_DIR_MODE,
        }
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let format = match extension.as_str() {
            "toml" => "TOML",
            "json" => "JSON",
            "yaml" | "yml" => "YAML",
            _ => return Err(Error::UnsupportedFormat { extension }),
        };

        let content =
            std::fs::read_to_string(path).map_err(|e| Error::not_readable(path, e))?;

        let parsed = match format {
            "TOML" => toml::from_str(&content).map_err(|e| e.to_string()),
            "JSON" => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        })
    }
}
