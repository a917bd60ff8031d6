//! Error types for storage-fs

use std::path::PathBuf;

/// Result type for storage-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in storage-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The logical path normalizes to a location above the storage root.
    #[error("Invalid path \"{path}\": escapes the storage root")]
    InvalidPath { path: String },

    /// The operation required an existing file.
    #[error("No such file: \"{path}\"")]
    NotFound { path: String },

    #[error("Couldn't create the file \"{path}\": {source}")]
    AlreadyExists {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Couldn't read {path}: {source}")]
    NotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Couldn't write {path}: {source}")]
    NotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn not_readable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::NotReadable {
            path: path.into(),
            source,
        }
    }

    pub fn not_writable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::NotWritable {
            path: path.into(),
            source,
        }
    }

    /// The underlying OS error, if this error wraps one.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Self::AlreadyExists { source, .. }
            | Self::NotReadable { source, .. }
            | Self::NotWritable { source, .. } => Some(source),
            _ => None,
        }
    }
}
