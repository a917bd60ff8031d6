//! Permission defaults for stored files and directories.

/// Mode applied to every file created by a store (`rw-rw-r--`).
pub const DEFAULT_FILE_MODE: u32 = 0o664;

/// Mode applied to every directory created by a store (`rwxrws---`).
///
/// The set-group-ID bit makes files created below share the directory's
/// group.
pub const DEFAULT_DIR_MODE: u32 = 0o2770;

/// Environment variable naming the storage root for the CLI.
pub const ROOT_ENV: &str = "STORAGE_ROOT";

/// Environment variable naming a configuration file for the CLI.
pub const CONFIG_ENV: &str = "STORAGE_CONFIG";
