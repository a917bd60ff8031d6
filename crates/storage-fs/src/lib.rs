//! Path-safe local file storage
//!
//! Reads, writes and lists files below a fixed root directory. Callers pass
//! logical, slash-separated paths which are normalized lexically; anything
//! that would resolve above the root is rejected before the filesystem is
//! touched.
//!
//! ```rust,no_run
//! use storage_fs::LocalFileStorage;
//!
//! let storage = LocalFileStorage::new("/var/lib/storage");
//! storage.create("reports/today.txt", b"all green")?;
//! assert_eq!(storage.read("./reports/../reports/today.txt")?, b"all green");
//! # Ok::<(), storage_fs::Error>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod files;
pub mod io;
pub mod path;
pub mod storage;
pub mod store;
pub mod temporary;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use files::Files;
pub use path::LogicalPath;
pub use storage::FileStorage;
pub use store::LocalFileStorage;
pub use temporary::TemporaryFileStorage;
