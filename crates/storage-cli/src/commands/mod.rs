//! Command implementations for storage-cli

pub mod file;
pub mod list;

pub use file::{run_create, run_delete, run_exists, run_read, run_resolve, run_update};
pub use list::run_list;
