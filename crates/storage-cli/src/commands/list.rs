//! List command

use std::io::Write;

use colored::Colorize;
use storage_fs::LocalFileStorage;

use crate::error::{CliError, Result};

/// Run the list command
///
/// Paths are printed as the walk finds them. Unreadable subdirectories are
/// reported on stderr without stopping the walk, and make the command fail
/// once it is done.
pub fn run_list(storage: &LocalFileStorage, out: &mut impl Write) -> Result<()> {
    let mut failures = 0usize;

    for entry in storage.list()? {
        match entry {
            Ok(path) => writeln!(out, "{path}")?,
            Err(e) => {
                failures += 1;
                eprintln!("{} {}", "warning:".yellow().bold(), e);
            }
        }
    }

    if failures > 0 {
        return Err(CliError::user(format!(
            "{failures} location(s) could not be listed"
        )));
    }

    Ok(())
}
