//! Single-file commands

use std::io::{Read, Write};

use colored::Colorize;
use storage_fs::LocalFileStorage;

use crate::error::Result;

/// Run the exists command
pub fn run_exists(storage: &LocalFileStorage, path: &str, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", storage.exists(path)?)?;
    Ok(())
}

/// Run the resolve command
pub fn run_resolve(
    storage: &LocalFileStorage,
    path: &str,
    must_exist: bool,
    out: &mut impl Write,
) -> Result<()> {
    let resolved = storage.resolve(path, must_exist)?;
    writeln!(out, "{}", resolved.display())?;
    Ok(())
}

/// Run the read command, copying the raw content to `out`
pub fn run_read(storage: &LocalFileStorage, path: &str, out: &mut impl Write) -> Result<()> {
    let content = storage.read(path)?;
    out.write_all(&content)?;
    out.flush()?;
    Ok(())
}

/// Run the create command
pub fn run_create(
    storage: &LocalFileStorage,
    path: &str,
    content: Option<&str>,
    input: &mut impl Read,
    out: &mut impl Write,
) -> Result<()> {
    let content = content_or_input(content, input)?;
    storage.create(path, &content)?;
    writeln!(out, "{} {}", "Created".green().bold(), path)?;
    Ok(())
}

/// Run the update command
pub fn run_update(
    storage: &LocalFileStorage,
    path: &str,
    content: Option<&str>,
    input: &mut impl Read,
    out: &mut impl Write,
) -> Result<()> {
    let content = content_or_input(content, input)?;
    storage.update(path, &content)?;
    writeln!(out, "{} {}", "Updated".green().bold(), path)?;
    Ok(())
}

/// Run the delete command
pub fn run_delete(storage: &LocalFileStorage, path: &str, out: &mut impl Write) -> Result<()> {
    storage.delete(path)?;
    writeln!(out, "{} {}", "Deleted".green().bold(), path)?;
    Ok(())
}

fn content_or_input(content: Option<&str>, input: &mut impl Read) -> Result<Vec<u8>> {
    match content {
        Some(content) => Ok(content.as_bytes().to_vec()),
        None => {
            let mut buffer = Vec::new();
            input.read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}
