//! Storage CLI
//!
//! The command-line interface for path-safe local file storage.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use std::io;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => {
            let storage = context::open_storage(cli.root.as_deref(), cli.config.as_deref())?;
            execute_command(&storage, cmd)
        }
        None => {
            // No command provided - show help hint
            println!("{} File storage CLI", "storage".green().bold());
            println!();
            println!("Run {} for available commands.", "storage --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(storage: &storage_fs::LocalFileStorage, cmd: Commands) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match cmd {
        Commands::List => commands::run_list(storage, &mut stdout),
        Commands::Exists { path } => commands::run_exists(storage, &path, &mut stdout),
        Commands::Resolve { path, must_exist } => {
            commands::run_resolve(storage, &path, must_exist, &mut stdout)
        }
        Commands::Read { path } => commands::run_read(storage, &path, &mut stdout),
        Commands::Create { path, content } => commands::run_create(
            storage,
            &path,
            content.as_deref(),
            &mut io::stdin().lock(),
            &mut stdout,
        ),
        Commands::Update { path, content } => commands::run_update(
            storage,
            &path,
            content.as_deref(),
            &mut io::stdin().lock(),
            &mut stdout,
        ),
        Commands::Delete { path } => commands::run_delete(storage, &path, &mut stdout),
    }
}
