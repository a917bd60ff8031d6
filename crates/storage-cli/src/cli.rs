//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use storage_fs::constants::{CONFIG_ENV, ROOT_ENV};

/// Storage - Read, write and list files below a fixed root directory
#[derive(Parser, Debug)]
#[command(name = "storage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Storage root directory (overrides the configuration file)
    #[arg(long, global = true, env = ROOT_ENV)]
    pub root: Option<PathBuf>,

    /// Configuration file (.toml, .json, .yaml)
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every stored file
    List,

    /// Check whether a file exists
    ///
    /// Prints "true" or "false". Fails if the answer cannot be determined
    /// because a directory on the way is unreadable.
    Exists {
        /// Logical path of the file
        path: String,
    },

    /// Show where a logical path lives on disk
    Resolve {
        /// Logical path to resolve
        path: String,

        /// Fail unless the file exists
        #[arg(long)]
        must_exist: bool,
    },

    /// Print the content of a file
    Read {
        /// Logical path of the file
        path: String,
    },

    /// Create a new file
    ///
    /// Examples:
    ///   storage create notes/today.txt --content "hello"
    ///   cat report.pdf | storage create reports/report.pdf
    Create {
        /// Logical path of the file
        path: String,

        /// Content to write (read from stdin if omitted)
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Overwrite an existing file
    Update {
        /// Logical path of the file
        path: String,

        /// Content to write (read from stdin if omitted)
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete a file
    Delete {
        /// Logical path of the file
        path: String,
    },
}
