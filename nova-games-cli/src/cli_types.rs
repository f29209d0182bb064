//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nova-games")]
#[command(about = "Inspect and validate nova-games catalogs", long_about = None)]
pub(crate) struct Cli {
    /// Catalog file to use instead of the configured one (.json, .yaml or .yml)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List games, optionally filtered by title and category
    List {
        /// Case-insensitive text the title must contain
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category to show (defaults to all)
        #[arg(short = 'g', long)]
        category: Option<String>,
    },

    /// List categories in catalog order with game counts
    Categories,

    /// Show every field of one game
    Show {
        /// Game id
        id: String,
    },

    /// Check a catalog for empty fields and duplicate ids
    Validate {
        /// Catalog file (defaults to the configured catalog)
        path: Option<PathBuf>,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show current settings and the catalog they resolve to
    Show,

    /// Use a catalog file by default (it must load cleanly)
    SetCatalog {
        path: PathBuf,
    },

    /// Go back to the built-in catalog
    ClearCatalog,
}
