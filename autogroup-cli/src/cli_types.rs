//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use autogroup_core::{EntryId, EntryType};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "autogroup")]
#[command(about = "Group catalog entries into franchises by their relations", long_about = None)]
pub(crate) struct Cli {
    /// Path to the catalog database (default: settings file, then the data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print every group with its members, ordered by the group's title
    Groups {
        /// Group every catalog entry instead of only the entries in your series
        #[arg(short, long)]
        all: bool,

        /// Resolve all groups up front instead of on demand
        #[arg(long)]
        eager: bool,

        /// Prefer an entry of this type as the group's representative (e.g., tv, movie)
        #[arg(long)]
        prefer_type: Option<EntryType>,
    },

    /// Show the group of one or more entries
    Lookup {
        /// Entry ids to look up
        #[arg(required = true, value_delimiter = ',')]
        ids: Vec<EntryId>,

        /// Prefer an entry of this type as the group's representative (e.g., tv, movie)
        #[arg(long)]
        prefer_type: Option<EntryType>,
    },

    /// Import entries, relations and series from CSV files
    Import {
        /// CSV with columns entry_id,entry_type,main_title
        #[arg(long)]
        entries: PathBuf,

        /// CSV with columns entry_id,related_entry_id,relation_type
        #[arg(long)]
        relations: Option<PathBuf>,

        /// CSV with a single entry_id column
        #[arg(long)]
        series: Option<PathBuf>,
    },

    /// Show database and relation graph statistics
    Stats,

    /// Print the settings file path
    ConfigPath,
}
