//! CLI argument parsing for pathways
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Pathways - campus routes and character connections
#[derive(Parser, Debug)]
#[command(name = "pathways")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: ./pathways.toml, then the user config)
    #[arg(long, global = true, env = "PATHWAYS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. "info", "pathways_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Dataset overrides for the campus map
#[derive(Args, Debug, Clone, Default)]
pub struct CampusDataArgs {
    /// Buildings TSV (shortName, longName, x, y)
    #[arg(long)]
    pub buildings: Option<PathBuf>,

    /// Walkway segments TSV (x1, y1, x2, y2, distance)
    #[arg(long)]
    pub paths: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List campus buildings by short name
    Buildings {
        #[command(flatten)]
        data: CampusDataArgs,
    },

    /// Find the shortest walking route between two buildings
    Route {
        /// Short name of the starting building
        start: String,

        /// Short name of the destination building
        end: String,

        #[command(flatten)]
        data: CampusDataArgs,
    },

    /// Find how two characters are connected through shared books
    Connect {
        /// First character
        from: String,

        /// Second character
        to: String,

        /// Co-occurrence TSV (hero, book)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config,
}
