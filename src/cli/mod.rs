pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "eddy")]
#[command(about = "A per-topic cache of remote post listings", long_about = None)]
pub struct Cli {
    /// Path to an alternate config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select a topic, fetching it if empty or stale
    Select {
        /// Topic to select
        topic: String,
    },
    /// Invalidate a topic's cache and fetch it again
    Refresh {
        /// Topic to refresh (defaults to the selected topic)
        topic: Option<String>,
    },
    /// Show the selected topic's cached posts and freshness
    Show,
}
