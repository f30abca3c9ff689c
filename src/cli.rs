use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "feed")]
#[command(about = "Drive an in-memory social feed from the terminal", long_about = None)]
pub struct Cli {
    /// TOML file with the stories and posts to start from (defaults to the built-in mock feed)
    #[arg(long, global = true, env = "FEED_SEED")]
    pub seed: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the feed: stories strip, posts, likes and comments
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply an event script to the feed, one event per line
    Play {
        /// Script file to read events from (reads stdin when omitted)
        script: Option<PathBuf>,

        /// Output one JSON object per event
        #[arg(long)]
        json: bool,
    },

    /// Explain the event script format
    Guide,
}
