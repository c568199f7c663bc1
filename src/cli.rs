//! Command-line interface for strictly_bowling.

use clap::{Parser, Subcommand};

/// Strictly Bowling - ten-pin scorer with deferred frame resolution
#[derive(Parser, Debug)]
#[command(name = "strictly_bowling")]
#[command(about = "Score a ten-pin bowling game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game interactively, one delivery per prompt
    Play {
        /// Path to play configuration
        #[arg(short, long, default_value = "bowling.toml")]
        config: std::path::PathBuf,

        /// Keep previous scoreboards on screen instead of clearing
        #[arg(long)]
        no_clear: bool,
    },

    /// Score a sequence of deliveries and print the scoreboard
    Score {
        /// Delivery tokens: 0-10, F for a foul, S0-S9 for a split
        #[arg(required = true)]
        tokens: Vec<String>,

        /// Print the scoreboard as JSON
        #[arg(long)]
        json: bool,
    },
}
