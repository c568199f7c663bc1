//! Strictly Bowling - command-line scorer.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use strictly_bowling::{Game, PlayConfig, ScoreboardView};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LOG_FILTER: &str = "info,strictly_bowling=debug";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, no_clear } => run_play(config, no_clear),
        Command::Score { tokens, json } => run_score(tokens, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(config_path: std::path::PathBuf, no_clear: bool) -> Result<()> {
    let mut config = PlayConfig::load_or_default(&config_path)?;
    if no_clear {
        config = config.with_clear_screen(false);
    }
    initialize_tracing(config.log_filter().as_deref());

    info!("Starting interactive game");
    let stdin = io::stdin();
    let game = strictly_bowling::play(stdin.lock(), io::stdout().lock(), &config)?;
    info!(final_score = ?game.final_score(), "Interactive game finished");

    Ok(())
}

/// Score a fixed token sequence
#[instrument(skip(tokens), fields(count = tokens.len()))]
fn run_score(tokens: Vec<String>, json: bool) -> Result<()> {
    initialize_tracing(None);

    let game = Game::replay(&tokens)?;
    let view = ScoreboardView::from_game(&game);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view);
        match game.final_score() {
            Some(score) => println!("\nFinal score: {}", score),
            None => println!("\nRunning score: {}", game.running_score()),
        }
    }

    Ok(())
}

fn initialize_tracing(config_filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config_filter.unwrap_or(DEFAULT_LOG_FILTER)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Tracing initialized");
}
