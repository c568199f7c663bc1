//! Interactive read loop.
//!
//! Prompts for each delivery until the game accepts a token, redrawing the
//! scoreboard between frames. Generic over reader and writer so a whole game
//! can be driven from a string in tests.

use crate::config::PlayConfig;
use crate::games::bowling::{DeliverySlot, FOUL_TOKEN, Game, RecordOutcome, SPLIT_PREFIX};
use crate::scoreboard::ScoreboardView;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Largest split payload the grammar allows.
const MAX_SPLIT_DIGIT: u8 = 9;

/// Plays one game, reading tokens from `input` and drawing to `output`.
///
/// Returns the finished game. Running out of input before the tenth frame
/// closes is an error.
#[instrument(skip_all, fields(player = ?config.player_name()))]
pub fn play<R, W>(mut input: R, mut output: W, config: &PlayConfig) -> Result<Game>
where
    R: BufRead,
    W: Write,
{
    let mut game = Game::new();
    info!("Starting game");

    while let Some(frame) = game.frame_number() {
        draw(&mut output, &game, config)?;
        writeln!(output, "\n*Frame {}*", frame)?;

        // Keep bowling until this frame closes.
        while game.frame_number() == Some(frame) {
            let outcome = prompt_delivery(&mut input, &mut output, &mut game)?;
            debug!(?outcome, "Delivery accepted");
        }
    }

    draw(&mut output, &game, config)?;
    if let Some(score) = game.final_score() {
        writeln!(output, "\nFinal score: {}", score)?;
        info!(final_score = score, "Game finished");
    }
    output.flush()?;

    Ok(game)
}

/// Prompts until one token is accepted.
fn prompt_delivery<R, W>(input: &mut R, output: &mut W, game: &mut Game) -> Result<RecordOutcome>
where
    R: BufRead,
    W: Write,
{
    let slot = game.delivery_slot().unwrap_or(DeliverySlot::First);

    loop {
        write!(output, "Number of pins knocked down in {} delivery: ", slot)?;
        output.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read delivery")?;
        if read == 0 {
            bail!("Input ended before the game was finished");
        }

        let token = line.trim().to_uppercase();
        let max = game.max_pins().unwrap_or(0);
        match game.record(&token) {
            Ok(outcome) => return Ok(outcome),
            Err(e) => {
                warn!(token = %token, error = %e, "Delivery rejected");
                writeln!(output, "{}", retry_message(max))?;
            }
        }
    }
}

/// Hint shown after a rejected token.
pub fn retry_message(max: u8) -> String {
    format!(
        "Incorrect input, please enter a valid score (0-{}, {}, {}(0-{}))",
        max,
        FOUL_TOKEN,
        SPLIT_PREFIX,
        max.min(MAX_SPLIT_DIGIT)
    )
}

fn draw<W: Write>(output: &mut W, game: &Game, config: &PlayConfig) -> Result<()> {
    if *config.clear_screen() {
        write!(output, "{}", CLEAR_SCREEN)?;
    }
    if let Some(name) = config.player_name() {
        writeln!(output, "{}", name)?;
    }
    write!(output, "{}", ScoreboardView::from_game(game))?;
    Ok(())
}
