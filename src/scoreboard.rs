//! Line-based scoreboard rendering.
//!
//! Pure formatting: the view is built from a [`Game`] and drawn as four text
//! lines (frame numbers, rule, symbols, totals). The same view serializes to
//! JSON for non-interactive output.

use crate::games::bowling::{FRAMES_PER_GAME, Game, ScoredFrame, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width of one symbol box including its trailing bar.
const BOX_WIDTH: usize = 4;
/// Width of a normal frame's totals cell, without the bar.
const FRAME_WIDTH: usize = 7;
/// Width of the tenth frame's totals cell, without the bar.
const LAST_FRAME_WIDTH: usize = 11;

const HEADER: &str =
    "|   1   |   2   |   3   |   4   |   5   |   6   |   7   |   8   |   9   |     10    |";
const RULE: &str =
    "|_______|_______|_______|_______|_______|_______|_______|_______|_______|___________|";

/// One frame as the scoreboard shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameView {
    /// 1-based frame number.
    pub number: usize,
    /// Symbols to draw; empty until the frame is bowled.
    pub symbols: Vec<String>,
    /// Game total through this frame, blank until resolved.
    pub total: Option<u16>,
}

impl FrameView {
    fn from_scored(number: usize, frame: &ScoredFrame) -> Self {
        Self {
            number,
            symbols: frame.symbols().iter().map(Symbol::to_string).collect(),
            total: frame.cumulative_total(),
        }
    }

    fn unplayed(number: usize) -> Self {
        Self {
            number,
            symbols: Vec::new(),
            total: None,
        }
    }

    fn is_last(&self) -> bool {
        self.number == FRAMES_PER_GAME
    }
}

/// Snapshot of a game for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreboardView {
    /// All ten frames, bowled or not.
    pub frames: Vec<FrameView>,
    /// Game total through the last resolved frame.
    pub running_score: u16,
    /// Final score once the game is over.
    pub final_score: Option<u16>,
}

impl ScoreboardView {
    /// Builds the view of `game`.
    #[instrument(skip(game))]
    pub fn from_game(game: &Game) -> Self {
        let played = game.frames();
        let frames = (0..FRAMES_PER_GAME)
            .map(|i| match played.get(i) {
                Some(frame) => FrameView::from_scored(i + 1, frame),
                None => FrameView::unplayed(i + 1),
            })
            .collect();

        Self {
            frames,
            running_score: game.running_score(),
            final_score: game.final_score(),
        }
    }

    /// Draws the board as text lines.
    pub fn lines(&self) -> [String; 4] {
        let mut symbols = String::from("|");
        let mut totals = String::from("|");

        for frame in &self.frames {
            if frame.symbols.is_empty() {
                symbols.push_str(if frame.is_last() { "   |   |   |" } else { "   |   |" });
            } else {
                for symbol in &frame.symbols {
                    symbols.push_str(&format!("{:>width$}", format!("{} |", symbol), width = BOX_WIDTH));
                }
            }

            let width = if frame.is_last() { LAST_FRAME_WIDTH } else { FRAME_WIDTH };
            let total = frame.total.map(|t| t.to_string()).unwrap_or_default();
            totals.push_str(&format!("{:<width$}|", total, width = width));
        }

        [HEADER.to_string(), RULE.to_string(), symbols, totals]
    }
}

impl std::fmt::Display for ScoreboardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
