//! Ten-frame game driver.
//!
//! Feeds tokens into the current frame, finalizes it when its rack closes,
//! and lets the scorer resolve whatever totals the new deliveries unlock.

use super::delivery::{ClosedReason, Delivery, DeliveryError};
use super::frame::{Frame, ScoredFrame};
use super::invariants::assert_invariants;
use super::rack::FrameKind;
use super::scorer::GameScorer;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Frames in a game.
pub const FRAMES_PER_GAME: usize = 10;

/// Which ball of the frame is next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum DeliverySlot {
    /// First ball.
    First,
    /// Second ball.
    Second,
    /// Bonus ball of the tenth frame.
    Third,
}

impl DeliverySlot {
    /// Slot for a frame that already holds `recorded` deliveries.
    pub fn after(recorded: usize) -> Option<Self> {
        match recorded {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            2 => Some(Self::Third),
            _ => None,
        }
    }
}

/// What an accepted delivery did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The frame takes more deliveries.
    Continue {
        /// The delivery recorded.
        delivery: Delivery,
    },
    /// The frame closed and was scored.
    FrameComplete {
        /// 1-based number of the frame that closed.
        frame: usize,
        /// First frame still waiting on bonus balls.
        cursor: usize,
    },
    /// The tenth frame closed.
    GameOver {
        /// Final game score.
        final_score: u16,
    },
}

/// A token in a replayed sequence was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Delivery {} ('{}') rejected: {}", index, token, source)]
pub struct ReplayError {
    /// 0-based position of the token in the sequence.
    pub index: usize,
    /// The rejected token.
    pub token: String,
    /// Why it was rejected.
    pub source: DeliveryError,
}

/// A single player's game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    frames: Vec<ScoredFrame>,
    current: Option<Frame>,
    scorer: GameScorer,
}

impl Game {
    /// Creates a game waiting on the first ball.
    #[instrument]
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(FRAMES_PER_GAME),
            current: Some(Frame::normal()),
            scorer: GameScorer::new(),
        }
    }

    /// Builds a game from a sequence of tokens.
    ///
    /// Stops at the first rejected token. Tokens left over after the game
    /// ends are rejected like any other late delivery.
    #[instrument(skip(tokens))]
    pub fn replay<I>(tokens: I) -> Result<Self, ReplayError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut game = Self::new();
        for (index, token) in tokens.into_iter().enumerate() {
            let token = token.as_ref();
            game.record(token).map_err(|source| ReplayError {
                index,
                token: token.to_string(),
                source,
            })?;
        }
        Ok(game)
    }

    /// Records one delivery token for the frame being bowled.
    ///
    /// On error nothing changes.
    #[instrument(skip(self), fields(frame = ?self.frame_number()))]
    pub fn record(&mut self, token: &str) -> Result<RecordOutcome, DeliveryError> {
        let Some(mut frame) = self.current.take() else {
            return Err(DeliveryError::IllegalPosition(ClosedReason::GameOver));
        };

        let delivery = match frame.record_delivery(token) {
            Ok(delivery) => delivery,
            Err(e) => {
                self.current = Some(frame);
                return Err(e);
            }
        };

        let outcome = if frame.is_complete() {
            self.close_frame(frame)
        } else {
            self.current = Some(frame);
            RecordOutcome::Continue { delivery }
        };

        assert_invariants(self);
        Ok(outcome)
    }

    fn close_frame(&mut self, frame: Frame) -> RecordOutcome {
        self.frames.push(frame.finalize());
        let last_played = self.frames.len() - 1;
        let cursor = self.scorer.advance(&mut self.frames, last_played);
        debug!(frame = last_played + 1, cursor, "Frame closed");

        match self.frames.len() {
            FRAMES_PER_GAME => {
                let final_score = self.running_score();
                info!(final_score, "Game over");
                RecordOutcome::GameOver { final_score }
            }
            played => {
                let kind = if played + 1 == FRAMES_PER_GAME {
                    FrameKind::Last
                } else {
                    FrameKind::Normal
                };
                self.current = Some(Frame::new(kind));
                RecordOutcome::FrameComplete {
                    frame: played,
                    cursor,
                }
            }
        }
    }

    /// Frames bowled and scored so far.
    pub fn frames(&self) -> &[ScoredFrame] {
        &self.frames
    }

    #[cfg(test)]
    pub(super) fn frames_mut(&mut self) -> &mut [ScoredFrame] {
        &mut self.frames
    }

    /// Frame being bowled, if the game is still on.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    /// 1-based number of the frame being bowled.
    pub fn frame_number(&self) -> Option<usize> {
        self.current.as_ref().map(|_| self.frames.len() + 1)
    }

    /// Which ball of the current frame is next.
    pub fn delivery_slot(&self) -> Option<DeliverySlot> {
        self.current
            .as_ref()
            .and_then(|frame| DeliverySlot::after(frame.deliveries().len()))
    }

    /// Most pins the next delivery may knock down.
    pub fn max_pins(&self) -> Option<u8> {
        self.current.as_ref().and_then(Frame::max_pins)
    }

    /// First frame without a game total.
    pub fn cursor(&self) -> usize {
        self.scorer.cursor()
    }

    /// Whether all ten frames are bowled.
    pub fn is_over(&self) -> bool {
        self.current.is_none()
    }

    /// Game total through the last resolved frame.
    pub fn running_score(&self) -> u16 {
        self.frames
            .iter()
            .rev()
            .find_map(ScoredFrame::cumulative_total)
            .unwrap_or(0)
    }

    /// Final score, once the game is over.
    pub fn final_score(&self) -> Option<u16> {
        if self.is_over() {
            self.frames.last().and_then(ScoredFrame::cumulative_total)
        } else {
            None
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
