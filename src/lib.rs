//! Strictly Bowling library - type-safe ten-pin bowling scoring
//!
//! Scores a single-player game from per-delivery tokens and produces the
//! classic scoreboard with a running total per frame.
//!
//! # Architecture
//!
//! - **Frame**: records deliveries, validates them against the rack, and
//!   turns a complete frame into scoreboard symbols
//! - **GameScorer**: resolves game totals once strike and spare bonus balls
//!   have been bowled
//! - **Game**: drives ten frames and the scorer from a token stream
//! - **Scoreboard** and **play**: line-based rendering and the interactive
//!   read loop
//!
//! # Example
//!
//! ```
//! use strictly_bowling::{Game, ScoreboardView};
//!
//! # fn example() -> Result<(), strictly_bowling::ReplayError> {
//! let game = Game::replay(["10"; 12])?;
//! assert_eq!(game.final_score(), Some(300));
//! println!("{}", ScoreboardView::from_game(&game));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod play;
mod scoreboard;

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Interactive play
pub use play::{play, retry_message};

// Crate-level exports - Rendering
pub use scoreboard::{FrameView, ScoreboardView};

// Crate-level exports - Game types (bowling)
pub use games::bowling::{
    ClosedReason, Delivery, DeliveryError, DeliverySlot, FRAMES_PER_GAME, Frame, FrameKind,
    GameScorer, Game, Mark, PINS_PER_RACK, Rack, RecordOutcome, ReplayError, Resolution,
    ResolvedFrame, ScoredFrame, Symbol, frame_symbols, resolve,
};

// Crate-level exports - Invariants
pub use games::bowling::invariants::{
    BowlingInvariants, Invariant, InvariantSet, InvariantViolation, MonotonicTotalsInvariant,
    RackReplayInvariant, ResolvedPrefixInvariant,
};
