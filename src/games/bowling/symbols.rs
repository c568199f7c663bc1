//! Scoreboard symbols for completed frames.

use super::delivery::{Delivery, PINS_PER_RACK};
use super::rack::FrameKind;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single box on the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Symbol {
    /// All ten pins on a fresh rack.
    #[display("X")]
    Strike,
    /// The rest of the rack on the following ball.
    #[display("/")]
    Spare,
    /// A foul.
    #[display("F")]
    Foul,
    /// No pins down.
    #[display("-")]
    Miss,
    /// A plain pin count.
    #[display("{}", _0)]
    Pins(u8),
    /// A pin count that left a split.
    #[display("S{}", _0)]
    Split(u8),
    /// An empty box kept for column alignment.
    #[display(" ")]
    Blank,
}

impl Symbol {
    /// The symbol for one delivery taken on its own.
    pub fn of(delivery: &Delivery) -> Self {
        match delivery.pins() {
            PINS_PER_RACK => Symbol::Strike,
            0 if delivery.is_foul() => Symbol::Foul,
            0 => Symbol::Miss,
            pins if delivery.is_split() => Symbol::Split(pins),
            pins => Symbol::Pins(pins),
        }
    }
}

/// Converts a complete frame's deliveries into scoreboard symbols.
///
/// The caller guarantees the deliveries form a complete frame of `kind`.
#[instrument(level = "debug")]
pub fn frame_symbols(kind: FrameKind, deliveries: &[Delivery]) -> Vec<Symbol> {
    let sym = |i: usize| Symbol::of(&deliveries[i]);
    let pins = |i: usize| deliveries[i].pins();

    match (kind, deliveries.len()) {
        // The strike sits in the right-hand box of a normal frame.
        (FrameKind::Normal, 1) => vec![Symbol::Blank, Symbol::Strike],
        (FrameKind::Normal, _) if pins(0) + pins(1) == PINS_PER_RACK => {
            vec![sym(0), Symbol::Spare]
        }
        (FrameKind::Normal, _) => vec![sym(0), sym(1)],

        (FrameKind::Last, 3) if pins(0) == PINS_PER_RACK => {
            if pins(1) == PINS_PER_RACK {
                vec![Symbol::Strike, Symbol::Strike, sym(2)]
            } else if pins(1) + pins(2) == PINS_PER_RACK {
                vec![Symbol::Strike, sym(1), Symbol::Spare]
            } else {
                vec![Symbol::Strike, sym(1), sym(2)]
            }
        }
        (FrameKind::Last, 3) => vec![sym(0), Symbol::Spare, sym(2)],
        (FrameKind::Last, _) => vec![sym(0), sym(1), Symbol::Blank],
    }
}
