//! Rack state machine: how many pins the next delivery may knock down.
//!
//! The legal range of a delivery depends on three things only: the kind of
//! frame, how many balls were already thrown in it, and what they knocked
//! down. Each combination maps to one [`Rack`] state so every branch can be
//! tested on its own.

use super::delivery::{ClosedReason, Delivery, PINS_PER_RACK};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Whether a frame is one of the first nine or the tenth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    /// Frames 1 through 9: at most two deliveries.
    Normal,
    /// Frame 10: two deliveries, three after a strike or spare.
    Last,
}

/// Pins available to the next delivery of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rack {
    /// Ten pins standing.
    Fresh,
    /// Some pins already down; only the remainder can fall.
    Standing(u8),
    /// The frame takes no further deliveries.
    Closed(ClosedReason),
}

impl Rack {
    /// Derives the rack for the next delivery.
    #[instrument(level = "trace")]
    pub fn next(kind: FrameKind, prior: &[Delivery]) -> Self {
        let pins = |i: usize| prior[i].pins();

        match (kind, prior.len()) {
            (_, 0) => Rack::Fresh,

            (FrameKind::Normal, 1) if pins(0) == PINS_PER_RACK => {
                Rack::Closed(ClosedReason::FrameComplete)
            }
            (FrameKind::Normal, 1) => Rack::Standing(PINS_PER_RACK - pins(0)),
            (FrameKind::Normal, _) => Rack::Closed(ClosedReason::FrameComplete),

            (FrameKind::Last, 1) if pins(0) == PINS_PER_RACK => Rack::Fresh,
            (FrameKind::Last, 1) => Rack::Standing(PINS_PER_RACK - pins(0)),

            // Strike then strike: a third fresh rack.
            (FrameKind::Last, 2) if pins(0) == PINS_PER_RACK && pins(1) == PINS_PER_RACK => {
                Rack::Fresh
            }
            // Strike then a partial rack: finish it off.
            (FrameKind::Last, 2) if pins(0) == PINS_PER_RACK => {
                Rack::Standing(PINS_PER_RACK - pins(1))
            }
            // Spare: a fresh rack for the bonus ball.
            (FrameKind::Last, 2) if pins(0) + pins(1) == PINS_PER_RACK => Rack::Fresh,
            (FrameKind::Last, 2) => Rack::Closed(ClosedReason::NoBonusBall),

            (FrameKind::Last, _) => Rack::Closed(ClosedReason::FrameComplete),
        }
    }

    /// Most pins the next delivery may knock down, if one is allowed.
    pub fn max_pins(self) -> Option<u8> {
        match self {
            Rack::Fresh => Some(PINS_PER_RACK),
            Rack::Standing(pins) => Some(pins),
            Rack::Closed(_) => None,
        }
    }

    /// Whether the frame is closed to further deliveries.
    pub fn is_closed(self) -> bool {
        matches!(self, Rack::Closed(_))
    }
}
