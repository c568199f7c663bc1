//! Frame lifecycle: recording, then scored.
//!
//! A [`Frame`] accepts deliveries until its rack closes. [`Frame::finalize`]
//! consumes it and returns a [`ScoredFrame`] with its symbols and pin total.
//! Deliveries can no longer be added once a frame is scored.

use super::delivery::{Delivery, DeliveryError, PINS_PER_RACK};
use super::rack::{FrameKind, Rack};
use super::symbols::{Symbol, frame_symbols};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Recording
// ─────────────────────────────────────────────────────────────

/// A frame that is still being bowled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    kind: FrameKind,
    deliveries: Vec<Delivery>,
}

impl Frame {
    /// Creates an empty frame of the given kind.
    #[instrument]
    pub fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            deliveries: Vec::with_capacity(3),
        }
    }

    /// Creates an empty frame for frames 1 through 9.
    pub fn normal() -> Self {
        Self::new(FrameKind::Normal)
    }

    /// Creates an empty tenth frame.
    pub fn last() -> Self {
        Self::new(FrameKind::Last)
    }

    /// Parses `token` and appends it if the pins are still standing.
    ///
    /// On error the frame is unchanged.
    #[instrument(skip(self), fields(kind = ?self.kind, recorded = self.deliveries.len()))]
    pub fn record_delivery(&mut self, token: &str) -> Result<Delivery, DeliveryError> {
        let delivery = Delivery::parse(token).inspect_err(|e| {
            warn!(error = %e, "Rejected delivery token");
        })?;
        self.record(delivery)
    }

    /// Appends an already-parsed delivery if the pins are still standing.
    #[instrument(skip(self), fields(kind = ?self.kind, recorded = self.deliveries.len()))]
    pub fn record(&mut self, delivery: Delivery) -> Result<Delivery, DeliveryError> {
        let max = match self.rack() {
            Rack::Closed(reason) => {
                warn!(%reason, "Delivery attempted on a closed frame");
                return Err(DeliveryError::IllegalPosition(reason));
            }
            Rack::Fresh => PINS_PER_RACK,
            Rack::Standing(pins) => pins,
        };

        if delivery.pins() > max {
            warn!(pins = delivery.pins(), max, "Delivery knocks down more pins than are standing");
            return Err(DeliveryError::OutOfRange {
                pins: delivery.pins(),
                max,
            });
        }

        self.deliveries.push(delivery);
        debug!(%delivery, total = self.pins_total(), "Delivery recorded");
        Ok(delivery)
    }

    /// Rack state for the next delivery.
    pub fn rack(&self) -> Rack {
        Rack::next(self.kind, &self.deliveries)
    }

    /// Most pins the next delivery may knock down, if one is allowed.
    pub fn max_pins(&self) -> Option<u8> {
        self.rack().max_pins()
    }

    /// Whether the frame takes no further deliveries.
    pub fn is_complete(&self) -> bool {
        self.rack().is_closed()
    }

    /// Whether ten pins have fallen within the first two balls.
    pub fn mark_achieved(&self) -> bool {
        mark_in(&self.deliveries)
    }

    /// Returns the frame kind.
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Whether this is the tenth frame.
    pub fn is_last_frame(&self) -> bool {
        self.kind == FrameKind::Last
    }

    /// Deliveries recorded so far.
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Sum of recorded pins.
    pub fn pins_total(&self) -> u16 {
        self.deliveries.iter().map(|d| u16::from(d.pins())).sum()
    }

    /// Scores a complete frame (consumes the recording frame).
    ///
    /// # Panics
    ///
    /// Panics if the frame is not complete. Driving a frame to completion is
    /// the caller's job; finalizing early is a programming error.
    #[instrument(skip(self), fields(kind = ?self.kind, recorded = self.deliveries.len()))]
    pub fn finalize(self) -> ScoredFrame {
        assert!(
            self.is_complete(),
            "finalize called on an incomplete frame ({} deliveries)",
            self.deliveries.len()
        );

        let symbols = frame_symbols(self.kind, &self.deliveries);
        let pins_total = self.pins_total();
        debug!(pins_total, ?symbols, "Frame finalized");

        ScoredFrame {
            kind: self.kind,
            deliveries: self.deliveries,
            symbols,
            pins_total,
            cumulative_total: None,
        }
    }
}

fn mark_in(deliveries: &[Delivery]) -> bool {
    let first_two: u16 = deliveries
        .iter()
        .take(2)
        .map(|d| u16::from(d.pins()))
        .sum();
    deliveries.first().is_some_and(Delivery::is_all_pins) || first_two == u16::from(PINS_PER_RACK)
}

// ─────────────────────────────────────────────────────────────
//  Scored
// ─────────────────────────────────────────────────────────────

/// How a completed frame earns bonus pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Ten pins on the first ball.
    Strike,
    /// Ten pins over the first two balls.
    Spare,
    /// Fewer than ten pins over two balls.
    Open,
}

/// A finished frame, read-only apart from its resolved game total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredFrame {
    kind: FrameKind,
    deliveries: Vec<Delivery>,
    symbols: Vec<Symbol>,
    pins_total: u16,
    cumulative_total: Option<u16>,
}

impl ScoredFrame {
    /// Returns the frame kind.
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Whether this is the tenth frame.
    pub fn is_last_frame(&self) -> bool {
        self.kind == FrameKind::Last
    }

    /// Recorded deliveries.
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Pins knocked down on the `index`th ball of this frame.
    pub fn pins_at(&self, index: usize) -> Option<u16> {
        self.deliveries.get(index).map(|d| u16::from(d.pins()))
    }

    /// Scoreboard symbols, left to right.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Pins knocked down in this frame alone.
    pub fn pins_total(&self) -> u16 {
        self.pins_total
    }

    /// Strike, spare or open.
    pub fn mark(&self) -> Mark {
        if self.deliveries.first().is_some_and(Delivery::is_all_pins) {
            Mark::Strike
        } else if mark_in(&self.deliveries) {
            Mark::Spare
        } else {
            Mark::Open
        }
    }

    /// Whether the frame was a strike or spare.
    pub fn mark_achieved(&self) -> bool {
        self.mark() != Mark::Open
    }

    /// Running game score through this frame, once it can be known.
    pub fn cumulative_total(&self) -> Option<u16> {
        self.cumulative_total
    }

    /// Records the resolved game total.
    pub(super) fn resolve(&mut self, total: u16) {
        self.cumulative_total = Some(total);
    }
}
