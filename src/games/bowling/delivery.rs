//! First-class delivery types for ten-pin bowling.
//!
//! A delivery is one ball thrown within a frame. Tokens typed by the player
//! are parsed into deliveries before the frame decides whether the pin count
//! is legal at the current position.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of pins in a full rack.
pub const PINS_PER_RACK: u8 = 10;

/// Token that records a foul.
pub const FOUL_TOKEN: &str = "F";

/// Prefix that marks a split, followed by a single digit.
pub const SPLIT_PREFIX: char = 'S';

/// Longest token the grammar can produce (`"10"` or `"S9"`).
const MAX_TOKEN_LEN: usize = 2;

/// One recorded throw.
///
/// Fouls are normalized to zero pins. Splits keep their pin count; the flag
/// only affects how the delivery is drawn on the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Delivery {
    pins: u8,
    foul: bool,
    split: bool,
}

impl Delivery {
    /// A delivery that knocked down `pins` pins.
    pub fn pins_down(pins: u8) -> Self {
        Self {
            pins,
            foul: false,
            split: false,
        }
    }

    /// A foul, scored as zero pins.
    pub fn foul() -> Self {
        Self {
            pins: 0,
            foul: true,
            split: false,
        }
    }

    /// A delivery that left a split after knocking down `pins` pins.
    pub fn split(pins: u8) -> Self {
        Self {
            pins,
            foul: false,
            split: true,
        }
    }

    /// Parses a scoreboard token.
    ///
    /// Accepts `F`, a decimal `0`..`10`, or `S` followed by one digit.
    /// Only the grammar is checked here; whether the pins still stand is the
    /// frame's decision.
    #[instrument]
    pub fn parse(token: &str) -> Result<Self, DeliveryError> {
        if token == FOUL_TOKEN {
            return Ok(Self::foul());
        }

        if token.is_empty() || token.len() > MAX_TOKEN_LEN {
            return Err(DeliveryError::Malformed(token.to_string()));
        }

        if let Some(payload) = token.strip_prefix(SPLIT_PREFIX) {
            let mut chars = payload.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_digit() => Ok(Self::split(c as u8 - b'0')),
                _ => Err(DeliveryError::Malformed(token.to_string())),
            };
        }

        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DeliveryError::Malformed(token.to_string()));
        }

        // At most two ASCII digits, so this always fits in a u8.
        let pins = token
            .bytes()
            .fold(0u8, |acc, b| acc * 10 + (b - b'0'));

        if pins > PINS_PER_RACK {
            return Err(DeliveryError::OutOfRange {
                pins,
                max: PINS_PER_RACK,
            });
        }

        Ok(Self::pins_down(pins))
    }

    /// Pins knocked down.
    pub fn pins(&self) -> u8 {
        self.pins
    }

    /// Whether the delivery was a foul.
    pub fn is_foul(&self) -> bool {
        self.foul
    }

    /// Whether the delivery left a split.
    pub fn is_split(&self) -> bool {
        self.split
    }

    /// Whether every pin of a fresh rack went down.
    pub fn is_all_pins(&self) -> bool {
        self.pins == PINS_PER_RACK
    }
}

impl std::fmt::Display for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.foul {
            write!(f, "{}", FOUL_TOKEN)
        } else if self.split {
            write!(f, "{}{}", SPLIT_PREFIX, self.pins)
        } else {
            write!(f, "{}", self.pins)
        }
    }
}

/// Why a frame in its current position closed to further deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ClosedReason {
    /// The frame already holds all the deliveries it can.
    #[display("frame is already complete")]
    FrameComplete,

    /// Third ball of the last frame without a strike or spare.
    #[display("no bonus delivery without a strike or spare")]
    NoBonusBall,

    /// All ten frames have been played.
    #[display("game is over")]
    GameOver,
}

/// Error that can occur when recording a delivery.
///
/// Every variant leaves the frame exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DeliveryError {
    /// The token is outside the delivery grammar.
    #[display("'{}' is not a valid delivery", _0)]
    Malformed(String),

    /// The token is well formed but more pins than are standing.
    #[display("{} pins is more than the {} standing", pins, max)]
    OutOfRange {
        /// Pins claimed by the token.
        pins: u8,
        /// Most pins the delivery may knock down here.
        max: u8,
    },

    /// No delivery is allowed at this position.
    #[display("Delivery not allowed: {}", _0)]
    IllegalPosition(ClosedReason),
}

impl std::error::Error for DeliveryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_counts() {
        for pins in 0..=10u8 {
            let delivery = Delivery::parse(&pins.to_string()).unwrap();
            assert_eq!(delivery.pins(), pins);
            assert!(!delivery.is_foul());
            assert!(!delivery.is_split());
        }
    }

    #[test]
    fn test_parse_foul() {
        let delivery = Delivery::parse("F").unwrap();
        assert_eq!(delivery.pins(), 0);
        assert!(delivery.is_foul());
    }

    #[test]
    fn test_parse_split() {
        let delivery = Delivery::parse("S8").unwrap();
        assert_eq!(delivery.pins(), 8);
        assert!(delivery.is_split());
        assert_eq!(Delivery::parse("S0").unwrap().pins(), 0);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for token in ["", "NotGood", "Evil", "123", "S123", "S12", "S", "A", "9!", "f", "-1", " 5", "SS"] {
            assert!(
                matches!(Delivery::parse(token), Err(DeliveryError::Malformed(_))),
                "token {:?} should be malformed",
                token
            );
        }
        let long = "1".repeat(28);
        assert!(matches!(Delivery::parse(&long), Err(DeliveryError::Malformed(_))));
    }

    #[test]
    fn test_parse_rejects_eleven_as_out_of_range() {
        assert_eq!(
            Delivery::parse("11"),
            Err(DeliveryError::OutOfRange { pins: 11, max: 10 })
        );
    }

    #[test]
    fn test_display_round_trips_token() {
        assert_eq!(Delivery::foul().to_string(), "F");
        assert_eq!(Delivery::split(4).to_string(), "S4");
        assert_eq!(Delivery::pins_down(10).to_string(), "10");
    }
}
