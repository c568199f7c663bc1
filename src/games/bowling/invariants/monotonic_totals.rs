//! Monotonic totals invariant: the running score never goes down.

use super::super::Game;
use super::Invariant;

/// Invariant: each resolved game total is at least the previous one plus
/// the frame's own pins.
///
/// Bonus pins can only add to a frame, so a smaller step means a total was
/// computed from the wrong deliveries.
pub struct MonotonicTotalsInvariant;

impl Invariant<Game> for MonotonicTotalsInvariant {
    fn holds(game: &Game) -> bool {
        let mut previous = 0u16;
        for frame in game.frames() {
            let Some(total) = frame.cumulative_total() else {
                break;
            };
            if total < previous + frame.pins_total() {
                return false;
            }
            previous = total;
        }
        true
    }

    fn description() -> &'static str {
        "Game totals never decrease and include each frame's own pins"
    }
}
