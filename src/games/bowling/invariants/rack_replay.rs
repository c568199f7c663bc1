//! Rack replay invariant: every recorded delivery was legal when bowled.

use super::super::{Delivery, FRAMES_PER_GAME, Frame, FrameKind, Game};
use super::Invariant;

/// Invariant: replaying each frame's deliveries into a fresh frame of the
/// same kind accepts all of them.
///
/// Scored frames must also come out complete with the same pin total, and
/// only the tenth frame may be of the last kind.
pub struct RackReplayInvariant;

fn replays(kind: FrameKind, recorded: &[Delivery]) -> Option<Frame> {
    let mut frame = Frame::new(kind);
    for delivery in recorded {
        frame.record(*delivery).ok()?;
    }
    Some(frame)
}

fn expected_kind(index: usize) -> FrameKind {
    if index + 1 == FRAMES_PER_GAME {
        FrameKind::Last
    } else {
        FrameKind::Normal
    }
}

impl Invariant<Game> for RackReplayInvariant {
    fn holds(game: &Game) -> bool {
        let scored_ok = game.frames().iter().enumerate().all(|(i, scored)| {
            scored.kind() == expected_kind(i)
                && replays(scored.kind(), scored.deliveries()).is_some_and(|frame| {
                    frame.is_complete() && frame.pins_total() == scored.pins_total()
                })
        });

        let current_ok = game.current_frame().is_none_or(|current| {
            current.kind() == expected_kind(game.frames().len())
                && replays(current.kind(), current.deliveries()).is_some()
        });

        scored_ok && current_ok
    }

    fn description() -> &'static str {
        "Every recorded delivery fits the rack it was bowled at"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_game_holds() {
        let game = Game::replay(["10"; 12]).unwrap();
        assert!(RackReplayInvariant::holds(&game));
    }

    #[test]
    fn test_partial_frame_holds() {
        let game = Game::replay(["10", "4"]).unwrap();
        assert!(RackReplayInvariant::holds(&game));
    }
}
