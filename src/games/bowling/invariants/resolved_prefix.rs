//! Resolved prefix invariant: game totals are assigned strictly in order.

use super::super::Game;
use super::Invariant;

/// Invariant: the frames with a game total are exactly those before the
/// scorer's cursor.
///
/// A frame is never resolved while an earlier one is still waiting on bonus
/// balls, and the cursor never runs ahead of the bowled frames.
pub struct ResolvedPrefixInvariant;

impl Invariant<Game> for ResolvedPrefixInvariant {
    fn holds(game: &Game) -> bool {
        let cursor = game.cursor();
        let frames = game.frames();

        cursor <= frames.len()
            && frames
                .iter()
                .enumerate()
                .all(|(i, frame)| frame.cumulative_total().is_some() == (i < cursor))
    }

    fn description() -> &'static str {
        "Only frames before the resolution cursor have game totals"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(ResolvedPrefixInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_pending_strikes_hold() {
        let game = Game::replay(["10", "10"]).unwrap();
        assert_eq!(game.cursor(), 0);
        assert!(ResolvedPrefixInvariant::holds(&game));
    }

    #[test]
    fn test_out_of_order_total_violates() {
        let mut game = Game::replay(["10", "3", "4", "5", "5"]).unwrap();
        assert_eq!(game.cursor(), 2);

        // Resolve the pending spare behind the scorer's back
        game.frames_mut()[2].resolve(40);
        assert!(!ResolvedPrefixInvariant::holds(&game));
    }
}
