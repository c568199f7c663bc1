//! Deferred score resolution.
//!
//! A strike's total depends on the next two balls and a spare's on the next
//! one, so a frame's game total is often unknown when the frame ends. The
//! scorer keeps a cursor at the first unresolved frame and moves it forward
//! whenever enough later deliveries exist.

use super::frame::{Mark, ScoredFrame};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// One frame whose game total became known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFrame {
    /// Frame index, 0-based.
    pub index: usize,
    /// Frame pins plus bonus pins.
    pub frame_total: u16,
    /// Game total through this frame.
    pub cumulative_total: u16,
}

/// Result of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    /// First frame still unresolved.
    pub cursor: usize,
    /// Frames resolved by this pass, in order.
    pub resolved: Vec<ResolvedFrame>,
}

/// Resolves as many frames as the played deliveries allow.
///
/// `frames` holds finalized frames in game order; only `frames[..=last_played]`
/// is looked at. Resolution stops at the first frame whose bonus balls have
/// not been bowled yet, leaving `cursor` on it.
///
/// # Panics
///
/// Panics if `last_played` is outside `frames`, or if `cursor` is past the
/// resolvable prefix (the frame before it has no total).
#[instrument(skip(frames), fields(frames = frames.len()))]
pub fn resolve(frames: &[ScoredFrame], cursor: usize, last_played: usize) -> Resolution {
    assert!(
        last_played < frames.len(),
        "last played frame {} is beyond the {} frames bowled",
        last_played,
        frames.len()
    );
    let played = &frames[..=last_played];

    let mut base = match cursor {
        0 => 0,
        _ => played
            .get(cursor - 1)
            .and_then(ScoredFrame::cumulative_total)
            .unwrap_or_else(|| panic!("cursor {} is past the resolved frames", cursor)),
    };

    let mut resolution = Resolution {
        cursor,
        resolved: Vec::new(),
    };

    while let Some(frame) = played.get(resolution.cursor) {
        let Some(frame_total) = frame_total(played, resolution.cursor) else {
            trace!(cursor = resolution.cursor, "Waiting on bonus deliveries");
            break;
        };

        base += frame_total;
        debug!(
            index = resolution.cursor,
            mark = ?frame.mark(),
            frame_total,
            cumulative_total = base,
            "Frame resolved"
        );
        resolution.resolved.push(ResolvedFrame {
            index: resolution.cursor,
            frame_total,
            cumulative_total: base,
        });
        resolution.cursor += 1;
    }

    resolution
}

/// Pins credited to frame `index`, or `None` while bonus balls are missing.
fn frame_total(played: &[ScoredFrame], index: usize) -> Option<u16> {
    let frame = &played[index];

    // The tenth frame bowls its own bonus balls.
    if frame.is_last_frame() {
        return Some(frame.pins_total());
    }

    match frame.mark() {
        Mark::Open => Some(frame.pins_total()),
        Mark::Spare => {
            let next = played.get(index + 1)?;
            Some(frame.pins_total() + next.pins_at(0)?)
        }
        Mark::Strike => {
            let next = played.get(index + 1)?;
            if let Some(second) = next.pins_at(1) {
                return Some(frame.pins_total() + next.pins_at(0)? + second);
            }
            // Strike followed by strike: the bonus reaches one frame further.
            let after = played.get(index + 2)?;
            Some(frame.pins_total() + next.pins_total() + after.pins_at(0)?)
        }
    }
}

/// Carries the resolution cursor between passes.
///
/// The cursor is the only state; every total lives on the frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameScorer {
    cursor: usize,
}

impl GameScorer {
    /// Creates a scorer with nothing resolved.
    pub fn new() -> Self {
        Self::default()
    }

    /// First unresolved frame.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Resolves what it can and writes the totals onto the frames.
    ///
    /// Returns the new cursor. Calling again without new deliveries is a
    /// no-op.
    #[instrument(skip(self, frames), fields(cursor = self.cursor))]
    pub fn advance(&mut self, frames: &mut [ScoredFrame], last_played: usize) -> usize {
        let resolution = resolve(frames, self.cursor, last_played);
        for resolved in &resolution.resolved {
            frames[resolved.index].resolve(resolved.cumulative_total);
        }
        self.cursor = resolution.cursor;
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::bowling::frame::Frame;

    fn scored(frames: &[&[&str]]) -> Vec<ScoredFrame> {
        frames
            .iter()
            .enumerate()
            .map(|(i, tokens)| {
                let mut frame = if i == 9 {
                    Frame::last()
                } else {
                    Frame::normal()
                };
                for token in *tokens {
                    frame.record_delivery(token).unwrap();
                }
                frame.finalize()
            })
            .collect()
    }

    #[test]
    fn test_open_frames_resolve_immediately() {
        let frames = scored(&[&["7", "2"], &["3", "4"]]);
        let resolution = resolve(&frames, 0, 1);
        assert_eq!(resolution.cursor, 2);
        assert_eq!(
            resolution
                .resolved
                .iter()
                .map(|r| r.cumulative_total)
                .collect::<Vec<_>>(),
            vec![9, 16]
        );
    }

    #[test]
    fn test_spare_waits_for_next_frame() {
        let frames = scored(&[&["5", "5"], &["3", "4"]]);
        let stuck = resolve(&frames, 0, 0);
        assert_eq!(stuck.cursor, 0);
        assert!(stuck.resolved.is_empty());

        let resolution = resolve(&frames, 0, 1);
        assert_eq!(resolution.cursor, 2);
        assert_eq!(resolution.resolved[0].frame_total, 13);
        assert_eq!(resolution.resolved[1].cumulative_total, 20);
    }

    #[test]
    fn test_strike_uses_next_two_balls() {
        let frames = scored(&[&["10"], &["3", "4"]]);
        let resolution = resolve(&frames, 0, 1);
        assert_eq!(resolution.resolved[0].frame_total, 17);
        assert_eq!(resolution.resolved[1].cumulative_total, 24);
    }

    #[test]
    fn test_double_strike_reaches_two_frames_ahead() {
        let frames = scored(&[&["10"], &["10"], &["7", "2"]]);

        let stuck = resolve(&frames, 0, 1);
        assert_eq!(stuck.cursor, 0);

        let resolution = resolve(&frames, 0, 2);
        assert_eq!(resolution.cursor, 3);
        let totals: Vec<_> = resolution.resolved.iter().map(|r| r.cumulative_total).collect();
        assert_eq!(totals, vec![27, 46, 55]);
    }

    #[test]
    fn test_advance_is_idempotent() {
        let mut frames = scored(&[&["10"], &["5", "5"], &["3", "0"]]);
        let mut scorer = GameScorer::new();

        assert_eq!(scorer.advance(&mut frames, 0), 0);
        assert_eq!(scorer.advance(&mut frames, 1), 1);
        assert_eq!(frames[0].cumulative_total(), Some(20));
        assert_eq!(frames[1].cumulative_total(), None);

        assert_eq!(scorer.advance(&mut frames, 2), 3);
        assert_eq!(scorer.advance(&mut frames, 2), 3);
        let totals: Vec<_> = frames.iter().map(ScoredFrame::cumulative_total).collect();
        assert_eq!(totals, vec![Some(20), Some(33), Some(36)]);
    }

    #[test]
    fn test_tenth_frame_uses_own_pins() {
        let gutter: &[&str] = &["0", "0"];
        let mut tokens = vec![gutter; 9];
        tokens.push(&["10", "10", "10"]);
        let frames = scored(&tokens);
        let resolution = resolve(&frames, 0, 9);
        assert_eq!(resolution.cursor, 10);
        assert_eq!(resolution.resolved[9].cumulative_total, 30);
    }

    #[test]
    fn test_ninth_frame_strike_reads_tenth_frame_balls() {
        let gutter: &[&str] = &["0", "0"];
        let mut tokens = vec![gutter; 8];
        tokens.push(&["10"]);
        tokens.push(&["10", "10", "10"]);
        let frames = scored(&tokens);
        let resolution = resolve(&frames, 0, 9);
        assert_eq!(resolution.resolved[8].frame_total, 30);
        assert_eq!(resolution.resolved[9].cumulative_total, 60);
    }

    #[test]
    #[should_panic(expected = "past the resolved frames")]
    fn test_cursor_past_resolved_prefix_panics() {
        let frames = scored(&[&["5", "5"], &["3", "4"]]);
        let _ = resolve(&frames, 1, 1);
    }
}
