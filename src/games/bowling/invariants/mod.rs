//! First-class invariants for a bowling game.
//!
//! Invariants are logical properties that must hold after every accepted
//! delivery. They are testable independently and are asserted in debug
//! builds by [`assert_invariants`].

use super::game::Game;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod monotonic_totals;
pub mod rack_replay;
pub mod resolved_prefix;

pub use monotonic_totals::MonotonicTotalsInvariant;
pub use rack_replay::RackReplayInvariant;
pub use resolved_prefix::ResolvedPrefixInvariant;

/// All bowling invariants as a composable set.
pub type BowlingInvariants = (
    ResolvedPrefixInvariant,
    MonotonicTotalsInvariant,
    RackReplayInvariant,
);

/// Asserts that all game invariants hold (panics on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    if cfg!(debug_assertions)
        && let Err(violations) = BowlingInvariants::check_all(game)
    {
        for violation in &violations {
            warn!(description = %violation.description, "Invariant violated");
        }
        panic!("{} game invariant(s) violated: {:?}", violations.len(), violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(BowlingInvariants::check_all(&Game::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_a_game() {
        let tokens = [
            "10", "10", "10", "7", "2", "S8", "2", "F", "9", "10", "7", "3", "9", "0", "10",
            "10", "8",
        ];
        let mut game = Game::new();
        for token in tokens {
            game.record(token).unwrap();
            assert!(BowlingInvariants::check_all(&game).is_ok());
        }
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (ResolvedPrefixInvariant, MonotonicTotalsInvariant);
        let game = Game::replay(["5", "5", "3"]).unwrap();
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
