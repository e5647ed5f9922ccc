//! First-class invariants for the game controller.
//!
//! Invariants are logical properties that must hold after every command.
//! They are testable independently and checked in debug builds.

pub mod board_indices;
pub mod history_covers_step;
pub mod winner_consistent;

pub use board_indices::BoardIndicesInvariant;
pub use history_covers_step::HistoryCoversStepInvariant;
pub use winner_consistent::WinnerConsistentInvariant;

use crate::controller::GameController;
use tracing::error;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose at the type level.
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
        let violations: Vec<InvariantViolation> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation { description })
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All controller invariants as a composable set.
pub type ControllerInvariants = (
    BoardIndicesInvariant,
    HistoryCoversStepInvariant,
    WinnerConsistentInvariant,
);

/// Panics in debug builds if any controller invariant is violated.
pub(crate) fn assert_invariants(controller: &GameController) {
    if cfg!(debug_assertions)
        && let Err(violations) = ControllerInvariants::check_all(controller)
    {
        for violation in &violations {
            error!(%violation, "Controller invariant violated");
        }
        panic!("{} controller invariant(s) violated", violations.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryTarget;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let controller = GameController::new();
        assert!(ControllerInvariants::check_all(&controller).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_play_and_rewind() {
        let mut controller = GameController::new();
        for index in [4, 0, 8, 2] {
            controller.click(index);
            assert!(ControllerInvariants::check_all(&controller).is_ok());
        }
        controller.go_to_history(HistoryTarget::Move(1)).unwrap();
        assert!(ControllerInvariants::check_all(&controller).is_ok());
        controller.go_to_history(HistoryTarget::GameStart).unwrap();
        assert!(ControllerInvariants::check_all(&controller).is_ok());
    }

    #[test]
    fn test_two_invariants_do_not_need_a_set() {
        let controller = GameController::new();
        assert!(BoardIndicesInvariant::holds(&controller));
        assert!(WinnerConsistentInvariant::holds(&controller));
    }
}
