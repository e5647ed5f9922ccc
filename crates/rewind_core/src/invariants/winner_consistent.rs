//! Winner consistency invariant: the stored result matches the board.

use super::Invariant;
use crate::controller::GameController;
use crate::rules;

/// Invariant: the recorded outcome equals what the rules read off the board.
pub struct WinnerConsistentInvariant;

impl Invariant<GameController> for WinnerConsistentInvariant {
    fn holds(controller: &GameController) -> bool {
        let evaluated = rules::evaluate(controller.board());
        evaluated.map(|(outcome, _)| outcome) == controller.winner()
    }

    fn description() -> &'static str {
        "Recorded winner matches the board"
    }
}
