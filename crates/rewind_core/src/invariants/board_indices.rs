//! Board shape invariant: nine squares with fixed, unique indices.

use super::Invariant;
use crate::controller::GameController;

/// Invariant: square `i` of the live board reports index `i`.
pub struct BoardIndicesInvariant;

impl Invariant<GameController> for BoardIndicesInvariant {
    fn holds(controller: &GameController) -> bool {
        controller
            .squares()
            .iter()
            .enumerate()
            .all(|(i, square)| square.index() == i)
    }

    fn description() -> &'static str {
        "Board squares keep indices 0..8 in order"
    }
}
