//! History coverage invariant: the live step always has a snapshot.

use super::Invariant;
use crate::controller::GameController;

/// Invariant: if a step is active, history holds an item for it.
///
/// After a click the history ends exactly at the step; after navigation it
/// may extend past it until the next click truncates the tail.
pub struct HistoryCoversStepInvariant;

impl Invariant<GameController> for HistoryCoversStepInvariant {
    fn holds(controller: &GameController) -> bool {
        controller
            .step_number()
            .is_none_or(|step| step < controller.moves_history().len())
    }

    fn description() -> &'static str {
        "Every applied step has a history snapshot"
    }
}
