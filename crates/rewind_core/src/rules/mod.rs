//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The controller composes
//! them after every move; they never touch history.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, find_winning_line};

use crate::types::{Board, Outcome};
use tracing::instrument;

/// Evaluates the board: first winning line in scan order, else draw on a
/// full board, else `None`.
///
/// Returns the winning line alongside the outcome so callers can highlight it.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<(Outcome, Option<[usize; 3]>)> {
    if let Some((mark, line)) = find_winning_line(board) {
        return Some((Outcome::Won(mark), Some(line)));
    }
    if is_full(board) {
        return Some((Outcome::Draw, None));
    }
    None
}
