//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark};
use tracing::instrument;

/// Winning lines in scan order: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Finds the first line holding three equal marks.
///
/// Lines are scanned in [`LINES`] order, so the reported line is stable
/// when a board holds more than one.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Mark, [usize; 3])> {
    let squares = board.squares();
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let mark = squares[a].mark()?;
        (squares[b].mark() == Some(mark) && squares[c].mark() == Some(mark))
            .then_some((mark, line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark::{O, X};

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        #[rustfmt::skip]
        let board = Board::from_marks([
            Some(X), Some(X), Some(X),
            None, None, None,
            None, None, None,
        ]);
        assert_eq!(find_winning_line(&board), Some((X, [0, 1, 2])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        #[rustfmt::skip]
        let board = Board::from_marks([
            None, None, Some(O),
            None, Some(O), None,
            Some(O), None, None,
        ]);
        assert_eq!(find_winning_line(&board), Some((O, [2, 4, 6])));
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Top row and left column both complete; the row is scanned first.
        #[rustfmt::skip]
        let board = Board::from_marks([
            Some(X), Some(X), Some(X),
            Some(X), Some(O), Some(O),
            Some(X), Some(O), Some(O),
        ]);
        assert_eq!(find_winning_line(&board), Some((X, [0, 1, 2])));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        #[rustfmt::skip]
        let board = Board::from_marks([
            Some(X), Some(O), Some(X),
            None, None, None,
            None, None, None,
        ]);
        assert_eq!(find_winning_line(&board), None);
    }
}
