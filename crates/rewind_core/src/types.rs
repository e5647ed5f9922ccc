//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player 1, always moves first.
    X,
    /// Player 2.
    O,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the single-letter label written into a square.
    pub fn label(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }

    /// Returns the display label naming the player who owns this mark.
    pub fn player_label(self) -> &'static str {
        match self {
            Mark::X => "Player 1 (X)",
            Mark::O => "Player 2 (O)",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Display hint carried by each square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SquareColor {
    /// Regular square.
    #[default]
    Normal,
    /// Part of the winning line.
    Highlight,
}

impl SquareColor {
    /// Returns the color hint string handed to renderers that want it verbatim.
    pub fn hint(self) -> &'static str {
        match self {
            SquareColor::Normal => "#444444",
            SquareColor::Highlight => "blue",
        }
    }
}

/// One cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    label: Option<Mark>,
    index: usize,
    color: SquareColor,
}

impl Square {
    /// Creates an empty square at `index`.
    pub fn empty(index: usize) -> Self {
        Self {
            label: None,
            index,
            color: SquareColor::Normal,
        }
    }

    /// Returns the mark in this square, if any.
    pub fn mark(&self) -> Option<Mark> {
        self.label
    }

    /// Returns the label text: `""`, `"X"` or `"O"`.
    pub fn label(&self) -> &'static str {
        self.label.map_or("", Mark::label)
    }

    /// Returns the fixed board index (0-8).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the display hint.
    pub fn color(&self) -> SquareColor {
        self.color
    }

    /// Checks if no mark has been written.
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: std::array::from_fn(Square::empty),
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Checks if every square carries a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Writes `mark` into an empty square. Returns false when the index is
    /// out of range or the square is already taken.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) -> bool {
        match self.squares.get_mut(index) {
            Some(square) if square.label.is_none() => {
                square.label = Some(mark);
                true
            }
            _ => false,
        }
    }

    /// Marks the given squares with the highlight hint.
    pub(crate) fn highlight(&mut self, line: [usize; 3]) {
        for index in line {
            if let Some(square) = self.squares.get_mut(index) {
                square.color = SquareColor::Highlight;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn from_marks(marks: [Option<Mark>; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (square, mark) in board.squares.iter_mut().zip(marks) {
            square.label = mark;
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Three in a row for this mark.
    Won(Mark),
    /// Full board, no line.
    Draw,
}

impl Outcome {
    /// Returns the winner label: `"X"`, `"O"` or `"draw"`.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Won(mark) => mark.label(),
            Outcome::Draw => "draw",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(mark) => write!(f, "Winner: {}", mark),
            Outcome::Draw => f.write_str("Draw"),
        }
    }
}

/// Formats an optional outcome as the winner string (`""` while in progress).
pub fn winner_label(outcome: Option<Outcome>) -> &'static str {
    outcome.map_or("", Outcome::label)
}
