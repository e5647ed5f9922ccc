//! Named board positions and their human-readable coordinates.

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in board order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based column.
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Creates position from zero-based row and column.
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

    /// 1-indexed `"column, row"` label recorded with each move.
    pub fn coordinates(self) -> &'static str {
        match self {
            Position::TopLeft => "1, 1",
            Position::TopCenter => "2, 1",
            Position::TopRight => "3, 1",
            Position::MiddleLeft => "1, 2",
            Position::Center => "2, 2",
            Position::MiddleRight => "3, 2",
            Position::BottomLeft => "1, 3",
            Position::BottomCenter => "2, 3",
            Position::BottomRight => "3, 3",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.coordinates())
    }
}

/// Maps a board index to its `"column, row"` label; unknown indices map to `""`.
#[instrument]
pub fn move_position(index: usize) -> &'static str {
    Position::from_index(index)
        .map_or("", Position::coordinates)
}
