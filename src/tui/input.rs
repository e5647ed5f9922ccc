//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rewind_core::Position;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move history list.
    History,
}

impl Focus {
    /// Returns the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// A user command decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Play the square under the cursor.
    PlayCursor,
    /// Play a square directly by index.
    Play(usize),
    /// Move the history cursor up one row.
    HistoryUp,
    /// Move the history cursor down one row.
    HistoryDown,
    /// Navigate to the history row under the cursor.
    OpenHistory,
    /// Rewind to the empty board.
    GoToStart,
    /// Flip the history list order.
    ReverseHistory,
    /// Switch focus between board and history.
    SwitchFocus,
    /// Leave the application.
    Quit,
}

/// Decodes a key press for the focused panel.
pub fn map_key(focus: Focus, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),
        KeyCode::Char('r') => Some(Action::ReverseHistory),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::GoToStart),
        KeyCode::Char(c @ '1'..='9') => Some(Action::Play(usize::from(c as u8 - b'1'))),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => match focus {
            Focus::Board => Some(Action::MoveCursor(code)),
            Focus::History => match code {
                KeyCode::Up => Some(Action::HistoryUp),
                KeyCode::Down => Some(Action::HistoryDown),
                _ => None,
            },
        },
        KeyCode::Enter | KeyCode::Char(' ') => match focus {
            Focus::Board => Some(Action::PlayCursor),
            Focus::History => Some(Action::OpenHistory),
        },
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let next = match key {
        KeyCode::Up => Position::from_row_column(row.wrapping_sub(1), column),
        KeyCode::Down => Position::from_row_column(row + 1, column),
        KeyCode::Left => Position::from_row_column(row, column.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_column(row, column + 1),
        _ => None,
    };
    next.unwrap_or(cursor)
}
