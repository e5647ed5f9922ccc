//! Application state and logic.

use crate::config::Palette;
use ratatui::layout::Rect;
use rewind_core::{
    BOARD_SIZE, ClickOutcome, GameController, HistoryEntry, HistoryTarget, IgnoreReason, Position,
    move_position,
};
use tracing::{info, instrument, warn};

use super::input::{Action, Focus, move_cursor};

/// Screen regions recorded by the last draw, used to resolve mouse clicks.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    /// Area of each board square, by index.
    pub squares: Vec<(Rect, usize)>,
    /// Area of each visible history row.
    pub history: Vec<(Rect, HistoryTarget)>,
}

impl HitMap {
    fn square_at(&self, column: u16, row: u16) -> Option<usize> {
        self.squares
            .iter()
            .find(|(area, _)| contains(*area, column, row))
            .map(|(_, index)| *index)
    }

    fn history_at(&self, column: u16, row: u16) -> Option<HistoryTarget> {
        self.history
            .iter()
            .find(|(area, _)| contains(*area, column, row))
            .map(|(_, target)| *target)
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: GameController,
    palette: Palette,
    cursor: Position,
    focus: Focus,
    history_cursor: usize,
    message: String,
    hit_map: HitMap,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(palette))]
    pub fn new(reverse_history: bool, palette: Palette) -> Self {
        Self {
            controller: GameController::with_reversed_list(reverse_history),
            palette,
            cursor: Position::Center,
            focus: Focus::Board,
            history_cursor: 0,
            message: "Arrows + Enter or 1-9 to play. Tab switches to history.".to_string(),
            hit_map: HitMap::default(),
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Gets the theme colors.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the row under the history cursor.
    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    /// Gets the last feedback message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Checks whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Fresh history list from the controller.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.controller.history_list()
    }

    /// Status line: winner, draw, or who moves next.
    pub fn status_line(&self) -> String {
        match self.controller.winner() {
            Some(outcome) => outcome.to_string(),
            None => format!("Next player: {}", self.controller.next_player()),
        }
    }

    /// Stores the regions from the latest draw.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Applies a decoded key action.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::PlayCursor => self.play(self.cursor.to_index()),
            Action::Play(index) => {
                if let Some(position) = Position::from_index(index) {
                    self.cursor = position;
                }
                self.play(index);
            }
            Action::HistoryUp => self.history_cursor = self.history_cursor.saturating_sub(1),
            Action::HistoryDown => {
                let last = self.history().len().saturating_sub(1);
                self.history_cursor = (self.history_cursor + 1).min(last);
            }
            Action::OpenHistory => {
                if let Some(entry) = self.history().get(self.history_cursor) {
                    self.navigate(*entry.target());
                }
            }
            Action::GoToStart => self.navigate(HistoryTarget::GameStart),
            Action::ReverseHistory => {
                self.controller.toggle_reverse();
                let last = self.history().len().saturating_sub(1);
                self.history_cursor = last - self.history_cursor.min(last);
                self.message = if self.controller.is_reversed() {
                    "History shown newest first".to_string()
                } else {
                    "History shown oldest first".to_string()
                };
            }
            Action::SwitchFocus => self.focus = self.focus.toggle(),
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Handles a left click at a terminal cell.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if let Some(index) = self.hit_map.square_at(column, row) {
            self.focus = Focus::Board;
            if let Some(position) = Position::from_index(index) {
                self.cursor = position;
            }
            self.play(index);
        } else if let Some(target) = self.hit_map.history_at(column, row) {
            self.focus = Focus::History;
            self.navigate(target);
        }
    }

    fn play(&mut self, index: usize) {
        let at = move_position(index);
        self.message = match self.controller.click(index) {
            ClickOutcome::Applied { mark, outcome } => match outcome {
                Some(outcome) => format!("{} played {}. {}", mark, at, outcome),
                None => format!("{} played {}", mark, at),
            },
            ClickOutcome::Ignored(IgnoreReason::Occupied) => format!("Square {} is taken", at),
            ClickOutcome::Ignored(IgnoreReason::GameOver) => {
                "Game over. Rewind with the history list or press g.".to_string()
            }
            ClickOutcome::Ignored(IgnoreReason::OutOfRange) => {
                format!("No square {} (board has {})", index + 1, BOARD_SIZE)
            }
        };
        self.follow_selection();
    }

    fn navigate(&mut self, target: HistoryTarget) {
        match self.controller.go_to_history(target) {
            Ok(()) => {
                self.message = match target {
                    HistoryTarget::GameStart => "Back at game start".to_string(),
                    HistoryTarget::Move(n) => format!("Showing move #{}", n),
                };
                self.follow_selection();
            }
            Err(e) => {
                warn!(error = %e, "History navigation failed");
                self.message = format!("Cannot open history entry: {}", e);
            }
        }
    }

    /// Keeps the history cursor on the selected row, or in range when none is.
    fn follow_selection(&mut self) {
        let entries = self.history();
        let selected = entries.iter().position(|e| *e.selected());
        self.history_cursor = match selected {
            Some(row) => row,
            None if self.controller.is_reversed() => 0,
            None => entries.len().saturating_sub(1),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn palette() -> Palette {
        Palette {
            normal: Color::Gray,
            highlight: Color::Blue,
            cursor: Color::Yellow,
            selected: Color::Cyan,
        }
    }

    #[test]
    fn test_play_by_digit_moves_cursor() {
        let mut app = App::new(false, palette());
        app.handle_action(Action::Play(0));
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.controller().squares()[0].label(), "X");
        assert_eq!(app.message(), "X played 1, 1");
        assert_eq!(app.status_line(), "Next player: Player 2 (O)");
    }

    #[test]
    fn test_occupied_feedback() {
        let mut app = App::new(false, palette());
        app.handle_action(Action::PlayCursor);
        app.handle_action(Action::PlayCursor);
        assert_eq!(app.message(), "Square 2, 2 is taken");
        assert_eq!(app.controller().moves_history().len(), 1);
    }

    #[test]
    fn test_history_cursor_follows_new_moves() {
        let mut app = App::new(false, palette());
        app.handle_action(Action::Play(0));
        app.handle_action(Action::Play(1));
        // Rows: start, #0, #1
        assert_eq!(app.history_cursor(), 2);

        app.handle_action(Action::HistoryUp);
        app.handle_action(Action::OpenHistory);
        let selected = app.controller().selected_history();
        assert_eq!(selected, Some(HistoryTarget::Move(0)));
        assert_eq!(app.history_cursor(), 1);
        assert_eq!(app.status_line(), "Next player: Player 2 (O)");
    }

    #[test]
    fn test_reverse_keeps_cursor_on_same_entry() {
        let mut app = App::new(false, palette());
        app.handle_action(Action::Play(0));
        app.handle_action(Action::Play(1));
        app.handle_action(Action::HistoryUp);
        let before = *app.history()[app.history_cursor()].target();
        app.handle_action(Action::ReverseHistory);
        assert_eq!(app.history()[app.history_cursor()].target(), &before);
    }

    #[test]
    fn test_go_to_start_and_status() {
        let mut app = App::new(false, palette());
        for index in [0, 3, 1, 4, 2] {
            app.handle_action(Action::Play(index));
        }
        assert_eq!(app.status_line(), "Winner: X");
        app.handle_action(Action::GoToStart);
        assert_eq!(app.status_line(), "Next player: Player 1 (X)");
        assert_eq!(app.history_cursor(), 0);
    }

    #[test]
    fn test_click_resolves_through_hit_map() {
        let mut app = App::new(false, palette());
        app.set_hit_map(HitMap {
            squares: vec![(Rect::new(0, 0, 5, 3), 0), (Rect::new(6, 0, 5, 3), 1)],
            history: vec![(Rect::new(20, 0, 10, 1), HistoryTarget::GameStart)],
        });
        app.handle_click(7, 1);
        assert_eq!(app.controller().squares()[1].label(), "X");
        assert_eq!(app.focus(), Focus::Board);

        app.handle_click(25, 0);
        assert!(app.controller().squares().iter().all(|s| s.is_empty()));
        assert_eq!(app.focus(), Focus::History);

        app.handle_click(100, 100);
        assert_eq!(app.controller().moves_history().len(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(false, palette());
        app.handle_action(Action::Quit);
        assert!(app.should_quit());
    }
}
