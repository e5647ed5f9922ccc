//! The game controller: owns the live game state and its move history.
//!
//! Renderers read state through the getters and feed user actions back in
//! through [`GameController::click`] and [`GameController::go_to_history`].
//! Every command runs to completion before returning, so a renderer can
//! simply redraw after each call.

use crate::error::NavigationError;
use crate::history::{self, HistoryEntry, HistoryItem, HistoryTarget};
use crate::invariants::assert_invariants;
use crate::position::move_position;
use crate::rules;
use crate::types::{Board, Mark, Outcome, Square, winner_label};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Live state of one game: board, turn, result and step counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    squares: Board,
    current_player: Mark,
    next_player: String,
    winner: Option<Outcome>,
    step_number: Option<usize>,
}

impl GameState {
    /// Empty board, X to move, no moves played.
    pub fn new() -> Self {
        Self {
            squares: Board::new(),
            current_player: Mark::X,
            next_player: Mark::X.player_label().to_string(),
            winner: None,
            step_number: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.squares
    }

    /// Returns the mark that moves next.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the display label of the player to move next.
    pub fn next_player(&self) -> &str {
        &self.next_player
    }

    /// Returns the outcome, if the game is over.
    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    /// Index of the most recently applied move, `None` before the first move.
    pub fn step_number(&self) -> Option<usize> {
        self.step_number
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a click left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IgnoreReason {
    /// The square already holds a mark.
    #[display("square occupied")]
    Occupied,
    /// A winner or draw has been decided.
    #[display("game over")]
    GameOver,
    /// No square exists at the index.
    #[display("no such square")]
    OutOfRange,
}

/// Result of [`GameController::click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The mark was placed.
    Applied {
        /// Mark that was written.
        mark: Mark,
        /// Outcome reached by this move, if any.
        outcome: Option<Outcome>,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Tic-tac-toe controller with linear, rewindable history.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    state: GameState,
    moves_history: Vec<HistoryItem>,
    selected_history: Option<HistoryTarget>,
    reverse_list: bool,
}

impl GameController {
    /// Creates a controller with an empty board and empty history.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller whose history list starts in the given order.
    #[instrument]
    pub fn with_reversed_list(reverse_list: bool) -> Self {
        Self {
            reverse_list,
            ..Self::default()
        }
    }

    /// Returns the live state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the 9 live squares.
    pub fn squares(&self) -> &[Square; 9] {
        self.state.board().squares()
    }

    /// Returns the mark that moves next.
    pub fn current_player(&self) -> Mark {
        self.state.current_player()
    }

    /// Returns the display label of the player to move next.
    pub fn next_player(&self) -> &str {
        self.state.next_player()
    }

    /// Returns the outcome, if the game is over.
    pub fn winner(&self) -> Option<Outcome> {
        self.state.winner()
    }

    /// Winner string: `""`, `"X"`, `"O"` or `"draw"`.
    pub fn winner_label(&self) -> &'static str {
        winner_label(self.state.winner())
    }

    /// Index of the most recently applied move, `None` before the first move.
    pub fn step_number(&self) -> Option<usize> {
        self.state.step_number()
    }

    /// Step number as a signed value, `-1` before the first move.
    pub fn step_index(&self) -> isize {
        self.state.step_number().map_or(-1, |s| s as isize)
    }

    /// Returns the recorded snapshots, oldest first.
    pub fn moves_history(&self) -> &[HistoryItem] {
        &self.moves_history
    }

    /// Returns the highlighted history target, if any.
    pub fn selected_history(&self) -> Option<HistoryTarget> {
        self.selected_history
    }

    /// Checks whether the history list is shown newest first.
    pub fn is_reversed(&self) -> bool {
        self.reverse_list
    }

    /// Flips the display order of the history list.
    #[instrument(skip(self))]
    pub fn toggle_reverse(&mut self) {
        self.reverse_list = !self.reverse_list;
        debug!(reverse = self.reverse_list, "History order toggled");
    }

    /// Plays the current mark on square `index`.
    ///
    /// Occupied squares, finished games and unknown indices are ignored and
    /// leave both state and history untouched.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn click(&mut self, index: usize) -> ClickOutcome {
        let Some(square) = self.state.squares.get(index) else {
            debug!("Click outside the board ignored");
            return ClickOutcome::Ignored(IgnoreReason::OutOfRange);
        };
        if !square.is_empty() {
            debug!("Click on occupied square ignored");
            return ClickOutcome::Ignored(IgnoreReason::Occupied);
        }
        if self.state.winner.is_some() {
            debug!("Click after game over ignored");
            return ClickOutcome::Ignored(IgnoreReason::GameOver);
        }

        let mark = self.state.current_player;
        self.state.squares.place(index, mark);

        self.cut_history();
        self.increment_step();
        self.verify_winner();
        self.change_player();
        self.save_history(index);
        self.selected_history = None;

        debug_assert_eq!(
            Some(self.moves_history.len()),
            self.state.step_number.map(|s| s + 1),
            "history length must follow the step counter after a move"
        );
        assert_invariants(self);

        ClickOutcome::Applied {
            mark,
            outcome: self.state.winner,
        }
    }

    /// Rewinds (or fast-forwards) the live state to a history target.
    ///
    /// The history itself is kept; the next click truncates whatever lies
    /// beyond the restored step.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError`] if `target` names a move that was never
    /// recorded. The state is left unchanged in that case.
    #[instrument(skip(self))]
    pub fn go_to_history(&mut self, target: HistoryTarget) -> Result<(), NavigationError> {
        match target {
            HistoryTarget::GameStart => {
                self.state = GameState::new();
            }
            HistoryTarget::Move(index) => {
                let item = self
                    .moves_history
                    .get(index)
                    .ok_or_else(|| NavigationError::new(index, self.moves_history.len()))?;
                self.state = GameState {
                    squares: item.squares().clone(),
                    current_player: *item.current_player(),
                    next_player: item.next_player().clone(),
                    winner: *item.winner(),
                    step_number: Some(item.step_number().map_or(0, |s| s + 1)),
                };
            }
        }

        self.selected_history = Some(target);
        debug!(
            index = target.index(),
            step = self.step_index(),
            "Navigated history"
        );
        assert_invariants(self);
        Ok(())
    }

    /// Builds a fresh history list for display.
    #[instrument(skip(self))]
    pub fn history_list(&self) -> Vec<HistoryEntry> {
        history::build_list(
            &self.moves_history,
            self.selected_history,
            self.reverse_list,
        )
    }

    /// Drops snapshots past the current step; before the first move, drops all.
    fn cut_history(&mut self) {
        match self.state.step_number {
            None => self.moves_history.clear(),
            Some(step) => {
                if self.moves_history.len() > step + 1 {
                    debug!(
                        kept = step + 1,
                        dropped = self.moves_history.len() - step - 1,
                        "Discarding future moves"
                    );
                }
                self.moves_history.truncate(step + 1);
            }
        }
    }

    fn increment_step(&mut self) {
        self.state.step_number = Some(self.state.step_number.map_or(0, |s| s + 1));
    }

    fn verify_winner(&mut self) {
        self.state.winner = match rules::evaluate(&self.state.squares) {
            Some((outcome, line)) => {
                if let Some(line) = line {
                    self.state.squares.highlight(line);
                }
                info!(%outcome, "Game decided");
                Some(outcome)
            }
            None => None,
        };
    }

    fn change_player(&mut self) {
        self.state.current_player = self.state.current_player.opponent();
        self.state.next_player = self.state.current_player.player_label().to_string();
    }

    fn save_history(&mut self, index: usize) {
        let step_number = self.state.step_number.and_then(|s| s.checked_sub(1));
        self.moves_history.push(HistoryItem::new(
            self.state.squares.clone(),
            step_number,
            move_position(index),
            self.state.next_player.clone(),
            self.state.current_player,
            self.state.winner,
        ));
    }
}
