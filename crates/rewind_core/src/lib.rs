//! Tic-tac-toe game controller with replayable move history.
//!
//! # Architecture
//!
//! - **Types**: [`Square`], [`Board`], [`Mark`], [`Outcome`]
//! - **Rules**: pure win/draw evaluation in fixed line order
//! - **History**: immutable [`HistoryItem`] snapshots and the display list
//! - **Controller**: [`GameController`] owns the live state and processes
//!   clicks and history navigation
//!
//! # Example
//!
//! ```
//! use rewind_core::{GameController, HistoryTarget};
//!
//! let mut game = GameController::new();
//! game.click(4);
//! game.click(0);
//! assert_eq!(game.moves_history()[0].move_position(), "2, 2");
//!
//! game.go_to_history(HistoryTarget::Move(0)).unwrap();
//! assert_eq!(game.next_player(), "Player 2 (O)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use controller::{ClickOutcome, GameController, GameState, IgnoreReason};
pub use error::NavigationError;
pub use history::{GAME_START_LABEL, HistoryEntry, HistoryItem, HistoryTarget};
pub use position::{Position, move_position};
pub use types::{BOARD_SIZE, Board, Mark, Outcome, Square, SquareColor, winner_label};
