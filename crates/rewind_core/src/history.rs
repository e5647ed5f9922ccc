//! Move history: immutable snapshots and the navigation list built from them.

use crate::types::{Board, Mark, Outcome, winner_label};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Snapshot of the game taken right after one completed move.
///
/// The board is an owned copy; later changes to the live board never reach it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Board after the move, including any winning-line highlight.
    squares: Board,
    /// Step before this move was applied (`None` for the opening move).
    step_number: Option<usize>,
    /// `"column, row"` of the square that was played.
    move_position: String,
    /// Display label of the player to move next.
    next_player: String,
    /// Mark that moves next.
    current_player: Mark,
    /// Outcome reached by this move, if any.
    winner: Option<Outcome>,
}

impl HistoryItem {
    pub(crate) fn new(
        squares: Board,
        step_number: Option<usize>,
        move_position: impl Into<String>,
        next_player: impl Into<String>,
        current_player: Mark,
        winner: Option<Outcome>,
    ) -> Self {
        Self {
            squares,
            step_number,
            move_position: move_position.into(),
            next_player: next_player.into(),
            current_player,
            winner,
        }
    }

    /// Step number as a signed value, `-1` for the opening move.
    pub fn step_index(&self) -> isize {
        self.step_number.map_or(-1, |s| s as isize)
    }

    /// Winner string: `""`, `"X"`, `"O"` or `"draw"`.
    pub fn winner_label(&self) -> &'static str {
        winner_label(self.winner)
    }
}

/// A point the game can be rewound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryTarget {
    /// The empty board before any move.
    GameStart,
    /// The state right after history item `n`.
    Move(usize),
}

impl HistoryTarget {
    /// Maps a list index to a target. Every negative index means the game start.
    pub fn from_index(index: isize) -> Self {
        usize::try_from(index)
            .map_or(HistoryTarget::GameStart, HistoryTarget::Move)
    }

    /// List index of this target: `-1` for the game start.
    pub fn index(self) -> isize {
        match self {
            HistoryTarget::GameStart => -1,
            HistoryTarget::Move(n) => n as isize,
        }
    }
}

/// One row of the history list handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct HistoryEntry {
    /// Text shown to the user.
    label: String,
    /// Where selecting this row navigates.
    target: HistoryTarget,
    /// Whether this row is the active history selection.
    selected: bool,
}

/// Label of the synthetic first list row.
pub const GAME_START_LABEL: &str = "Go to game start";

/// Builds the display list: a game-start row followed by one row per item,
/// reversed as a whole when `reverse` is set.
pub(crate) fn build_list(
    items: &[HistoryItem],
    selected: Option<HistoryTarget>,
    reverse: bool,
) -> Vec<HistoryEntry> {
    let start = HistoryEntry {
        label: GAME_START_LABEL.to_string(),
        target: HistoryTarget::GameStart,
        selected: selected == Some(HistoryTarget::GameStart),
    };

    let mut entries: Vec<HistoryEntry> = std::iter::once(start)
        .chain(items.iter().enumerate().map(|(i, item)| HistoryEntry {
            label: format!("Go to move #{} ({})", i, item.move_position()),
            target: HistoryTarget::Move(i),
            selected: selected == Some(HistoryTarget::Move(i)),
        }))
        .collect();

    if reverse {
        entries.reverse();
    }
    entries
}
