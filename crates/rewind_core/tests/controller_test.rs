//! Scenario tests for the game controller.

use rewind_core::{
    ClickOutcome, GameController, HistoryTarget, IgnoreReason, Mark, Outcome, SquareColor,
};

fn play(game: &mut GameController, moves: &[usize]) {
    for &index in moves {
        let outcome = game.click(index);
        assert!(
            matches!(outcome, ClickOutcome::Applied { .. }),
            "move {index} should apply, got {outcome:?}"
        );
    }
}

fn labels(game: &GameController) -> Vec<&'static str> {
    game.squares().iter().map(|s| s.label()).collect()
}

fn highlighted(game: &GameController) -> Vec<usize> {
    game.squares()
        .iter()
        .filter(|s| s.color() == SquareColor::Highlight)
        .map(|s| s.index())
        .collect()
}

#[test]
fn test_labels_written_once_and_alternate() {
    let mut game = GameController::new();
    play(&mut game, &[4, 0, 8, 2]);
    assert_eq!(labels(&game), ["O", "", "O", "", "X", "", "", "", "X"]);

    // Re-clicking every filled square changes nothing.
    for index in [0, 2, 4, 8] {
        let outcome = game.click(index);
        assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::Occupied));
    }
    assert_eq!(labels(&game), ["O", "", "O", "", "X", "", "", "", "X"]);
    assert_eq!(game.moves_history().len(), 4);
}

#[test]
fn test_top_row_win() {
    let mut game = GameController::new();
    // X: 0, 1, 2   O: 6, 7
    play(&mut game, &[0, 6, 1, 7, 2]);

    assert_eq!(game.winner_label(), "X");
    assert_eq!(game.winner(), Some(Outcome::Won(Mark::X)));
    for index in [0, 1, 2] {
        assert_eq!(game.squares()[index].color(), SquareColor::Highlight);
        assert_eq!(game.squares()[index].color().hint(), "blue");
    }
    assert_eq!(game.squares()[6].color().hint(), "#444444");
}

#[test]
fn test_move_completing_two_lines_highlights_first_in_scan_order() {
    let mut game = GameController::new();
    // X: 1, 2, 3, 6 then 0 completes the top row and the left column.
    play(&mut game, &[1, 4, 2, 5, 3, 8, 6, 7, 0]);

    assert_eq!(game.winner(), Some(Outcome::Won(Mark::X)));
    assert_eq!(highlighted(&game), [0, 1, 2]);
    assert_eq!(game.squares()[3].color(), SquareColor::Normal);
    assert_eq!(game.squares()[6].color(), SquareColor::Normal);

    let snapshot = game.moves_history()[8].squares().squares();
    assert_eq!(snapshot[3].color(), SquareColor::Normal);
}

#[test]
fn test_no_moves_after_win() {
    let mut game = GameController::new();
    play(&mut game, &[0, 6, 1, 7, 2]);
    let board = game.board().clone();

    let outcome = game.click(5);
    assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::GameOver));
    assert_eq!(game.board(), &board);
    assert_eq!(game.moves_history().len(), 5);
}

#[test]
fn test_full_board_is_draw() {
    let mut game = GameController::new();
    // X O X / X O O / O X X
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.winner_label(), "draw");
    assert!(highlighted(&game).is_empty());
    let last = game.moves_history().last();
    assert_eq!(last.map(|i| i.winner_label()), Some("draw"));
}

#[test]
fn test_rewind_and_branch_truncates_future() {
    let mut game = GameController::new();
    play(&mut game, &[0, 1, 2, 3, 4]);
    assert_eq!(game.moves_history().len(), 5);

    game.go_to_history(HistoryTarget::Move(2)).unwrap();
    assert_eq!(game.step_number(), Some(2));
    assert_eq!(game.moves_history().len(), 5, "history kept");
    assert_eq!(labels(&game), ["X", "O", "X", "", "", "", "", "", ""]);
    assert_eq!(game.current_player(), Mark::O);

    play(&mut game, &[8]);
    assert_eq!(game.step_number(), Some(3));
    let positions: Vec<&str> = game
        .moves_history()
        .iter()
        .map(|item| item.move_position().as_str())
        .collect();
    assert_eq!(positions, ["1, 1", "2, 1", "3, 1", "3, 3"]);
    assert_eq!(game.squares()[8].label(), "O");
}

#[test]
fn test_go_to_game_start_resets_live_state_only() {
    let mut game = GameController::new();
    play(&mut game, &[4, 0, 8]);

    game.go_to_history(HistoryTarget::GameStart).unwrap();
    assert!(game.squares().iter().all(|s| s.is_empty()));
    assert_eq!(game.current_player(), Mark::X);
    assert_eq!(game.next_player(), "Player 1 (X)");
    assert_eq!(game.step_index(), -1);
    assert_eq!(game.winner_label(), "");
    assert_eq!(game.moves_history().len(), 3);
    assert_eq!(game.selected_history(), Some(HistoryTarget::GameStart));

    // The next move from the start discards the old line entirely.
    play(&mut game, &[2]);
    assert_eq!(game.moves_history().len(), 1);
    assert_eq!(game.moves_history()[0].move_position(), "3, 1");
}

#[test]
fn test_negative_index_maps_to_game_start() {
    let mut game = GameController::new();
    play(&mut game, &[4]);
    game.go_to_history(HistoryTarget::from_index(-1)).unwrap();
    assert_eq!(game.step_index(), -1);
    assert_eq!(game.history_list()[0].selected(), &true);
}

#[test]
fn test_center_click_records_position() {
    let mut game = GameController::new();
    play(&mut game, &[4]);
    assert_eq!(game.moves_history()[0].move_position(), "2, 2");
}

#[test]
fn test_snapshots_are_independent_of_live_board() {
    let mut game = GameController::new();
    play(&mut game, &[0]);
    let first = game.moves_history()[0].squares().clone();

    play(&mut game, &[1, 2]);
    assert_eq!(game.moves_history()[0].squares(), &first);
    let stored = game.moves_history()[0].squares();
    assert_eq!(stored.squares()[1].label(), "");

    // Restoring and then playing must not leak into the stored snapshot.
    game.go_to_history(HistoryTarget::Move(0)).unwrap();
    play(&mut game, &[5]);
    assert_eq!(game.moves_history()[0].squares(), &first);
}

#[test]
fn test_restore_final_move_shows_highlight_again() {
    let mut game = GameController::new();
    play(&mut game, &[0, 6, 1, 7, 2]);
    game.go_to_history(HistoryTarget::Move(3)).unwrap();
    assert_eq!(game.winner_label(), "");
    assert!(highlighted(&game).is_empty());

    game.go_to_history(HistoryTarget::Move(4)).unwrap();
    assert_eq!(game.winner_label(), "X");
    assert_eq!(game.squares()[0].color(), SquareColor::Highlight);
    assert_eq!(game.next_player(), "Player 2 (O)");
}

#[test]
fn test_rewind_past_win_allows_new_moves() {
    let mut game = GameController::new();
    play(&mut game, &[0, 6, 1, 7, 2]);
    game.go_to_history(HistoryTarget::Move(3)).unwrap();
    play(&mut game, &[8]);
    assert_eq!(game.winner_label(), "");
    assert_eq!(game.moves_history().len(), 5);
    assert_eq!(game.moves_history()[4].move_position(), "3, 3");
}

#[test]
fn test_history_list_labels_and_reverse() {
    let mut game = GameController::new();
    play(&mut game, &[4, 0]);
    game.go_to_history(HistoryTarget::Move(1)).unwrap();

    let forward: Vec<(String, bool)> = game
        .history_list()
        .into_iter()
        .map(|e| (e.label().clone(), *e.selected()))
        .collect();
    assert_eq!(
        forward,
        [
            ("Go to game start".to_string(), false),
            ("Go to move #0 (2, 2)".to_string(), false),
            ("Go to move #1 (1, 1)".to_string(), true),
        ]
    );

    let stored = game.moves_history().to_vec();
    game.toggle_reverse();
    let reversed: Vec<String> = game
        .history_list()
        .into_iter()
        .map(|e| e.label().clone())
        .collect();
    assert_eq!(
        reversed,
        [
            "Go to move #1 (1, 1)",
            "Go to move #0 (2, 2)",
            "Go to game start",
        ]
    );
    assert_eq!(game.moves_history(), stored.as_slice());
}

#[test]
fn test_reversed_controller_from_config_flag() {
    let mut game = GameController::with_reversed_list(true);
    assert!(game.is_reversed());
    play(&mut game, &[0]);
    let last = game.history_list().last().map(|e| *e.target());
    assert_eq!(last, Some(HistoryTarget::GameStart));
    game.toggle_reverse();
    assert_eq!(game.history_list()[0].target(), &HistoryTarget::GameStart);
}

#[test]
fn test_navigation_beyond_history_errors() {
    let mut game = GameController::new();
    play(&mut game, &[0]);
    let err = game.go_to_history(HistoryTarget::Move(5)).unwrap_err();
    assert_eq!((err.index, err.len), (5, 1));
    assert_eq!(game.step_number(), Some(0));
}
