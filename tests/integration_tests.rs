//! Integration tests across the facade: engine, store, and view together.

use std::fs;

use tui_collapse::core::{Board, CollapseGame};
use tui_collapse::store::{HallOfFame, Preferences};
use tui_collapse::term::{GameView, ViewState, Viewport};
use tui_collapse::types::{DEFAULT_BOARD_SIZE, Tile};

#[test]
fn facade_reexports_line_up() {
    // The root crate exposes the same types the subcrates define.
    let board: tui_collapse::core::Board = Board::generate(2, 34);
    assert_eq!(board.get(0, 0), Some(Some(Tile::Green)));
}

#[test]
fn full_win_flow_records_a_score() {
    let path = std::env::temp_dir().join(format!(
        "tui-collapse-integration-{}.jsonl",
        std::process::id()
    ));
    let _ = fs::remove_file(&path);
    let hall = HallOfFame::new(&path);

    // Board 34 is the uniform 2x2 fixture: one move wins.
    let mut game = CollapseGame::new(2, 34);
    assert!(game.take_turn(0, 0));
    assert!(game.is_over());

    hall.add("erik", game.moves_made()).unwrap();
    let rendered = hall.render().unwrap();
    assert!(rendered.contains("1    erik"), "{rendered}");

    let _ = fs::remove_file(path);
}

#[test]
fn preferences_drive_board_construction() {
    let prefs = Preferences::load_or_default("/nonexistent/preferences.json");
    assert_eq!(prefs.board_size, DEFAULT_BOARD_SIZE);

    let game = CollapseGame::new(prefs.board_size, 42);
    assert_eq!(game.board().size(), DEFAULT_BOARD_SIZE);
    assert_eq!(game.tiles_remaining(), DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE);
}

#[test]
fn a_played_board_still_renders() {
    let mut game = CollapseGame::new(8, 42);
    for row in 0..8 {
        for col in 0..8 {
            game.take_turn(row, col);
        }
    }

    let view = GameView::default();
    let fb = view.render(&game, &ViewState::default(), Viewport::new(80, 24));
    let text: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text.contains(&format!("moves: {}", game.moves_made())));
}

#[test]
fn select_game_contract_regenerates_identical_puzzles() {
    // "Select game N" must always deal the same board.
    let first = CollapseGame::new(8, 2024);
    let second = CollapseGame::new(8, 2024);
    assert_eq!(first.board(), second.board());
}
