//! GameView tests - rendering is pure, so assert on framebuffer contents.

use tui_collapse::core::CollapseGame;
use tui_collapse::term::{FrameBuffer, GameView, ViewState, Viewport};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn renders_title_and_status() {
    let game = CollapseGame::new(4, 123);
    let view = GameView::default();
    let fb = view.render(&game, &ViewState::default(), Viewport::new(60, 24));

    let text = screen_text(&fb);
    assert!(text.contains("COLLAPSE  board 123"), "{text}");
    assert!(text.contains("tiles left: 16"), "{text}");
    assert!(text.contains("moves: 0"), "{text}");
}

#[test]
fn renders_tile_glyphs() {
    // Board 1 on 2x2 is G G / C P: all three glyphs appear.
    let game = CollapseGame::new(2, 1);
    let view = GameView::default();
    let fb = view.render(&game, &ViewState::default(), Viewport::new(40, 16));

    let text = screen_text(&fb);
    assert!(text.contains('+'), "{text}");
    assert!(text.contains('x'), "{text}");
    assert!(text.contains('o'), "{text}");
}

#[test]
fn cursor_position_changes_the_frame() {
    let game = CollapseGame::new(4, 7);
    let view = GameView::default();
    let viewport = Viewport::new(60, 24);

    let at_origin = view.render(
        &game,
        &ViewState {
            cursor: (0, 0),
            ..ViewState::default()
        },
        viewport,
    );
    let at_corner = view.render(
        &game,
        &ViewState {
            cursor: (3, 3),
            ..ViewState::default()
        },
        viewport,
    );
    assert_ne!(at_origin, at_corner);
}

#[test]
fn cleared_board_shows_the_win_overlay() {
    let mut game = CollapseGame::new(2, 34);
    game.take_turn(0, 0);
    assert!(game.is_over());

    let view = GameView::default();
    let fb = view.render(&game, &ViewState::default(), Viewport::new(60, 24));
    assert!(screen_text(&fb).contains("BOARD CLEARED"));
}

#[test]
fn cheat_flag_shows_in_the_status_line() {
    let mut game = CollapseGame::new(4, 7);
    game.toggle_cheat();

    let view = GameView::default();
    let fb = view.render(&game, &ViewState::default(), Viewport::new(60, 24));
    assert!(screen_text(&fb).contains("CHEAT"));
}

#[test]
fn prompt_and_scores_blocks_are_rendered() {
    let game = CollapseGame::new(4, 7);
    let view = GameView::default();
    let scores = "         9    ada\n";
    let state = ViewState {
        cursor: (0, 0),
        prompt: Some("Your name: _"),
        scores: Some(scores),
    };
    let fb = view.render(&game, &state, Viewport::new(70, 24));

    let text = screen_text(&fb);
    assert!(text.contains("Your name: _"), "{text}");
    assert!(text.contains("HALL OF FAME"), "{text}");
    assert!(text.contains("9    ada"), "{text}");
}

#[test]
fn tiny_viewport_does_not_panic() {
    let game = CollapseGame::new(8, 42);
    let view = GameView::default();
    let fb = view.render(&game, &ViewState::default(), Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
