//! Terminal Collapse runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and
//! a framebuffer-based renderer. Collapse is turn-based, so the loop blocks
//! on input and redraws once per event; there is no animation tick.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use tui_collapse::core::CollapseGame;
use tui_collapse::input::{handle_key_event, should_quit};
use tui_collapse::store::{HallOfFame, Preferences};
use tui_collapse::term::{FrameBuffer, GameView, TerminalRenderer, ViewState, Viewport};
use tui_collapse::types::{GameAction, MAX_BOARD_NUMBER, MAX_NAME_LEN};

/// What keystrokes currently mean.
enum Mode {
    /// Normal play: keys map to game actions.
    Play,
    /// Board cleared: collecting a name for the hall of fame.
    EnterName(String),
    /// Collecting a board number to jump to.
    PickBoard(String),
}

struct App {
    game: CollapseGame,
    board_number: u32,
    board_size: usize,
    cursor: (usize, usize),
    mode: Mode,
    hall: HallOfFame,
    /// Rendered hall block while the scores panel is toggled on.
    scores_text: Option<String>,
}

impl App {
    fn new(board_size: usize, board_number: u32, hall: HallOfFame) -> Self {
        Self {
            game: CollapseGame::new(board_size, board_number),
            board_number,
            board_size,
            cursor: (0, 0),
            mode: Mode::Play,
            hall,
            scores_text: None,
        }
    }

    fn start_board(&mut self, board_number: u32) {
        self.board_number = board_number;
        self.game = CollapseGame::new(self.board_size, board_number);
        self.cursor = (0, 0);
        self.mode = Mode::Play;
    }

    fn next_board(&mut self) {
        let next = if self.board_number >= MAX_BOARD_NUMBER {
            1
        } else {
            self.board_number + 1
        };
        self.start_board(next);
    }

    fn apply_action(&mut self, action: GameAction) {
        let last = self.board_size - 1;
        match action {
            GameAction::CursorUp => self.cursor.0 = self.cursor.0.saturating_sub(1),
            GameAction::CursorDown => self.cursor.0 = (self.cursor.0 + 1).min(last),
            GameAction::CursorLeft => self.cursor.1 = self.cursor.1.saturating_sub(1),
            GameAction::CursorRight => self.cursor.1 = (self.cursor.1 + 1).min(last),
            GameAction::Select => {
                self.game.take_turn(self.cursor.0, self.cursor.1);
                if self.game.is_over() {
                    self.mode = Mode::EnterName(String::new());
                }
            }
            GameAction::ToggleCheat => self.game.toggle_cheat(),
            GameAction::Restart => self.start_board(self.board_number),
            GameAction::NextBoard => self.next_board(),
            GameAction::PickBoard => self.mode = Mode::PickBoard(String::new()),
            GameAction::ShowScores => {
                self.scores_text = if self.scores_text.is_some() {
                    None
                } else {
                    Some(self.hall.render().unwrap_or_default())
                };
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Take the mode out so its buffers don't hold a borrow across the
        // state changes below.
        match std::mem::replace(&mut self.mode, Mode::Play) {
            Mode::Play => {
                if let Some(action) = handle_key_event(key) {
                    self.apply_action(action);
                }
            }
            Mode::EnterName(mut buf) => match key.code {
                KeyCode::Enter => {
                    let name = buf.trim().to_string();
                    if !name.is_empty() {
                        // A full ledger directory may be unwritable; the game
                        // goes on either way.
                        let _ = self.hall.add(&name, self.game.moves_made());
                        self.scores_text = Some(self.hall.render().unwrap_or_default());
                    }
                    self.next_board();
                }
                KeyCode::Esc => self.next_board(),
                KeyCode::Backspace => {
                    buf.pop();
                    self.mode = Mode::EnterName(buf);
                }
                KeyCode::Char(c) => {
                    if buf.chars().count() < MAX_NAME_LEN {
                        buf.push(c);
                    }
                    self.mode = Mode::EnterName(buf);
                }
                _ => self.mode = Mode::EnterName(buf),
            },
            Mode::PickBoard(mut buf) => match key.code {
                KeyCode::Enter => {
                    if let Ok(n) = buf.parse::<u32>() {
                        if (1..=MAX_BOARD_NUMBER).contains(&n) {
                            self.start_board(n);
                        }
                    }
                }
                KeyCode::Esc => {}
                KeyCode::Backspace => {
                    buf.pop();
                    self.mode = Mode::PickBoard(buf);
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if buf.len() < 4 {
                        buf.push(c);
                    }
                    self.mode = Mode::PickBoard(buf);
                }
                _ => self.mode = Mode::PickBoard(buf),
            },
        }
    }

    fn prompt(&self) -> Option<String> {
        match &self.mode {
            Mode::Play => None,
            Mode::EnterName(buf) => Some(format!(
                "Cleared in {} moves! Your name: {}_",
                self.game.moves_made(),
                buf
            )),
            Mode::PickBoard(buf) => {
                Some(format!("Go to board (1-{}): {}_", MAX_BOARD_NUMBER, buf))
            }
        }
    }
}

/// Pick a starting board number from the clock, like dealing a random hand.
fn clock_board_number() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    nanos % MAX_BOARD_NUMBER + 1
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let prefs = Preferences::load_or_default(Preferences::DEFAULT_PATH);
    let mut app = App::new(prefs.board_size, clock_board_number(), HallOfFame::open_default());

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let prompt = app.prompt();
        let state = ViewState {
            cursor: app.cursor,
            prompt: prompt.as_deref(),
            scores: app.scores_text.as_deref(),
        };
        view.render_into(&app.game, &state, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if matches!(app.mode, Mode::Play) && should_quit(key) {
                    return Ok(());
                }
                app.handle_key(key);
            }
            Event::Resize(_, _) => {
                // Next loop iteration re-renders at the new size.
            }
            _ => {}
        }
    }
}
