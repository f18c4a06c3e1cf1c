//! Line-oriented console front end.
//!
//! Plays the same engine over stdin/stdout: the board is drawn with lettered
//! rows and numbered columns, moves are entered as letter+number (`B3`), and
//! everything else goes through a numbered menu. Useful over plain pipes and
//! for scripted play.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tui_collapse::core::CollapseGame;
use tui_collapse::store::{HallOfFame, Preferences};
use tui_collapse::types::{MAX_BOARD_NUMBER, MAX_NAME_LEN};

const MENU: &str = "1)Restart 2)New Game 3)Select Game 4)Scores 5)Cheat 6)Quit";

fn main() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock())
}

fn run(input: impl BufRead, mut out: impl Write) -> Result<()> {
    let prefs = Preferences::load_or_default(Preferences::DEFAULT_PATH);
    let hall = HallOfFame::open_default();

    let mut board_number = clock_board_number();
    let mut game = CollapseGame::new(prefs.board_size, board_number);
    let mut lines = input.lines();

    loop {
        display_board(&game, board_number, &mut out)?;
        writeln!(out, "{MENU}")?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((row, col)) = parse_move(line) {
            game.take_turn(row, col);
            if game.is_over() {
                display_board(&game, board_number, &mut out)?;
                game_won(&game, board_number, &hall, &mut lines, &mut out)?;
                board_number = next_board_number(board_number);
                game = CollapseGame::new(prefs.board_size, board_number);
            }
            continue;
        }

        match line.parse::<u32>() {
            Ok(1) => {
                game = CollapseGame::new(prefs.board_size, board_number);
            }
            Ok(2) => {
                board_number = next_board_number(board_number);
                game = CollapseGame::new(prefs.board_size, board_number);
            }
            Ok(3) => {
                writeln!(
                    out,
                    "Select Game: Enter desired game number (1 - {MAX_BOARD_NUMBER}):"
                )?;
                out.flush()?;
                if let Some(line) = lines.next() {
                    if let Ok(n) = line?.trim().parse::<u32>() {
                        if (1..=MAX_BOARD_NUMBER).contains(&n) {
                            board_number = n;
                            game = CollapseGame::new(prefs.board_size, board_number);
                        }
                    }
                }
            }
            Ok(4) => {
                write!(out, "{}", hall.render().unwrap_or_default())?;
                writeln!(out)?;
            }
            Ok(5) => game.toggle_cheat(),
            Ok(6) => return Ok(()),
            _ => writeln!(out, "Unrecognized input: {line}")?,
        }
    }
}

/// Parse a coordinate move like `B3`: row letter, then 1-based column.
fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut chars = line.chars();
    let row_ch = chars.next()?;
    if !row_ch.is_ascii_alphabetic() {
        return None;
    }
    let row = (row_ch.to_ascii_uppercase() as u8 - b'A') as usize;
    let col: usize = chars.as_str().parse().ok()?;
    Some((row, col.checked_sub(1)?))
}

fn next_board_number(current: u32) -> u32 {
    if current >= MAX_BOARD_NUMBER {
        1
    } else {
        current + 1
    }
}

fn clock_board_number() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    nanos % MAX_BOARD_NUMBER + 1
}

fn display_board(game: &CollapseGame, board_number: u32, out: &mut impl Write) -> Result<()> {
    let size = game.board().size();

    writeln!(out, "Collapse - board {board_number}")?;
    writeln!(
        out,
        "Tiles left: {}    Moves: {}",
        game.tiles_remaining(),
        game.moves_made()
    )?;

    let mut header = String::from("     ");
    for col in 1..=size {
        header.push_str(&format!("{col:<3}"));
    }
    writeln!(out, "{}", header.trim_end())?;

    for row in 0..size {
        let letter = (b'A' + row as u8) as char;
        let mut text = format!(" {letter}:  ");
        for col in 0..size {
            let glyph = match game.board().get(row, col) {
                Some(Some(tile)) => tile.glyph(),
                _ => ' ',
            };
            text.push(glyph);
            text.push_str("  ");
        }
        writeln!(out, "{}", text.trim_end())?;
    }

    writeln!(out, " {}", "-".repeat(size * 3 + 1))?;
    Ok(())
}

fn game_won(
    game: &CollapseGame,
    board_number: u32,
    hall: &HallOfFame,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "Game Won Notification: Game {board_number} Cleared!")?;
    writeln!(out, "Save your score? (y/n)")?;
    out.flush()?;

    let answer = match lines.next() {
        Some(line) => line?,
        None => return Ok(()),
    };
    if answer.trim() != "y" {
        return Ok(());
    }

    writeln!(
        out,
        "Name Entry: Your score of {} will be entered into the Hall of Fame.",
        game.moves_made()
    )?;
    writeln!(out, "Enter your name:")?;
    out.flush()?;

    if let Some(line) = lines.next() {
        let name = line?;
        let name: String = name.trim().chars().take(MAX_NAME_LEN).collect();
        if !name.is_empty() {
            hall.add(&name, game.moves_made())?;
        }
        write!(out, "{}", hall.render().unwrap_or_default())?;
        writeln!(out)?;
    }
    Ok(())
}
