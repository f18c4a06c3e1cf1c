//! GameView: maps the board engine's state into a terminal framebuffer.
//!
//! This module is pure (no I/O), so rendering can be unit-tested by
//! inspecting framebuffer contents.

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use tui_collapse_core::CollapseGame;
use tui_collapse_types::Tile;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Front-end state that accompanies the engine state in a frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState<'a> {
    /// Selection cursor as (row, col).
    pub cursor: (usize, usize),
    /// Text-entry line shown under the board (name entry, board picker).
    pub prompt: Option<&'a str>,
    /// Preformatted hall of fame block for the side panel.
    pub scores: Option<&'a str>,
}

/// A lightweight terminal view for the Collapse board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 cells compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w: cell_w.max(1) }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        game: &CollapseGame,
        view: &ViewState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let size = game.board().size() as u16;
        let board_px_w = size * self.cell_w;
        let frame_w = board_px_w + 2;
        let frame_h = size + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport
            .height
            .saturating_sub(frame_h)
            .div_euclid(2)
            .max(2);

        self.draw_header(fb, game, start_x, start_y);

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..size {
            for col in 0..size {
                let cell = game
                    .board()
                    .get(row as usize, col as usize)
                    .unwrap_or(None);
                let under_cursor = view.cursor == (row as usize, col as usize);
                self.draw_tile(fb, start_x, start_y, row, col, cell, under_cursor);
            }
        }

        if game.is_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "BOARD CLEARED");
        }

        self.draw_side_panel(fb, view, viewport, start_x, frame_w, start_y);

        if let Some(prompt) = view.prompt {
            let y = start_y.saturating_add(frame_h).saturating_add(1);
            let style = CellStyle {
                bold: true,
                ..CellStyle::default()
            };
            fb.put_str(start_x, y, prompt, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &CollapseGame, view: &ViewState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, view, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, game: &CollapseGame, start_x: u16, start_y: u16) {
        let title_style = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let title = format!("COLLAPSE  board {}", game.board_number());
        fb.put_str(start_x, start_y.saturating_sub(2), &title, title_style);

        let mut status = format!(
            "tiles left: {}   moves: {}",
            game.tiles_remaining(),
            game.moves_made()
        );
        if game.is_cheating() {
            status.push_str("   CHEAT");
        }
        fb.put_str(start_x, start_y.saturating_sub(1), &status, CellStyle::default());
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        cell: Option<Tile>,
        under_cursor: bool,
    ) {
        let bg = if under_cursor {
            Rgb::new(70, 70, 100)
        } else {
            Rgb::new(25, 25, 35)
        };

        let (ch, fg, dim) = match cell {
            Some(tile) => (tile.glyph(), tile_color(tile), false),
            None => ('·', Rgb::new(90, 90, 100), true),
        };
        let style = CellStyle {
            fg,
            bg,
            bold: cell.is_some(),
            dim,
        };

        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row;
        fb.put_char(px, py, ch, style);
        for dx in 1..self.cell_w {
            fb.put_char(px + dx, py, ' ', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        view: &ViewState,
        viewport: Viewport,
        start_x: u16,
        frame_w: u16,
        start_y: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 14 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(170, 170, 170),
            ..CellStyle::default()
        };

        let mut y = start_y;
        if let Some(scores) = view.scores {
            fb.put_str(panel_x, y, "HALL OF FAME", label);
            y = y.saturating_add(1);
            for line in scores.lines() {
                if y >= viewport.height {
                    break;
                }
                fb.put_str(panel_x, y, line.trim_start(), value);
                y = y.saturating_add(1);
            }
            y = y.saturating_add(1);
        }

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        for line in [
            "arrows  move",
            "enter   collapse",
            "c  cheat",
            "r  restart",
            "n  next board",
            "g  go to board",
            "s  scores",
            "q  quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, value);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..CellStyle::default()
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn tile_color(tile: Tile) -> Rgb {
    match tile {
        Tile::Green => Rgb::new(100, 220, 120),
        Tile::Purple => Rgb::new(200, 120, 220),
        Tile::Cyan => Rgb::new(80, 220, 220),
    }
}
