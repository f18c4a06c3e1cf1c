//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (board engine, terminal rendering, persistence).
//!
//! # Board Dimensions
//!
//! The board is always square. Its size is a configuration input, read from
//! preferences at startup:
//!
//! - **Default**: 8x8
//! - **Minimum**: 2 (a single cell can never be cleared)
//! - **Maximum**: 26 (console rows are labelled `A`-`Z`)
//!
//! # Boards and Seeds
//!
//! A puzzle is addressed by its *board number*, an integer seed in
//! `1..=5000`. The same `(size, board number)` pair always regenerates an
//! identical layout.
//!
//! # Examples
//!
//! ```
//! use tui_collapse_types::{Tile, Cell, DEFAULT_BOARD_SIZE};
//!
//! let tile = Tile::Green;
//! assert_eq!(tile.glyph(), '+');
//!
//! let cell: Cell = Some(Tile::Cyan);
//! assert!(cell.is_some());
//! assert_eq!(DEFAULT_BOARD_SIZE, 8);
//! ```

/// Default board size when no preference is stored.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Smallest playable board.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest supported board (console rows are labelled with letters).
pub const MAX_BOARD_SIZE: usize = 26;

/// Board numbers run `1..=MAX_BOARD_NUMBER`.
pub const MAX_BOARD_NUMBER: u32 = 5000;

/// How many hall of fame entries are displayed.
pub const HALL_SIZE: usize = 5;

/// Maximum length of a name stored in the hall of fame.
pub const MAX_NAME_LEN: usize = 20;

/// The three tile colors on a Collapse board.
///
/// Each color has a fixed display glyph used by both front ends:
/// `+` (green), `x` (purple), `o` (cyan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Green,
    Purple,
    Cyan,
}

impl Tile {
    /// All tile kinds, in generation order.
    pub const ALL: [Tile; 3] = [Tile::Green, Tile::Purple, Tile::Cyan];

    /// Display glyph for this tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_collapse_types::Tile;
    ///
    /// assert_eq!(Tile::Green.glyph(), '+');
    /// assert_eq!(Tile::Purple.glyph(), 'x');
    /// assert_eq!(Tile::Cyan.glyph(), 'o');
    /// ```
    pub fn glyph(&self) -> char {
        match self {
            Tile::Green => '+',
            Tile::Purple => 'x',
            Tile::Cyan => 'o',
        }
    }

    /// Lowercase name, handy for messages and debugging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tile::Green => "green",
            Tile::Purple => "purple",
            Tile::Cyan => "cyan",
        }
    }
}

/// Cell on the board (`None` = empty, `Some` = filled with a tile color).
pub type Cell = Option<Tile>;

/// Player actions the front ends can issue.
///
/// Cursor movement only exists in the TUI; the console front end addresses
/// cells directly by coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the selection cursor up one row.
    CursorUp,
    /// Move the selection cursor down one row.
    CursorDown,
    /// Move the selection cursor left one column.
    CursorLeft,
    /// Move the selection cursor right one column.
    CursorRight,
    /// Take a turn on the cell under the cursor.
    Select,
    /// Toggle the cheat (reveal) state.
    ToggleCheat,
    /// Regenerate the current board number.
    Restart,
    /// Advance to the next board number.
    NextBoard,
    /// Prompt for a board number to jump to.
    PickBoard,
    /// Show the hall of fame.
    ShowScores,
}
