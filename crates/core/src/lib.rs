//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the entire Collapse board engine. It has **zero
//! dependencies** on UI, persistence, or I/O, making it:
//!
//! - **Deterministic**: the same `(size, board number)` regenerates the same puzzle
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: usable from the TUI, the console front end, or headless
//!
//! # Module Structure
//!
//! - [`board`]: square grid with seeded generation and bounds-checked access
//! - [`game`]: turn handling, flood-fill removal, gravity, column re-centering,
//!   win detection, and the cheat snapshot
//! - [`rng`]: seeded LCG stream backing board generation
//!
//! # Game Rules
//!
//! - A turn targets one cell. Out-of-range or empty targets are rejected with
//!   no state change; anything else costs exactly one move.
//! - A tile with at least one orthogonal neighbor of the same color removes
//!   its whole 4-connected group. A lone tile removes nothing.
//! - After a removal, each column compacts downward, then empty columns close
//!   up toward the board's center (right side first, then left).
//! - The game is over exactly when the board is empty; the move count is the
//!   score (lower is better).
//!
//! # Example
//!
//! ```
//! use tui_collapse_core::CollapseGame;
//!
//! // Board 34 happens to be uniform on a 2x2 grid: one turn clears it.
//! let mut game = CollapseGame::new(2, 34);
//! assert!(game.take_turn(0, 0));
//! assert!(game.is_over());
//! assert_eq!(game.moves_made(), 1);
//! ```

pub mod board;
pub mod game;
pub mod rng;

pub use tui_collapse_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::CollapseGame;
pub use rng::SimpleRng;
