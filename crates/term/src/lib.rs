//! Terminal rendering module.
//!
//! Three layers, matching how the TUI binary uses them:
//!
//! - [`fb`]: a styled character framebuffer, pure data
//! - [`game_view`]: engine state -> framebuffer, pure and testable
//! - [`renderer`]: framebuffer -> real terminal via crossterm

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, ViewState, Viewport};
pub use renderer::TerminalRenderer;
