//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: `DuelView` draws the match into a
//! framebuffer, `TerminalRenderer` flushes it to the terminal via crossterm.
//!
//! Goals:
//! - Keep game state deterministic and testable (the view is pure)
//! - Allow precise control over aspect ratio (2 chars wide per board cell)

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{piece_color, DuelView, Viewport};
