//! Core module - pure game logic with no external dependencies
//!
//! This module contains the board rules, piece geometry, the shared piece
//! queue, and per-side state. It has zero dependencies on UI or I/O.

pub mod board;
pub mod piece;
pub mod queue;
pub mod side;

// Re-export commonly used types
pub use board::Board;
pub use piece::{base_shape, rotate_cw, PieceShape, Tetromino};
pub use queue::{SharedQueue, SimpleRng};
pub use side::SideState;
