//! Agent module - the heuristic opponent
//!
//! The agent does not press keys: once per spawned piece it searches the
//! placement space and commits the winning rotation and column directly,
//! after which only gravity moves the piece.

pub mod eval;
pub mod search;

pub use search::{choose_placement, commit_placement, Placement};
