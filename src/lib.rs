//! Two-board terminal Tetris: a human board racing a heuristic opponent.
//!
//! Both boards draw from a single shared piece sequence, so the duel is a
//! pure placement contest; the first side to top out loses. `core` holds the
//! deterministic game logic, `agent` the opponent's placement search, `duel`
//! the combined match state, and `term`/`input` the crossterm front end.

pub mod agent;
pub mod core;
pub mod duel;
pub mod input;
pub mod term;
pub mod types;
