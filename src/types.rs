//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn anchor for new pieces: horizontal center, top row.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8;
pub const SPAWN_Y: i8 = 0;

/// Game timing constants (in milliseconds)
///
/// The match runs at 10 frames per second; the human piece falls once per
/// frame, the agent piece at half that rate.
pub const TICK_MS: u32 = 100;
pub const HUMAN_GRAVITY_MS: u32 = 100;
pub const AGENT_GRAVITY_MS: u32 = 200;

/// Grace period after downward motion first blocks before the human piece
/// locks. The agent side has no grace period and locks on the next tick.
pub const LOCK_DELAY_MS: u32 = 1000;

/// A lock with the piece anchor above this row tops the side out.
pub const TOP_OUT_ROW: i8 = 1;

/// Number of pieces generated into the shared queue before play starts.
pub const QUEUE_PRESEED: usize = 5;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    S,
    Z,
    L,
    J,
    T,
}

impl PieceKind {
    /// All seven kinds, in randomizer draw order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
    ];
}

/// The two competing sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Agent,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Human => Side::Agent,
            Side::Agent => Side::Human,
        }
    }

    /// Stable index for per-side storage.
    pub fn index(&self) -> usize {
        match self {
            Side::Human => 0,
            Side::Agent => 1,
        }
    }
}

/// Game actions (human-side intents)
///
/// Each is a single-shot request; key auto-repeat stays in the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
