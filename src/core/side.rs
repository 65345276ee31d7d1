//! Per-side state: one board, its active piece, and its fall timers
//!
//! Movement and rotation are validate-then-commit: an invalid request is a
//! silent no-op returning false. Locking and line clearing are the only
//! board mutations.

use crate::core::board::Board;
use crate::core::piece::{rotate_cw, Tetromino};
use crate::types::{PieceKind, TOP_OUT_ROW};

/// One side of the match.
#[derive(Debug, Clone)]
pub struct SideState {
    board: Board,
    active: Option<Tetromino>,
    drop_timer_ms: u32,
    /// Milliseconds the piece has spent blocked; None while falling freely.
    lock_timer_ms: Option<u32>,
    lost: bool,
}

impl SideState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: None,
            drop_timer_ms: 0,
            lock_timer_ms: None,
            lost: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn lost(&self) -> bool {
        self.lost
    }

    /// Spawn a new active piece of the given kind.
    ///
    /// A spawn that does not fit marks the side as lost and returns false.
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        let piece = Tetromino::spawn(kind);
        if !self.board.can_place(&piece.shape, piece.x, piece.y) {
            self.lost = true;
            return false;
        }
        self.active = Some(piece);
        self.drop_timer_ms = 0;
        self.lock_timer_ms = None;
        true
    }

    /// Try to move the active piece by (dx, dy). No-op on collision.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if self
            .board
            .can_place(&active.shape, active.x + dx, active.y + dy)
        {
            self.active = Some(Tetromino {
                x: active.x + dx,
                y: active.y + dy,
                ..active
            });
            return true;
        }

        false
    }

    /// Try to rotate the active piece clockwise.
    ///
    /// The rotated shape is validated in place; on collision the piece keeps
    /// its prior orientation (no kick attempts).
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = rotate_cw(&active.shape);
        if self.board.can_place(&rotated, active.x, active.y) {
            self.active = Some(Tetromino {
                shape: rotated,
                ..active
            });
            return true;
        }

        false
    }

    /// Check whether the active piece can no longer move down.
    pub fn is_blocked_below(&self) -> bool {
        match self.active {
            Some(piece) => !self.board.can_place(&piece.shape, piece.x, piece.y + 1),
            None => false,
        }
    }

    /// Lock the active piece onto the board and clear any completed rows.
    ///
    /// A lock with the anchor above the top-out row loses the match for this
    /// side. Returns the number of rows cleared.
    pub fn lock_active(&mut self) -> usize {
        let Some(piece) = self.active.take() else {
            return 0;
        };

        self.board.lock_piece(&piece.shape, piece.x, piece.y, piece.kind);
        if piece.y < TOP_OUT_ROW {
            self.lost = true;
        }
        self.board.clear_full_rows().len()
    }

    pub(crate) fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub(crate) fn set_drop_timer_ms(&mut self, ms: u32) {
        self.drop_timer_ms = ms;
    }

    pub(crate) fn lock_timer_ms(&self) -> Option<u32> {
        self.lock_timer_ms
    }

    pub(crate) fn set_lock_timer_ms(&mut self, ms: Option<u32>) {
        self.lock_timer_ms = ms;
    }

    /// Replace the active piece (used by the agent to commit a planned
    /// placement). The replacement must be a valid position.
    pub(crate) fn set_active(&mut self, piece: Tetromino) {
        debug_assert!(self.board.can_place(&piece.shape, piece.x, piece.y));
        self.active = Some(piece);
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for SideState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, SPAWN_X};

    #[test]
    fn test_spawn_on_empty_board() {
        let mut side = SideState::new();
        assert!(side.spawn(PieceKind::T));
        assert!(!side.lost());

        let active = side.active().unwrap();
        assert_eq!(active.x, SPAWN_X);
        assert_eq!(active.y, 0);
    }

    #[test]
    fn test_blocked_spawn_loses() {
        let mut side = SideState::new();
        // Occupy the spawn anchor itself.
        side.board_mut().set(SPAWN_X, 0, Some(PieceKind::I));

        assert!(!side.spawn(PieceKind::T));
        assert!(side.lost());
        assert!(side.active().is_none());
    }

    #[test]
    fn test_move_rejected_at_wall() {
        let mut side = SideState::new();
        side.spawn(PieceKind::O);

        // O spans columns x and x+1; walk to the right wall.
        while side.try_move(1, 0) {}
        let at_wall = side.active().unwrap();
        assert_eq!(at_wall.x, 8);

        // One more is a silent no-op.
        assert!(!side.try_move(1, 0));
        assert_eq!(side.active().unwrap(), at_wall);
    }

    #[test]
    fn test_rotation_rejected_keeps_orientation() {
        let mut side = SideState::new();
        side.spawn(PieceKind::I);

        // A horizontal I resting on the floor cannot rotate: the rotated
        // shape has a cell at anchor row + 1, which is below the floor.
        while side.try_move(0, 1) {}
        let before = side.active().unwrap();
        assert_eq!(before.y, 19);

        assert!(!side.try_rotate());
        assert_eq!(side.active().unwrap().shape, before.shape);
    }

    #[test]
    fn test_lock_above_threshold_loses() {
        let mut side = SideState::new();
        side.spawn(PieceKind::O);
        assert_eq!(side.active().unwrap().y, 0);

        side.lock_active();
        assert!(side.lost(), "lock with anchor row 0 should top out");
    }

    #[test]
    fn test_lock_at_floor_does_not_lose() {
        let mut side = SideState::new();
        side.spawn(PieceKind::O);
        while side.try_move(0, 1) {}

        let cleared = side.lock_active();
        assert_eq!(cleared, 0);
        assert!(!side.lost());
        assert!(side.active().is_none());
    }
}
