//! Placement search - where the agent decides to drop its piece
//!
//! Enumerates rotation (0..4) x horizontal offset (-10..10) candidates,
//! hard-drops each one on a scratch board, scores the result with
//! [`evaluate`], and keeps the single best. Ties keep the first candidate
//! found (strict greater-than, search order: rotation ascending, then offset
//! ascending), so among equal placements the leftmost at the lowest rotation
//! count wins.
//!
//! The candidate shape is produced by rotating the already-rotated shape one
//! more step per rotation count, not by re-deriving each orientation from
//! the base shape. For these pure anchor-relative transforms the two agree;
//! a test pins that equivalence.

use crate::agent::eval::evaluate;
use crate::core::{rotate_cw, Board, Tetromino};

/// A chosen placement, relative to the piece the search was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Clockwise rotations to apply to the piece's current shape.
    pub rotations: u8,
    /// Horizontal offset from the piece's current anchor column.
    pub dx: i8,
    /// Final anchor row after the hard drop.
    pub drop_y: i8,
    /// Heuristic score of the simulated board.
    pub score: i32,
}

/// Search all placements of `piece` on `board` and return the best one.
///
/// A candidate must be placeable at the piece's current row before the drop
/// is simulated, so offsets that collide at spawn height are skipped even if
/// they would fit lower down. Returns None when nothing is placeable; the
/// caller leaves the piece untouched in that case.
pub fn choose_placement(board: &Board, piece: &Tetromino) -> Option<Placement> {
    let mut best: Option<Placement> = None;
    let mut shape = piece.shape;

    for rotations in 0..4u8 {
        if rotations > 0 {
            shape = rotate_cw(&shape);
        }

        for dx in -10..10i8 {
            let x = piece.x + dx;
            if !board.can_place(&shape, x, piece.y) {
                continue;
            }

            // Hard-drop simulation: slide down to the last valid row.
            let mut drop_y = piece.y;
            while board.can_place(&shape, x, drop_y + 1) {
                drop_y += 1;
            }

            // Simulate the lock and score the resulting board.
            let mut scratch = board.clone();
            scratch.lock_piece(&shape, x, drop_y, piece.kind);
            let score = evaluate(&scratch);

            if best.map_or(true, |b| score > b.score) {
                best = Some(Placement {
                    rotations,
                    dx,
                    drop_y,
                    score,
                });
            }
        }
    }

    best
}

/// Apply a placement to the live piece: rotate, shift, and set the anchor to
/// the drop row.
pub fn commit_placement(piece: &mut Tetromino, placement: &Placement) {
    for _ in 0..placement.rotations {
        piece.shape = rotate_cw(&piece.shape);
    }
    piece.x += placement.dx;
    piece.y = placement.drop_y;
}
