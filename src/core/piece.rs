//! Pieces module - tetromino shapes and the kickless rotation transform
//!
//! Shapes are sets of 4 (dx, dy) offsets relative to an anchor. Rotation is
//! the pure geometric map (dx, dy) -> (dy, -dx) applied to every offset:
//! there are no wall kicks and no re-centering, so callers validate the
//! rotated shape against the board and discard it on collision, leaving the
//! piece in its prior orientation.

use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// Get the unrotated shape for a piece kind
pub fn base_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::I => [(-1, 0), (0, 0), (1, 0), (2, 0)],
        PieceKind::S => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        PieceKind::Z => [(1, 0), (0, 0), (0, 1), (-1, 1)],
        PieceKind::L => [(-1, 0), (0, 0), (1, 0), (1, 1)],
        PieceKind::J => [(-1, 0), (0, 0), (1, 0), (-1, 1)],
        PieceKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
    }
}

/// Rotate a shape 90 degrees clockwise about its anchor.
pub fn rotate_cw(shape: &PieceShape) -> PieceShape {
    let mut out = *shape;
    for offset in &mut out {
        *offset = (offset.1, -offset.0);
    }
    out
}

/// Active falling piece: kind, current (possibly rotated) shape, anchor.
///
/// The shape is stored rather than derived from an orientation index because
/// rotation is a transform of the current offsets, not a table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: PieceShape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: base_shape(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            let shape = base_shape(kind);
            assert_eq!(shape.len(), 4);
            // No duplicate offsets within a shape.
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(shape[i], shape[j], "{kind:?} has a duplicate cell");
                }
            }
        }
    }

    #[test]
    fn test_rotation_four_times_is_identity() {
        for kind in PieceKind::ALL {
            let base = base_shape(kind);
            let mut shape = base;
            for _ in 0..4 {
                shape = rotate_cw(&shape);
            }
            assert_eq!(shape, base, "{kind:?} did not return after 4 rotations");
        }
    }

    #[test]
    fn test_rotation_is_the_fixed_transform() {
        // (dx, dy) -> (dy, -dx), offset by offset.
        let shape = base_shape(PieceKind::T);
        let rotated = rotate_cw(&shape);
        for (before, after) in shape.iter().zip(rotated.iter()) {
            assert_eq!(*after, (before.1, -before.0));
        }
    }

    #[test]
    fn test_o_piece_is_not_rotation_invariant() {
        // With an anchor-relative transform the O block shifts when rotated.
        // That matches the movement rules: rotation is never implicitly
        // centered on the block.
        let base = base_shape(PieceKind::O);
        let rotated = rotate_cw(&base);
        assert_ne!(rotated, base);
    }

    #[test]
    fn test_spawn_anchor_is_top_center() {
        let piece = Tetromino::spawn(PieceKind::J);
        assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(piece.shape, base_shape(PieceKind::J));
    }
}
