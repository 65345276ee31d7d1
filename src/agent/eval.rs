//! Board evaluation heuristic for the placement agent
//!
//! Scores a simulated post-lock board; higher is better. The two penalty
//! features are column height and covered holes, with a large bonus term for
//! completed lines.
//!
//! Two quirks are load-bearing; the agent's play style depends on them:
//! - A column's "height" is the largest occupied row index in that column
//!   (0 for an empty column), not the stack height measured from the floor.
//! - `full_lines` is always 0: the board is scored before any line clear is
//!   applied, and completed rows are not detected separately.

use crate::core::Board;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Weight on the covered-hole count.
const HOLE_WEIGHT: i32 = 5;
/// Weight on completed lines (see module docs: the term never fires).
const FULL_LINE_WEIGHT: i32 = 100;

/// Score a board; higher scores are preferred placements.
pub fn evaluate(board: &Board) -> i32 {
    let mut height = 0i32;
    let mut holes = 0i32;
    let full_lines = 0i32;

    for x in 0..BOARD_WIDTH as i8 {
        let mut column_height = 0i32;
        let mut gap_above = false;
        for y in 0..BOARD_HEIGHT as i8 {
            if board.is_occupied(x, y) {
                column_height = column_height.max(y as i32);
                if gap_above {
                    holes += 1;
                }
            } else {
                gap_above = true;
            }
        }
        height += column_height;
    }

    -height - HOLE_WEIGHT * holes + FULL_LINE_WEIGHT * full_lines
}
