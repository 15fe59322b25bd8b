//! Slide-merge engine
//!
//! One primitive does all the work: slide every row a single step to the
//! left, merging at most one adjacent pair per row. The session rotates the
//! board so this algorithm serves all four directions; no direction gets its
//! own copy of the rules.
//!
//! Merge rules: an empty cell absorbs any tile, 1 and 2 combine into 3, and
//! equal power tiles (>= 3) double.

use arrayvec::ArrayVec;

use crate::core::board::{Board, MotionBoard};
use crate::types::{Tile, BOARD_SIZE, POWER_BASE};

/// Result of sliding a board one step to the left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideOutcome {
    /// The board after the slide
    pub board: Board,
    /// Which tile slides into each destination cell, for one animation step
    pub motion: MotionBoard,
    /// Cells opened up on the trailing edge, at most one per row; a freshly
    /// dealt tile may legally land on any of them
    pub exposed: ArrayVec<(usize, usize), BOARD_SIZE>,
}

/// True when tile `b` may move into a cell holding `a`
fn can_merge(a: Tile, b: Tile) -> bool {
    b != 0 && (a == 0 || a + b == POWER_BASE || (a >= POWER_BASE && a == b))
}

/// Slide every row of `board` one step left.
///
/// Each row is scanned with a source cursor running one ahead of the
/// destination once a merge has consumed an extra cell. Rows are
/// independent; there is no interaction between them.
pub fn slide_left(board: &Board) -> SlideOutcome {
    let mut res = Board::new();
    let mut motion = MotionBoard::new();
    let mut exposed = ArrayVec::new();

    for row in 0..BOARD_SIZE {
        // Next not-yet-placed source column for this row.
        let mut src = 0;
        for col in 0..BOARD_SIZE {
            let mut a = if src == BOARD_SIZE {
                // Cursor exhausted: the trailing cell opens up.
                exposed.push((row, BOARD_SIZE - 1));
                0
            } else {
                board.at(row, src)
            };
            let mut moving = a;

            if src == col && col + 1 < BOARD_SIZE {
                let b = board.at(row, col + 1);
                if can_merge(a, b) {
                    // `b` is the tile that visually slides into this slot.
                    moving = b;
                    a += b;
                    src += 1;
                }
            }

            res.put(row, col, a);
            // Motion is drawn only where the occupant demonstrably moved:
            // the cursor ran ahead of the destination and the cell is not
            // left empty.
            let cell = if src != col && a != 0 { Some(moving) } else { None };
            motion.put(row, col, cell);
            src += 1;
        }
    }

    SlideOutcome {
        board: res,
        motion,
        exposed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_board(cells: [Tile; BOARD_SIZE]) -> Board {
        let mut board = Board::new();
        for (col, &v) in cells.iter().enumerate() {
            board.put(0, col, v);
        }
        board
    }

    fn top_row(board: &Board) -> [Tile; BOARD_SIZE] {
        [
            board.at(0, 0),
            board.at(0, 1),
            board.at(0, 2),
            board.at(0, 3),
        ]
    }

    #[test]
    fn test_can_merge_rules() {
        // Empty absorbs any tile.
        assert!(can_merge(0, 1));
        assert!(can_merge(0, 24));
        // 1 and 2 combine either way around.
        assert!(can_merge(1, 2));
        assert!(can_merge(2, 1));
        // Equal power tiles double.
        assert!(can_merge(3, 3));
        assert!(can_merge(12, 12));
        // Nothing moves out of an empty cell.
        assert!(!can_merge(1, 0));
        // Equal base tiles never merge.
        assert!(!can_merge(1, 1));
        assert!(!can_merge(2, 2));
        // Unequal power tiles never merge.
        assert!(!can_merge(3, 6));
        assert!(!can_merge(6, 3));
    }

    #[test]
    fn test_base_pair_merges() {
        let outcome = slide_left(&row_board([1, 2, 0, 0]));
        assert_eq!(top_row(&outcome.board), [3, 0, 0, 0]);
        // The 2 is the tile that slides into the merge cell.
        assert_eq!(outcome.motion.at(0, 0), Some(2));
        assert_eq!(outcome.exposed.as_slice(), &[(0, 3)]);
    }

    #[test]
    fn test_base_pair_merges_reversed() {
        let outcome = slide_left(&row_board([2, 1, 0, 0]));
        assert_eq!(top_row(&outcome.board), [3, 0, 0, 0]);
        assert_eq!(outcome.motion.at(0, 0), Some(1));
    }

    #[test]
    fn test_equal_power_tiles_double() {
        let outcome = slide_left(&row_board([3, 3, 0, 0]));
        assert_eq!(top_row(&outcome.board), [6, 0, 0, 0]);

        let outcome = slide_left(&row_board([24, 24, 0, 0]));
        assert_eq!(top_row(&outcome.board), [48, 0, 0, 0]);
    }

    #[test]
    fn test_equal_base_tiles_do_not_merge() {
        let outcome = slide_left(&row_board([1, 1, 0, 0]));
        assert_eq!(top_row(&outcome.board), [1, 1, 0, 0]);
        assert!(outcome.motion.is_still());
        assert!(outcome.exposed.is_empty());
    }

    #[test]
    fn test_unequal_power_tiles_do_not_merge() {
        let outcome = slide_left(&row_board([3, 6, 0, 0]));
        assert_eq!(top_row(&outcome.board), [3, 6, 0, 0]);
        assert!(outcome.motion.is_still());
        assert!(outcome.exposed.is_empty());
    }

    #[test]
    fn test_empty_cell_absorbs_and_row_shifts() {
        let outcome = slide_left(&row_board([0, 3, 3, 0]));
        assert_eq!(top_row(&outcome.board), [3, 3, 0, 0]);
        // Both power tiles shift one slot; they do not merge mid-slide.
        assert_eq!(outcome.motion.at(0, 0), Some(3));
        assert_eq!(outcome.motion.at(0, 1), Some(3));
        assert_eq!(outcome.motion.at(0, 2), None);
        assert_eq!(outcome.exposed.as_slice(), &[(0, 3)]);
    }

    #[test]
    fn test_one_merge_per_row() {
        let outcome = slide_left(&row_board([1, 2, 1, 2]));
        // The leading pair merges; the rest shift one slot without merging.
        assert_eq!(top_row(&outcome.board), [3, 1, 2, 0]);
        assert_eq!(outcome.motion.at(0, 0), Some(2));
        assert_eq!(outcome.motion.at(0, 1), Some(1));
        assert_eq!(outcome.motion.at(0, 2), Some(2));
        assert_eq!(outcome.motion.at(0, 3), None);
        assert_eq!(outcome.exposed.as_slice(), &[(0, 3)]);
    }

    #[test]
    fn test_stationary_tiles_report_no_motion() {
        let outcome = slide_left(&row_board([1, 0, 2, 0]));
        assert_eq!(top_row(&outcome.board), [1, 2, 0, 0]);
        // The 1 sits still while the 2 slides in behind it.
        assert_eq!(outcome.motion.at(0, 0), None);
        assert_eq!(outcome.motion.at(0, 1), Some(2));
        assert_eq!(outcome.exposed.as_slice(), &[(0, 3)]);
    }

    #[test]
    fn test_rows_are_independent() {
        let mut board = Board::new();
        // Row 0 merges, row 2 shifts, rows 1 and 3 are empty.
        board.put(0, 0, 1);
        board.put(0, 1, 2);
        board.put(2, 1, 6);

        let outcome = slide_left(&board);
        assert_eq!(outcome.board.at(0, 0), 3);
        assert_eq!(outcome.board.at(2, 0), 6);
        assert_eq!(outcome.board.at(2, 1), 0);
        assert_eq!(outcome.exposed.as_slice(), &[(0, 3), (2, 3)]);
    }

    #[test]
    fn test_full_locked_board_does_not_move() {
        let mut board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                board.put(row, col, 1);
            }
        }
        let outcome = slide_left(&board);
        assert_eq!(outcome.board, board);
        assert!(outcome.motion.is_still());
        assert!(outcome.exposed.is_empty());
    }
}
