//! Path validity predicate
//!
//! Pure boolean predicate over (grid, moves): does the move buffer carry
//! the player from start to end without leaving the paths? Validity is
//! boolean by design so it composes into a single constraint or assertion
//! in any proof backend - the predicate never panics and never mutates the
//! grid.
//!
//! Two rules exist specifically for parity with constraint-based backends,
//! which cannot execute a variable number of steps:
//!
//! - Exactly `max_moves` entries are always processed. There is no early
//!   exit on reaching the goal; once reached, every remaining entry is
//!   accepted and leaves the position unchanged. A fixed-length buffer
//!   padded with no-ops therefore carries a variable-length real solution.
//! - A move byte outside {0, 1, 2, 3} maps to delta (0, 0). It is an
//!   intentional no-op, not an error.

use crate::grid::{Grid, PATH};

// Move encoding (shared with the frontend)
pub const MOVE_NORTH: u8 = 0;
pub const MOVE_EAST: u8 = 1;
pub const MOVE_SOUTH: u8 = 2;
pub const MOVE_WEST: u8 = 3;

/// Canonical padding byte. Any value above MOVE_WEST behaves identically,
/// but artifacts written by this crate always pad with this one.
pub const MOVE_NOOP: u8 = 4;

/// Map a move byte to its (row, col) delta; out-of-range bytes are no-ops
fn move_delta(mv: u8) -> (isize, isize) {
    match mv {
        MOVE_NORTH => (-1, 0),
        MOVE_EAST => (0, 1),
        MOVE_SOUTH => (1, 0),
        MOVE_WEST => (0, -1),
        _ => (0, 0),
    }
}

/// Validate a move buffer against a grid
///
/// Returns true iff the buffer is exactly `max_moves` long and walking it
/// from the start position reaches the end position without ever stepping
/// out of bounds or onto a wall. Returns false - never panics - for a
/// wrong-length buffer, an out-of-bounds step, a step into WALL, or a
/// buffer that runs out before the end is reached.
pub fn validate(grid: &Grid, moves: &[u8], max_moves: usize) -> bool {
    // Callers are expected to pad to the fixed buffer length; anything
    // else fails closed
    if moves.len() != max_moves {
        return false;
    }

    let (mut row, mut col) = grid.start();
    let goal = grid.end();

    // Starting position must be on a path
    if grid.get(row, col) != PATH {
        return false;
    }

    let mut reached = false;

    // Always process the full buffer; "stop once reached" is a
    // data-dependent no-op continuation, not a control-flow break
    for &mv in moves {
        if reached {
            continue;
        }

        let (dr, dc) = move_delta(mv);

        // Unsigned wrapping: 0 - 1 lands far above the grid dimensions,
        // so the bounds check alone catches underflow
        let next_row = row.wrapping_add_signed(dr);
        let next_col = col.wrapping_add_signed(dc);

        if next_row >= grid.rows() || next_col >= grid.cols() {
            return false;
        }
        if grid.get(next_row, next_col) != PATH {
            return false;
        }

        row = next_row;
        col = next_col;

        if (row, col) == goal {
            reached = true;
        }
    }

    reached
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze_gen::Maze;
    use crate::solver;
    use alloc::vec;
    use alloc::vec::Vec;

    const TEST_MAX: usize = 100;

    fn test_grid() -> Grid {
        Maze::generate(5, 5, 12345).to_grid()
    }

    fn padded(moves: Vec<u8>) -> Vec<u8> {
        solver::pad_moves(moves, TEST_MAX)
    }

    fn solved_moves(grid: &Grid) -> Vec<u8> {
        let path = solver::solve(grid).expect("generated maze must be solvable");
        solver::path_to_moves(&path)
    }

    #[test]
    fn test_solution_validates() {
        let grid = test_grid();
        let moves = padded(solved_moves(&grid));
        assert!(validate(&grid, &moves, TEST_MAX));
    }

    #[test]
    fn test_wrong_length_buffer_rejected() {
        let grid = test_grid();
        let moves = solved_moves(&grid);
        // Unpadded logical prefix is not enough; the contract is the full
        // fixed-length buffer
        assert!(!validate(&grid, &moves, TEST_MAX));
        assert!(!validate(&grid, &[], TEST_MAX));
    }

    #[test]
    fn test_noop_only_buffer_rejected() {
        let grid = test_grid();
        // Entirely out-of-range bytes: position never changes, goal never
        // reached (start != end here)
        let moves = vec![7u8; TEST_MAX];
        assert!(!validate(&grid, &moves, TEST_MAX));
    }

    #[test]
    fn test_noop_reaches_goal_when_start_is_end() {
        // 1x1 maze: start == end == (1, 1); the first no-op lands on the
        // goal without moving
        let grid = Maze::generate(1, 1, 1).to_grid();
        let moves = vec![MOVE_NOOP; TEST_MAX];
        assert!(validate(&grid, &moves, TEST_MAX));
    }

    #[test]
    fn test_trailing_moves_after_goal_ignored() {
        let grid = test_grid();
        let mut moves = solved_moves(&grid);
        // Junk after the goal, including bytes that would otherwise step
        // into walls, must be accepted unconditionally
        moves.extend([MOVE_NORTH, MOVE_NORTH, MOVE_WEST, 200]);
        let moves = padded(moves);
        assert!(validate(&grid, &moves, TEST_MAX));
    }

    #[test]
    fn test_interleaved_noops_are_harmless() {
        let grid = test_grid();
        let mut moves = Vec::new();
        for mv in solved_moves(&grid) {
            moves.push(MOVE_NOOP);
            moves.push(mv);
        }
        let max = moves.len();
        assert!(validate(&grid, &moves, max));
    }

    #[test]
    fn test_wall_hit_rejected() {
        // Hand-built 3x5 grid: start (1,1) and goal (1,3) are paths but
        // the cell between them is a wall
        let grid = Grid::from_rows(&[
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 0, 1, 0],
            vec![0, 0, 0, 0, 0],
        ])
        .unwrap();
        let moves = padded(vec![MOVE_EAST, MOVE_EAST]);
        assert!(!validate(&grid, &moves, TEST_MAX));
    }

    #[test]
    fn test_border_wall_rejected() {
        let grid = test_grid();
        // NORTH from (1, 1) targets row 0, always a border wall in a
        // generated grid
        let moves = padded(vec![MOVE_NORTH]);
        assert!(!validate(&grid, &moves, TEST_MAX));
    }

    #[test]
    fn test_row_underflow_caught_by_bounds_check() {
        // A malformed grid with a path hole in the border row: stepping
        // NORTH from row 0 must underflow past the bounds check rather
        // than wrap around or panic
        let grid = Grid::from_rows(&[
            vec![0, 1, 0, 0, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0],
        ])
        .unwrap();
        let moves = padded(vec![MOVE_NORTH, MOVE_NORTH]);
        assert!(!validate(&grid, &moves, TEST_MAX));
    }

    #[test]
    fn test_grid_not_mutated() {
        let grid = test_grid();
        let before = grid.as_bytes().to_vec();
        let _ = validate(&grid, &padded(solved_moves(&grid)), TEST_MAX);
        assert_eq!(grid.as_bytes(), &before[..]);
    }
}
