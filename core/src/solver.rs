//! Reference maze solver
//!
//! Plain breadth-first search over the binary grid. The interactive and
//! auditor surfaces use it to produce a known-good move sequence for a
//! maze, and the test suite doubles it as the connectivity check: a
//! correctly generated grid always has exactly one simple path between
//! start and end, so every correct solver yields the same moves.

use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use crate::grid::{Grid, PATH};
use crate::path_verify::{MOVE_EAST, MOVE_NOOP, MOVE_NORTH, MOVE_SOUTH, MOVE_WEST};

/// Find the shortest path from start to end as a list of grid positions
///
/// Returns None when the end is unreachable, which cannot happen for a
/// generated grid but can for a hand-supplied one. Neighbor probing order
/// is NORTH, EAST, SOUTH, WEST.
pub fn solve(grid: &Grid) -> Option<Vec<(usize, usize)>> {
    let rows = grid.rows();
    let cols = grid.cols();
    let start = grid.start();
    let goal = grid.end();

    let mut parent: Vec<usize> = vec![usize::MAX; rows * cols];
    let mut seen = vec![false; rows * cols];
    let mut queue = VecDeque::new();

    seen[start.0 * cols + start.1] = true;
    queue.push_back(start);

    while let Some((row, col)) = queue.pop_front() {
        if (row, col) == goal {
            // Walk the parent chain back to the start
            let mut path = Vec::new();
            let mut cursor = row * cols + col;
            loop {
                path.push((cursor / cols, cursor % cols));
                if (cursor / cols, cursor % cols) == start {
                    break;
                }
                cursor = parent[cursor];
            }
            path.reverse();
            return Some(path);
        }

        for (dr, dc) in [(-1isize, 0isize), (0, 1), (1, 0), (0, -1)] {
            let nr = row.wrapping_add_signed(dr);
            let nc = col.wrapping_add_signed(dc);
            if nr < rows && nc < cols && grid.get(nr, nc) == PATH && !seen[nr * cols + nc] {
                seen[nr * cols + nc] = true;
                parent[nr * cols + nc] = row * cols + col;
                queue.push_back((nr, nc));
            }
        }
    }

    None
}

/// Convert a position path to direction bytes, one move per step
pub fn path_to_moves(path: &[(usize, usize)]) -> Vec<u8> {
    let mut moves = Vec::with_capacity(path.len().saturating_sub(1));

    for pair in path.windows(2) {
        let (prev_row, prev_col) = pair[0];
        let (row, col) = pair[1];

        let mv = if row == prev_row + 1 {
            MOVE_SOUTH
        } else if row + 1 == prev_row {
            MOVE_NORTH
        } else if col == prev_col + 1 {
            MOVE_EAST
        } else {
            MOVE_WEST
        };
        moves.push(mv);
    }

    moves
}

/// Pad (or clamp) a move sequence to the fixed buffer length
///
/// Trailing entries are MOVE_NOOP; the validator ignores them once the
/// goal is reached. A sequence longer than the buffer is clamped and will
/// simply fail validation.
pub fn pad_moves(mut moves: Vec<u8>, max_moves: usize) -> Vec<u8> {
    moves.truncate(max_moves);
    moves.resize(max_moves, MOVE_NOOP);
    moves
}
