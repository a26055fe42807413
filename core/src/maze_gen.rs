//! Maze generation using the Recursive Backtracker algorithm
//!
//! Generation is fully deterministic: identical (rows, cols, seed) always
//! yields a byte-identical grid, which is what lets an interactive client,
//! a proof backend, and a server-side regenerator all derive the same maze
//! from nothing but the seed.
//!
//! Algorithm: Recursive Backtracker (DFS with backtracking)
//! 1. Start at (0, 0), mark as visited
//! 2. While stack is not empty:
//!    - Get unvisited neighbors of current cell
//!    - If neighbors exist:
//!      * Choose random neighbor
//!      * Remove wall between current and neighbor
//!      * Mark neighbor as visited, push to stack
//!    - Else: backtrack (pop from stack)
//!
//! The stack is explicit (never language recursion) so memory stays bounded
//! by rows * cols and the loop ports cleanly to execution models with fixed
//! step budgets.

use alloc::vec;
use alloc::vec::Vec;

use crate::grid::Grid;
use crate::rng::Minstd;

// Direction constants (shared with the frontend encoding)
const NORTH: usize = 0;
const EAST: usize = 1;
const SOUTH: usize = 2;
const WEST: usize = 3;

/// A cell in the maze with walls in four directions
///
/// Only used during generation; discarded once the grid is built.
#[derive(Clone, Copy)]
struct Cell {
    walls: [bool; 4], // [NORTH, EAST, SOUTH, WEST]
    visited: bool,
}

impl Cell {
    fn new() -> Self {
        Self {
            walls: [true; 4], // All walls present initially
            visited: false,
        }
    }
}

/// Maze generator using the recursive backtracker algorithm
pub struct Maze {
    cells: Vec<Cell>, // row-major, rows * cols
    rows: usize,
    cols: usize,
}

impl Maze {
    /// Generate a maze using the recursive backtracker algorithm
    ///
    /// # Arguments
    /// * `rows` - Number of cell rows (not including walls)
    /// * `cols` - Number of cell columns (not including walls)
    /// * `seed` - RNG seed for deterministic generation
    ///
    /// # Panics
    /// Zero dimensions are a caller precondition violation. Degenerate
    /// single-row or single-column mazes are fine; they fall out of the
    /// general algorithm as plain corridors.
    pub fn generate(rows: usize, cols: usize, seed: u32) -> Self {
        assert!(rows > 0 && cols > 0, "maze dimensions must be positive");

        let mut maze = Self {
            cells: vec![Cell::new(); rows * cols],
            rows,
            cols,
        };

        let mut rng = Minstd::new(seed);
        maze.recursive_backtracker(&mut rng);
        maze
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Recursive backtracker (iterative with explicit stack)
    ///
    /// NOTE: `current` is tracked separately instead of peeking at the
    /// stack each iteration. On a dead end the popped value is the cell we
    /// are backtracking from, so `current` stays on that cell for one more
    /// round before the next pop moves it. Every independent
    /// implementation must share this exact behavior: changing it changes
    /// which RNG draws land where and silently breaks bit-exact
    /// reproduction.
    fn recursive_backtracker(&mut self, rng: &mut Minstd) {
        let mut stack: Vec<(usize, usize)> = Vec::with_capacity(self.rows * self.cols);
        let mut current = (0, 0);

        self.cells[0].visited = true;
        stack.push(current);

        while !stack.is_empty() {
            let (row, col) = current;
            let (neighbors, neighbor_count) = self.unvisited_neighbors(row, col);

            if neighbor_count > 0 {
                // Choose random unvisited neighbor
                let pick = rng.choice_index(neighbor_count);
                let (dir, nr, nc) = neighbors[pick];

                // Remove walls between current cell and neighbor
                let here = self.idx(row, col);
                let there = self.idx(nr, nc);
                self.cells[here].walls[dir] = false;
                self.cells[there].walls[Self::opposite_dir(dir)] = false;

                self.cells[there].visited = true;
                stack.push((nr, nc));
                current = (nr, nc);
            } else if let Some(popped) = stack.pop() {
                // Dead end: popped == current, so current is unchanged and
                // gets inspected once more against a shorter stack
                current = popped;
            }
        }
    }

    /// Get all unvisited neighbors of a cell
    ///
    /// Enumeration order is fixed (NORTH, EAST, SOUTH, WEST); combined
    /// with choice_index this order is part of the bit-exact contract.
    fn unvisited_neighbors(
        &self,
        row: usize,
        col: usize,
    ) -> ([(usize, usize, usize); 4], usize) {
        let mut neighbors = [(0, 0, 0); 4];
        let mut count = 0;

        let directions = [
            (NORTH, row.wrapping_sub(1), col),
            (EAST, row, col + 1),
            (SOUTH, row + 1, col),
            (WEST, row, col.wrapping_sub(1)),
        ];

        for (dir, nr, nc) in directions {
            // wrapping_sub underflow lands above rows/cols and fails the
            // bounds check
            if nr < self.rows && nc < self.cols && !self.cells[nr * self.cols + nc].visited {
                neighbors[count] = (dir, nr, nc);
                count += 1;
            }
        }

        (neighbors, count)
    }

    /// Get the opposite direction
    fn opposite_dir(dir: usize) -> usize {
        match dir {
            NORTH => SOUTH,
            SOUTH => NORTH,
            EAST => WEST,
            WEST => EAST,
            _ => unreachable!(),
        }
    }

    /// Convert the maze to its binary grid representation
    ///
    /// Produces a (rows*2 + 1) x (cols*2 + 1) grid where 0 = wall and
    /// 1 = path. Cell centers sit at (row*2+1, col*2+1); passages open
    /// where the corresponding wall bit was cleared.
    pub fn to_grid(&self) -> Grid {
        let mut grid = Grid::filled_walls(self.rows * 2 + 1, self.cols * 2 + 1);

        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = &self.cells[row * self.cols + col];

                // Cell center position in grid
                let gr = row * 2 + 1;
                let gc = col * 2 + 1;

                // Cell center is always a path
                grid.set_path(gr, gc);

                // Open passages based on walls
                if !cell.walls[NORTH] {
                    grid.set_path(gr - 1, gc);
                }
                if !cell.walls[SOUTH] {
                    grid.set_path(gr + 1, gc);
                }
                if !cell.walls[EAST] {
                    grid.set_path(gr, gc + 1);
                }
                if !cell.walls[WEST] {
                    grid.set_path(gr, gc - 1);
                }
            }
        }

        grid
    }

    /// Number of cells carved into the maze so far
    #[cfg(test)]
    fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visited).count()
    }
}
