//! Binary occupancy grid for a generated maze
//!
//! A maze of R x C cells becomes a (2R+1) x (2C+1) grid of {WALL, PATH}
//! bytes. Cell(r, c) sits at grid (2r+1, 2c+1); even-indexed rows and
//! columns are inter-cell boundaries, PATH only where the adjoining wall
//! was removed. Grid dimensions are therefore always odd, and the outer
//! border is always WALL.
//!
//! The flat row-major byte form (one byte per cell, values in {0, 1}) is
//! the byte-exact serialization contract shared with every independent
//! reimplementation; the commitment hash is computed over exactly these
//! bytes.

use alloc::vec;
use alloc::vec::Vec;

/// Grid cell values
pub const WALL: u8 = 0;
pub const PATH: u8 = 1;

/// Binary occupancy matrix representing a maze, including wall cells
///
/// Built once by maze generation, read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<u8>, // row-major, rows * cols bytes
}

impl Grid {
    /// Create an all-WALL grid; generation opens passages into it
    pub(crate) fn filled_walls(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![WALL; rows * cols],
        }
    }

    /// Number of grid rows (always odd)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns (always odd)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read the cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.cols + col]
    }

    pub(crate) fn set_path(&mut self, row: usize, col: usize) {
        self.data[row * self.cols + col] = PATH;
    }

    /// Start position, always (1, 1)
    pub fn start(&self) -> (usize, usize) {
        (1, 1)
    }

    /// End position, always (2R-1, 2C-1)
    pub fn end(&self) -> (usize, usize) {
        (self.rows - 2, self.cols - 2)
    }

    /// The byte-exact row-major serialization of the grid
    ///
    /// This is the form that gets hashed for the commitment; all parties
    /// must agree on it byte for byte.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Convert to nested rows for JSON serialization on the host side
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.data.chunks(self.cols).map(|row| row.to_vec()).collect()
    }

    /// Rebuild a grid from nested rows, e.g. loaded from a JSON artifact
    ///
    /// Fails closed: ragged rows, non-binary cell values, or dimensions
    /// that cannot belong to a generated maze (even, or below 3x3) all
    /// return None rather than producing a grid that breaks the invariants
    /// downstream code relies on.
    pub fn from_rows(rows: &[Vec<u8>]) -> Option<Self> {
        let grid_rows = rows.len();
        let grid_cols = rows.first()?.len();
        if grid_rows < 3 || grid_cols < 3 || grid_rows % 2 == 0 || grid_cols % 2 == 0 {
            return None;
        }

        let mut data = Vec::with_capacity(grid_rows * grid_cols);
        for row in rows {
            if row.len() != grid_cols {
                return None;
            }
            for &cell in row {
                if cell != WALL && cell != PATH {
                    return None;
                }
                data.push(cell);
            }
        }

        Some(Self {
            rows: grid_rows,
            cols: grid_cols,
            data,
        })
    }
}
