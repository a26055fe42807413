//! ASCII rendering of a grid for terminal preview
//!
//! Each grid cell becomes two characters to compensate for terminal
//! character aspect ratio.

use alloc::string::String;

use crate::grid::{Grid, WALL};

/// Render a grid as block characters, rows separated by newlines
pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() * 2 + 1));

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            out.push_str(if grid.get(row, col) == WALL { "██" } else { "  " });
        }
        if row + 1 < grid.rows() {
            out.push('\n');
        }
    }

    out
}
