//! Host-side operations over the maze core
//!
//! This crate is the auditor and interaction surface: it generates mazes
//! from visible seeds, produces reference solutions, and sanity-checks a
//! (commitment, grid, moves) triple outside any proof system before anyone
//! bothers to generate or accept a real proof. Proof backends embed the
//! same core predicate; this crate has no opinion on proof serialization.

use labyrinth_core::{
    render, solver, Grid, Maze, MazeCommitment, PathVerdict, Statement, HASH_SIZE, MAX_MOVES,
};
use serde::{Deserialize, Serialize};
use std::fs;

/// Largest maze dimension the CLI will generate
///
/// The core itself is general; this bound just keeps artifacts and solve
/// times sane for interactive use.
pub const MAX_CLI_DIMENSION: usize = 50;

/// Artifact size cap when loading JSON (prevents loading gigabytes)
const MAX_ARTIFACT_BYTES: usize = 10_000_000;

/// A generated maze plus its published commitment, as written to disk
///
/// The grid is stored in full for visualization and as the untrusted
/// input to verification; the hash is the compact fact other parties
/// actually commit to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MazeRecord {
    /// The seed this maze was generated from
    pub seed: u32,

    /// Maze dimensions in cells (not counting walls)
    pub rows: usize,
    pub cols: usize,

    /// The binary grid (0 = wall, 1 = path), nested rows
    pub grid: Vec<Vec<u8>>,

    /// SHA-256 hash of the grid's flat byte form
    pub grid_hash: [u8; HASH_SIZE],
}

/// A padded move buffer for one maze, as written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionRecord {
    /// The seed of the maze this solution is for
    pub seed: u32,

    /// Number of real moves before the no-op padding
    pub move_count: usize,

    /// The full fixed-length buffer (always MAX_MOVES entries)
    pub moves: Vec<u8>,
}

impl MazeRecord {
    /// The published commitment this record carries
    pub fn commitment(&self) -> MazeCommitment {
        MazeCommitment {
            seed: self.seed,
            grid_hash: self.grid_hash,
        }
    }

    /// Rebuild the grid from the stored rows, failing closed on any shape
    /// or value the core would not have produced
    pub fn to_grid(&self) -> Result<Grid, Box<dyn std::error::Error>> {
        Grid::from_rows(&self.grid)
            .ok_or_else(|| format!("maze record for seed {} holds a malformed grid", self.seed).into())
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), Box<dyn std::error::Error>> {
    if rows == 0 || cols == 0 {
        return Err("maze dimensions must be positive".into());
    }
    if rows > MAX_CLI_DIMENSION || cols > MAX_CLI_DIMENSION {
        return Err(format!(
            "maze dimensions {}x{} exceed the maximum of {}",
            rows, cols, MAX_CLI_DIMENSION
        )
        .into());
    }
    Ok(())
}

/// Generate a maze and commit to it
pub fn build_maze_record(
    seed: u32,
    rows: usize,
    cols: usize,
) -> Result<MazeRecord, Box<dyn std::error::Error>> {
    check_dimensions(rows, cols)?;

    tracing::info!("Generating {}x{} maze for seed {}", rows, cols, seed);

    let grid = Maze::generate(rows, cols, seed).to_grid();
    let commitment = MazeCommitment::commit(seed, &grid);

    tracing::info!(
        "Committed grid hash {:02x}{:02x}{:02x}{:02x}... for seed {}",
        commitment.grid_hash[0],
        commitment.grid_hash[1],
        commitment.grid_hash[2],
        commitment.grid_hash[3],
        seed
    );

    Ok(MazeRecord {
        seed,
        rows,
        cols,
        grid: grid.to_rows(),
        grid_hash: commitment.grid_hash,
    })
}

/// Produce the reference solution for a recorded maze, padded to the
/// fixed buffer length
pub fn solve_record(record: &MazeRecord) -> Result<SolutionRecord, Box<dyn std::error::Error>> {
    let grid = record.to_grid()?;

    let path = solver::solve(&grid)
        .ok_or_else(|| format!("maze for seed {} is not solvable", record.seed))?;
    let moves = solver::path_to_moves(&path);

    if moves.len() > MAX_MOVES {
        return Err(format!(
            "solution needs {} moves but the buffer holds {}",
            moves.len(),
            MAX_MOVES
        )
        .into());
    }

    tracing::info!(
        "Solved maze for seed {} in {} moves (padded to {})",
        record.seed,
        moves.len(),
        MAX_MOVES
    );

    Ok(SolutionRecord {
        seed: record.seed,
        move_count: moves.len(),
        moves: solver::pad_moves(moves, MAX_MOVES),
    })
}

/// Audit a (commitment, grid, moves) triple outside any proof system
///
/// Rebuilds the commitment from the record, treats the stored grid as
/// untrusted input, and runs the two-stage verifier: hash cross-check
/// first, then the path predicate. Shape errors (mismatched seeds, a
/// wrong-length move buffer, a malformed grid) are caller mistakes and
/// surface as errors; a verdict - valid or not - means the protocol ran.
pub fn audit_record(
    maze: &MazeRecord,
    solution: &SolutionRecord,
) -> Result<PathVerdict, Box<dyn std::error::Error>> {
    if solution.seed != maze.seed {
        return Err(format!(
            "solution is for seed {} but maze record is for seed {}",
            solution.seed, maze.seed
        )
        .into());
    }
    if solution.moves.len() != MAX_MOVES {
        return Err(format!(
            "move buffer must hold exactly {} entries, got {}",
            MAX_MOVES,
            solution.moves.len()
        )
        .into());
    }

    let grid = maze.to_grid()?;
    let statement = Statement::HashCommitment {
        commitment: maze.commitment(),
        grid: &grid,
    };

    let verdict = statement.verify(&solution.moves, MAX_MOVES);
    tracing::info!(
        "Audit verdict for seed {}: {}",
        verdict.seed,
        if verdict.is_valid { "valid" } else { "invalid" }
    );

    Ok(verdict)
}

/// ASCII preview of a maze generated from a seed
pub fn preview(seed: u32, rows: usize, cols: usize) -> Result<String, Box<dyn std::error::Error>> {
    check_dimensions(rows, cols)?;
    let grid = Maze::generate(rows, cols, seed).to_grid();
    Ok(render::render(&grid))
}

pub fn save_maze_record(
    record: &MazeRecord,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_maze_record(path: &str) -> Result<MazeRecord, Box<dyn std::error::Error>> {
    let json = read_artifact(path)?;
    let record: MazeRecord = serde_json::from_str(&json)?;

    // Validate shape before anything downstream touches it
    let grid_rows = record.grid.len();
    let grid_cols = record.grid.first().map(|r| r.len()).unwrap_or(0);
    if grid_rows != record.rows * 2 + 1 || grid_cols != record.cols * 2 + 1 {
        return Err(format!(
            "maze record for seed {} has a {}x{} grid, expected {}x{}",
            record.seed,
            grid_rows,
            grid_cols,
            record.rows * 2 + 1,
            record.cols * 2 + 1
        )
        .into());
    }
    record.to_grid()?;

    Ok(record)
}

pub fn save_solution_record(
    record: &SolutionRecord,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_solution_record(path: &str) -> Result<SolutionRecord, Box<dyn std::error::Error>> {
    let json = read_artifact(path)?;
    let record: SolutionRecord = serde_json::from_str(&json)?;

    if record.moves.len() != MAX_MOVES {
        return Err(format!(
            "solution record holds {} moves, expected exactly {}",
            record.moves.len(),
            MAX_MOVES
        )
        .into());
    }
    if record.move_count > MAX_MOVES {
        return Err(format!("move_count {} exceeds the buffer", record.move_count).into());
    }

    Ok(record)
}

fn read_artifact(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    if json.len() > MAX_ARTIFACT_BYTES {
        return Err(format!("artifact {} is too large (max 10MB)", path).into());
    }
    Ok(json)
}
