//! Cross-proof composition: chaining a maze commitment to a path claim
//!
//! This is the only place the otherwise-independent maze generation and
//! path validation pieces meet. A commitment arrives here as an
//! already-authenticated fact (whichever external proof backend produced
//! it established that); this module's job is to bind a caller-supplied
//! grid to that commitment by re-hashing, and only then run the path
//! predicate against it.
//!
//! Order matters for soundness: the hash cross-check always runs first,
//! and a mismatch fails closed with a verdict indistinguishable from an
//! invalid path, so a verifier leaks nothing about which check failed.

use crate::commitment::{grid_digest, MazeCommitment};
use crate::grid::Grid;
use crate::path_verify;

/// Result of one verification attempt
///
/// Produced once per (commitment, moves) pair and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathVerdict {
    /// Whether the supplied grid matched the commitment AND the path
    /// reached the goal
    pub is_valid: bool,

    /// The seed of the maze this verdict is about
    pub seed: u32,
}

/// Two-stage verification against a published commitment
///
/// 1. Re-hash the supplied grid and require equality with the committed
///    hash; on mismatch fail closed.
/// 2. Only then run the path predicate.
pub fn verify_composed(
    commitment: &MazeCommitment,
    supplied_grid: &Grid,
    moves: &[u8],
    max_moves: usize,
) -> PathVerdict {
    if grid_digest(supplied_grid) != commitment.grid_hash {
        // Grid does not match the committed maze; indistinguishable from
        // an invalid path by design
        return PathVerdict {
            is_valid: false,
            seed: commitment.seed,
        };
    }

    PathVerdict {
        is_valid: path_verify::validate(supplied_grid, moves, max_moves),
        seed: commitment.seed,
    }
}

/// The two forms of the verification interface
///
/// Single-proof backends embed the grid directly in their predicate;
/// two-stage backends link to a maze proved elsewhere through its
/// commitment. Both share one external contract: a move buffer in, a
/// verdict out, with identical path semantics.
pub enum Statement<'a> {
    /// Single-stage: the grid is part of the statement itself and is
    /// trusted as supplied
    InlineGrid { seed: u32, grid: &'a Grid },

    /// Two-stage: the grid is untrusted input, bound to a published
    /// commitment by hash equality
    HashCommitment {
        commitment: MazeCommitment,
        grid: &'a Grid,
    },
}

impl Statement<'_> {
    /// Verify a move buffer under this statement
    pub fn verify(&self, moves: &[u8], max_moves: usize) -> PathVerdict {
        match *self {
            Statement::InlineGrid { seed, grid } => PathVerdict {
                is_valid: path_verify::validate(grid, moves, max_moves),
                seed,
            },
            Statement::HashCommitment {
                ref commitment,
                grid,
            } => verify_composed(commitment, grid, moves, max_moves),
        }
    }
}
