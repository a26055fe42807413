//! Grid commitment: a short cryptographic fact standing in for a maze
//!
//! Publishing the full grid inside every downstream proof is correct but
//! costly - its size dominates proof and verification cost. Committing to
//! a SHA-256 hash of the grid lets the first prover pay a small, fixed
//! hashing cost once; every later prover pays only to re-hash a grid it
//! supplies itself and check equality, never to re-derive the maze from
//! the seed inside its own proof.
//!
//! Serialized form: seed (4 bytes, little-endian) immediately followed by
//! the digest bytes, no padding. This layout is a byte-exact contract
//! across independent implementations.

use sha2::{Digest, Sha256};

use crate::grid::Grid;
use crate::{COMMITMENT_SIZE, HASH_SIZE};

/// A publishable (seed, grid hash) pair
///
/// Produced once per seed, immutable afterwards. Anyone holding the seed
/// can rebuild the grid offline and check it against the hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeCommitment {
    /// The seed the committed maze was generated from
    pub seed: u32,

    /// SHA-256 hash of the grid's flat row-major byte form
    pub grid_hash: [u8; HASH_SIZE],
}

impl MazeCommitment {
    /// Commit to a grid: hash its byte-exact serialization
    pub fn commit(seed: u32, grid: &Grid) -> Self {
        Self {
            seed,
            grid_hash: grid_digest(grid),
        }
    }

    /// Serialize: 4-byte little-endian seed + digest, no padding
    pub fn to_bytes(&self) -> [u8; COMMITMENT_SIZE] {
        let mut bytes = [0u8; COMMITMENT_SIZE];
        bytes[..4].copy_from_slice(&self.seed.to_le_bytes());
        bytes[4..].copy_from_slice(&self.grid_hash);
        bytes
    }

    /// Deserialize; any length other than COMMITMENT_SIZE fails closed
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != COMMITMENT_SIZE {
            return None;
        }

        let seed = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let mut grid_hash = [0u8; HASH_SIZE];
        grid_hash.copy_from_slice(&bytes[4..]);

        Some(Self { seed, grid_hash })
    }
}

/// SHA-256 over the grid's flat row-major bytes
pub fn grid_digest(grid: &Grid) -> [u8; HASH_SIZE] {
    let digest = Sha256::digest(grid.as_bytes());
    digest.into()
}
