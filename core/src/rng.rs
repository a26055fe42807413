//! Park-Miller Linear Congruential Generator (MINSTD)
//!
//! Every independent implementation of the maze (interactive client, proof
//! backends, server-side regenerator) must derive the same stream from the
//! same seed, so this generator uses pure integer arithmetic only - no
//! floating point anywhere.
//!
//! Constants:
//! - Multiplier (a): 48271
//! - Modulus (m): 2^31 - 1 = 2147483647
//!
//! Reference: https://en.wikipedia.org/wiki/Lehmer_random_number_generator

/// Park-Miller Linear Congruential Generator
///
/// Generates a deterministic sequence of pseudo-random numbers from a seed.
/// Same seed always produces the same sequence.
pub struct Minstd {
    state: u32,
}

impl Minstd {
    const A: u64 = 48271;
    const M: u64 = 2147483647; // 2^31 - 1

    /// Create a new generator with the given seed
    ///
    /// Seed 0 is a fixed point of the recurrence and is replaced with 1.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Advance state and return the next value in [0, M)
    ///
    /// Uses a u64 intermediate to avoid overflow during multiplication.
    pub fn next(&mut self) -> u32 {
        self.state = ((self.state as u64 * Self::A) % Self::M) as u32;
        self.state
    }

    /// Choose a random index from [0, n), uniformly among n options
    ///
    /// Computed as (next() * n) / M using integer arithmetic only, so
    /// independent implementations agree to the last bit.
    pub fn choice_index(&mut self, n: usize) -> usize {
        let scaled = (self.next() as u64 * n as u64) / Self::M;
        scaled as usize
    }
}
