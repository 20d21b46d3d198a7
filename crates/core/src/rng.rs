//! RNG module - deterministic placement randomness
//!
//! Hazard and coin placement draws from a small LCG so that a seed fully
//! determines a game (useful for trace replays and tests).

use crate::types::{GridPos, CELL_COUNT, GRID_SIZE};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// repeat with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Random grid index in 0..100.
    pub fn next_index(&mut self) -> u8 {
        self.next_range(CELL_COUNT as u32) as u8
    }

    /// Random on-grid cell, x drawn before z.
    pub fn next_cell(&mut self) -> GridPos {
        let x = self.next_range(GRID_SIZE as u32) as i8;
        let z = self.next_range(GRID_SIZE as u32) as i8;
        GridPos::new(x, z)
    }

    /// Current state (a seed that reproduces the remaining sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_cells_and_indices_stay_on_grid() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_index() < CELL_COUNT);
            assert!(rng.next_cell().in_bounds());
        }
    }

    #[test]
    fn test_indices_cover_the_grid() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; CELL_COUNT as usize];
        for _ in 0..5000 {
            seen[rng.next_index() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every cell should eventually be rolled");
    }

    #[test]
    fn test_state_resumes_sequence() {
        let mut rng = SimpleRng::new(42);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }
}
