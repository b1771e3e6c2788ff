//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests and replays,
//! a seeded or scripted implementation is injected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;

    /// Pick an index in `[0, len)`. Returns `0` for empty and single-item
    /// collections without consuming randomness.
    fn next_index(&mut self, len: usize) -> usize {
        let upper = u32::try_from(len).unwrap_or(u32::MAX);
        if upper <= 1 {
            return 0;
        }
        self.next_u32_range(0, upper - 1) as usize
    }
}

/// Production RNG backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct StdDeterministicRng(StdRng);

impl StdDeterministicRng {
    /// Seeds from the operating system's entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Seeds deterministically, for reproducible sessions.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl DeterministicRng for StdDeterministicRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.0.random_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = StdDeterministicRng::from_seed(7);
        let mut b = StdDeterministicRng::from_seed(7);
        let left: Vec<u32> = (0..32).map(|_| a.next_u32_range(1, 6)).collect();
        let right: Vec<u32> = (0..32).map(|_| b.next_u32_range(1, 6)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_next_u32_range_stays_in_bounds() {
        let mut rng = StdDeterministicRng::from_seed(42);
        for _ in 0..1_000 {
            let value = rng.next_u32_range(1, 6);
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        let mut rng = StdDeterministicRng::from_seed(1);
        assert_eq!(rng.next_u32_range(4, 4), 4);
        assert_eq!(rng.next_u32_range(9, 2), 9);
    }

    #[test]
    fn test_next_index_handles_small_collections() {
        let mut rng = StdDeterministicRng::from_seed(3);
        assert_eq!(rng.next_index(0), 0);
        assert_eq!(rng.next_index(1), 0);
        for _ in 0..100 {
            assert!(rng.next_index(7) < 7);
        }
    }
}
