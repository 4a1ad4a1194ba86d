//! The random number source shared by the game and the array exercises.
//!
//! It is a thin wrapper over `fastrand`'s generator that remembers the closed range it was built
//! for, so callers only ever ask for "the next number" and never pass bounds around.

use std::ops::RangeInclusive;

use fastrand::Rng;

/// A uniform generator of integers within a fixed closed range.
///
/// Successive draws are independent. The seed is never exposed; a deterministic generator can be
/// built with [`RandomNumberGenerator::with_seed`] for reproducible runs.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    /// The closed range every draw falls into.
    range: RangeInclusive<i32>,
    /// The underlying generator.
    rng: Rng,
}

impl RandomNumberGenerator {
    /// Draws the next number in `[minimum, maximum]`.
    pub fn generate(&mut self) -> i32 {
        self.rng.i32(self.range.clone())
    }

    /// Creates a generator over `[minimum, maximum]` seeded from system entropy.
    ///
    /// The caller is responsible for `minimum <= maximum`; `fastrand` panics on an empty range.
    #[must_use]
    pub fn new(minimum: i32, maximum: i32) -> Self {
        Self {
            range: minimum..=maximum,
            rng: Rng::new(),
        }
    }

    /// Creates a generator over `[minimum, maximum]` that always yields the same sequence for the
    /// same `seed`.
    #[must_use]
    pub fn with_seed(minimum: i32, maximum: i32, seed: u64) -> Self {
        Self {
            range: minimum..=maximum,
            rng: Rng::with_seed(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RandomNumberGenerator;

    #[test]
    fn never_leaves_range() {
        for (minimum, maximum) in [(1, 2), (1, 10), (7, 9), (100, 1_000)] {
            let mut rng = RandomNumberGenerator::new(minimum, maximum);
            for _ in 0..10_000 {
                let value = rng.generate();
                assert!(
                    (minimum..=maximum).contains(&value),
                    "{value} is outside [{minimum}, {maximum}]"
                );
            }
        }
    }

    #[test]
    fn covers_both_bounds() {
        let mut rng = RandomNumberGenerator::with_seed(1, 3, 42);
        let draws: Vec<i32> = (0..1_000).map(|_| rng.generate()).collect();

        assert!(draws.contains(&1), "lower bound never drawn");
        assert!(draws.contains(&3), "upper bound never drawn");
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut left = RandomNumberGenerator::with_seed(1, 100, 7);
        let mut right = RandomNumberGenerator::with_seed(1, 100, 7);

        for _ in 0..100 {
            assert_eq!(left.generate(), right.generate(), "seeded sequences diverged");
        }
    }
}
