use rand::Rng;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// Source of randomness used when the search has to pick among equally good moves.
pub trait RandomGenerator: Default {
    /// Returns a non-negative pseudo-random number.
    fn next(&mut self) -> i32;

    /// Returns a number in `from..to`. `to` must be greater than `from`.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Picks one element of `items`, or `None` if it is empty.
    ///
    /// Only the first `i32::MAX` elements can be picked.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        let len = i32::try_from(items.len()).unwrap_or(i32::MAX);
        let index = self.next_range(0, len) as usize;
        items.get(index)
    }
}

/// Draws from the thread-local RNG of the `rand` crate.
#[derive(Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        rand::rng().random_range(0..i32::MAX)
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// A seeded linear congruential generator. The same seed always yields the same sequence.
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl CustomNumberGenerator {
    /// Creates a generator from `seed`. Any `i64` is accepted; it is reduced into the
    /// generator's modulus first.
    pub const fn new(seed: i64) -> Self {
        Self {
            seed: seed.rem_euclid(i32::MAX as i64),
        }
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C).rem_euclid(i32::MAX as i64);
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        self.next() % (to - from) + from
    }
}
