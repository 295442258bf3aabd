//! Deterministic random number generation for battles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical battles
//! - **Forkable**: Derive independent per-battle or per-matchup streams
//!
//! ## Batch Usage
//!
//! ```
//! use rust_skirmish::core::BattleRng;
//!
//! let mut master = BattleRng::new(42);
//!
//! // One stream per battle
//! let mut battle_a = master.fork();
//! let mut battle_b = master.fork();
//!
//! assert_ne!(battle_a.gen_range_usize(0..1000), battle_b.gen_range_usize(0..1000));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG owned by a single battle.
///
/// Uses ChaCha8 for speed with good statistical quality. Each battle (or
/// worker) gets its own instance, so results never depend on scheduling.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        Self::new(Self::fork_seed(self.seed, self.fork_counter))
    }

    /// The stream `fork` would return after `index` calls, without
    /// advancing this RNG.
    ///
    /// Lets parallel workers derive their streams from a master seed
    /// independent of scheduling order.
    #[must_use]
    pub fn nth_fork(&self, index: u64) -> Self {
        Self::new(Self::fork_seed(self.seed, index.wrapping_add(1)))
    }

    fn fork_seed(seed: u64, counter: u64) -> u64 {
        seed.wrapping_add(counter.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// Uniform draw in `[0, 1)`.
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform draw of a full 64-bit value.
    pub fn gen_u64(&mut self) -> u64 {
        self.inner.gen::<u64>()
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Roll against a probability in `[0, 1]`.
    ///
    /// Succeeds when a uniform draw falls strictly below `probability`, so
    /// 0 never succeeds and 1 always does.
    pub fn roll(&mut self, probability: f64) -> bool {
        self.gen_f64() < probability
    }

    /// Roll against a percentage chance in `[0, 100]`.
    pub fn roll_percent(&mut self, chance_pct: f64) -> bool {
        self.gen_f64() * 100.0 < chance_pct
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Choose an index with probability proportional to its weight.
    ///
    /// Non-positive weights are never chosen and do not count towards the
    /// total. Returns `None` if no weight is positive.
    pub fn choose_weighted(&mut self, weights: &[f64]) -> Option<usize> {
        let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
        if total <= 0.0 {
            return None;
        }

        let mut threshold = self.gen_f64() * total;
        let mut last_positive = None;

        for (i, &weight) in weights.iter().enumerate() {
            if weight <= 0.0 {
                continue;
            }
            last_positive = Some(i);
            threshold -= weight;
            if threshold <= 0.0 {
                return Some(i);
            }
        }

        // Floating point edge case - return last positive weight
        last_positive
    }
}
