//! Sources of randomness.
//!
//! The generator never touches global randomness. Every draw goes through a
//! [`RandomSource`], which is either a seeded PRNG for real runs or a
//! [`ScriptedSource`] whose output can be predicted by hand.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The primitive draws the generator is built from.
pub trait RandomSource {
    /// Roll one die: a uniform value in `1..=sides`.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// A uniform index in `0..len`. Returns 0 for an empty range.
    fn pick_index(&mut self, len: usize) -> usize;

    /// True with the given probability (clamped to `0.0..=1.0`).
    fn chance(&mut self, probability: f64) -> bool;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn roll_die(&mut self, sides: u32) -> u32 {
        (**self).roll_die(sides)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }
}

/// A seeded PRNG that remembers its seed so a run can be reproduced.
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: StdRng,
    seed: u64,
}

impl SeededRng {
    /// Create a source seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a source with a freshly drawn seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRng {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides.max(1))
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }
}

/// A deterministic source that counts upward, one step per draw.
///
/// With the cursor at `c`, a die of `s` sides shows `c % s + 1`, an index
/// into `n` items is `c % n`, and `chance(p)` succeeds when
/// `c % 100 < round(p * 100)`. Every draw advances the cursor by one, so
/// the outcome of a whole generation run can be worked out on paper.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    cursor: u64,
    draws: u64,
}

impl ScriptedSource {
    /// Start counting from `start`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            cursor: start,
            draws: 0,
        }
    }

    /// How many draws have been made so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    fn advance(&mut self) -> u64 {
        let value = self.cursor;
        self.cursor = self.cursor.wrapping_add(1);
        self.draws += 1;
        value
    }
}

impl RandomSource for ScriptedSource {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let value = self.advance();
        (value % u64::from(sides.max(1))) as u32 + 1
    }

    fn pick_index(&mut self, len: usize) -> usize {
        let value = self.advance();
        if len == 0 {
            return 0;
        }
        (value % len as u64) as usize
    }

    fn chance(&mut self, probability: f64) -> bool {
        let value = self.advance();
        let threshold = (probability.clamp(0.0, 1.0) * 100.0).round() as u64;
        value % 100 < threshold
    }
}
