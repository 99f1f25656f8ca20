//! Deterministic pseudo-random sequence

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Stateful range draws for one generation call
///
/// Every call to [`Prs::next`] consumes exactly one `f64` from the ChaCha8
/// stream, whether or not the caller keeps the value. There is no re-seed
/// operation; a new sequence needs a new `Prs`.
#[derive(Debug, Clone)]
pub struct Prs {
    rng: ChaCha8Rng,
    draws: u64,
}

impl Prs {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(u64::from(seed)),
            draws: 0,
        }
    }

    /// Uniform value in [min, max)
    ///
    /// Never panics. An empty or inverted range simply yields the affine map
    /// of the unit draw.
    pub fn next(&mut self, min: f64, max: f64) -> f64 {
        let unit: f64 = self.rng.gen();
        self.draws += 1;

        let value = min + unit * (max - min);
        if min < max && value >= max {
            // rounding can land on the open bound for tiny spans
            min
        } else {
            value
        }
    }

    /// Draw in [0, 1) and compare against a probability
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next(0.0, 1.0) < probability
    }

    /// Index in [0, len) from a single draw
    pub fn index(&mut self, len: usize) -> usize {
        let value = self.next(0.0, len as f64).floor() as usize;
        value.min(len.saturating_sub(1))
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> u64 {
        self.draws
    }
}
