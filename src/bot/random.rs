//! Randomness used by the decision policy

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::action::ActionCode;

/// Source of the two random draws the policy makes each turn
pub trait Randomness {
    /// Uniform value in [0.0, 1.0)
    fn chance(&mut self) -> f64;

    /// Uniform choice between two actions
    fn pick(&mut self, pair: [ActionCode; 2]) -> ActionCode;
}

/// Production randomness backed by a `rand` generator
pub struct RngSource<R: Rng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Deterministic source for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> Randomness for RngSource<R> {
    fn chance(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn pick(&mut self, pair: [ActionCode; 2]) -> ActionCode {
        pair[self.rng.random_range(0..pair.len())]
    }
}

/// Replays fixed sequences of draws, cycling when exhausted
#[cfg(test)]
pub struct Scripted {
    chances: Vec<f64>,
    picks: Vec<usize>,
    chance_idx: usize,
    pick_idx: usize,
}

#[cfg(test)]
impl Scripted {
    /// `picks` holds the index (0 or 1) taken from each pair
    pub fn new(chances: Vec<f64>, picks: Vec<usize>) -> Self {
        Self {
            chances,
            picks,
            chance_idx: 0,
            pick_idx: 0,
        }
    }

    pub fn constant(chance: f64, pick: usize) -> Self {
        Self::new(vec![chance], vec![pick])
    }
}

#[cfg(test)]
impl Randomness for Scripted {
    fn chance(&mut self) -> f64 {
        let value = self.chances[self.chance_idx % self.chances.len()];
        self.chance_idx += 1;
        value
    }

    fn pick(&mut self, pair: [ActionCode; 2]) -> ActionCode {
        let idx = self.picks[self.pick_idx % self.picks.len()];
        self.pick_idx += 1;
        pair[idx]
    }
}
