//! Pluggable action sources.
//!
//! Action selection is injected into the lifecycle rather than
//! hard-coded; the default source samples each action dimension
//! independently and uniformly from the action range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::params::{ACTION_HIGH, ACTION_LOW, ACTION_SEED};

/// Source of actions for the rollout loop. May be stochastic.
pub trait ActionSource {
    /// Reseeds the source's random stream, if it has one.
    fn seed(&mut self, value: u64);

    /// Produces one action vector of the given dimensionality.
    fn sample(&mut self, action_dimension: usize) -> Vec<f64>;
}

/// Independent uniform sample per action dimension in
/// `[ACTION_LOW, ACTION_HIGH]`.
pub struct UniformActionSource {
    rng: StdRng,
}

impl Default for UniformActionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformActionSource {
    /// Creates the source seeded with the fixed action seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(ACTION_SEED),
        }
    }
}

impl ActionSource for UniformActionSource {
    fn seed(&mut self, value: u64) {
        self.rng = StdRng::seed_from_u64(value);
    }

    fn sample(&mut self, action_dimension: usize) -> Vec<f64> {
        (0..action_dimension)
            .map(|_| self.rng.random_range(ACTION_LOW..=ACTION_HIGH))
            .collect()
    }
}

/// Fixed action vector, for scripted control and tests.
pub struct ConstantActionSource {
    action: Vec<f64>,
}

impl ConstantActionSource {
    /// Creates a source that always returns `action`.
    #[must_use]
    pub fn new(action: Vec<f64>) -> Self {
        Self { action }
    }
}

impl ActionSource for ConstantActionSource {
    fn seed(&mut self, _value: u64) {}

    fn sample(&mut self, _action_dimension: usize) -> Vec<f64> {
        self.action.clone()
    }
}
