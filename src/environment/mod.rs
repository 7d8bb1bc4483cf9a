//! Stepped simulation environments.
//!
//! The agent core treats the environment as an external collaborator
//! behind the [`Environment`] trait: seedable, resettable, and stepped
//! one action at a time. Ground truth travels in the step's info
//! payload and is used for evaluation, never for control.

mod point_mass;

use crate::error::{AgentError, Result};

pub use point_mass::PointMassEnv;

/// Side-channel payload of a step, carrying the simulator-internal
/// true state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Ground-truth state of the simulated system.
    pub state: Vec<f64>,
}

/// Everything one environment step returns.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub observation: Vec<f64>,
    pub reward: f64,
    pub done: bool,
    pub info: StepInfo,
}

/// Seedable, steppable simulation.
pub trait Environment {
    /// Reseeds the environment's random stream.
    fn seed(&mut self, value: u64);

    /// Number of entries an action vector must have.
    fn action_dimension(&self) -> usize;

    /// Starts a fresh rollout and returns the initial observation.
    fn reset(&mut self) -> Vec<f64>;

    /// Advances the simulation by one action.
    fn step(&mut self, action: &[f64]) -> Result<StepOutcome>;
}

/// Builds an environment from its registry name.
///
/// Unknown names fail with [`AgentError::UnknownEnvironment`].
pub fn make(name: &str) -> Result<Box<dyn Environment>> {
    match name {
        point_mass::NAME => Ok(Box::new(PointMassEnv::new())),
        _ => Err(AgentError::UnknownEnvironment(name.to_string())),
    }
}
