//! Point mass on a finite track.
//!
//! Reference environment for the rollout core: a unit mass driven by
//! a scalar thrust in `[-1, 1]`, damped by drag, disturbed by bounded
//! process noise. The observation is the noisy position; ground truth
//! is the full `[position, velocity]` state. Deterministic under a
//! fixed seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::environment::{Environment, StepInfo, StepOutcome};
use crate::error::{AgentError, Result};
use crate::params::{
    ACTION_HIGH, ACTION_LOW, ENV_DRAG, ENV_DT, MAX_EPISODE_STEPS, OBS_NOISE, PROCESS_NOISE,
    TRACK_HALF_LENGTH,
};

pub(crate) const NAME: &str = "point_mass";

/// Damped point mass on a one-dimensional track.
pub struct PointMassEnv {
    rng: StdRng,
    position: f64,
    velocity: f64,
    steps: u64,
}

impl Default for PointMassEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl PointMassEnv {
    /// Creates the environment with an unseeded default stream.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(0),
            position: 0.0,
            velocity: 0.0,
            steps: 0,
        }
    }

    fn observe(&mut self) -> Vec<f64> {
        let noise = self.rng.random_range(-OBS_NOISE..=OBS_NOISE);
        vec![self.position + noise]
    }
}

impl Environment for PointMassEnv {
    fn seed(&mut self, value: u64) {
        self.rng = StdRng::seed_from_u64(value);
    }

    fn action_dimension(&self) -> usize {
        1
    }

    fn reset(&mut self) -> Vec<f64> {
        self.steps = 0;
        self.position = self.rng.random_range(-0.1..=0.1);
        self.velocity = 0.0;
        self.observe()
    }

    fn step(&mut self, action: &[f64]) -> Result<StepOutcome> {
        if action.len() != 1 {
            return Err(AgentError::ShapeMismatch {
                context: "point mass action",
                expected: 1,
                got: action.len(),
            });
        }
        let thrust = action[0].clamp(ACTION_LOW, ACTION_HIGH);
        let disturbance = self.rng.random_range(-PROCESS_NOISE..=PROCESS_NOISE);

        self.velocity += ENV_DT * (thrust - ENV_DRAG * self.velocity) + disturbance;
        self.position += ENV_DT * self.velocity;
        self.steps += 1;

        let done = self.position.abs() > TRACK_HALF_LENGTH || self.steps >= MAX_EPISODE_STEPS;
        let reward = -self.position.abs();

        Ok(StepOutcome {
            observation: self.observe(),
            reward,
            done,
            info: StepInfo {
                state: vec![self.position, self.velocity],
            },
        })
    }
}
