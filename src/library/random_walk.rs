//! Action-driven random walk with a learned gain parameter.
//!
//! Joint belief layout: `[position | gain]`. The smallest member of
//! the library; its state block is one-dimensional, which exercises
//! heterogeneous dimensionality across library entries.

use crate::error::{AgentError, Result};
use crate::estimation::{BeliefState, Covariance};
use crate::library::{ModelConfig, SimpleModel};
use crate::params::{
    GAIN_PRIOR_MEAN, GAIN_PRIOR_VAR, INIT_WALK_VAR, MODEL_DT, OBS_NOISE, PARAM_DRIFT_VAR,
    STATE_PROCESS_VAR,
};

const STATE_DIM: usize = 1;
const BELIEF_DIM: usize = 2;

/// Position random walk `x' = x + dt·gain·a`.
pub struct RandomWalkModel {
    config: ModelConfig,
    param_mean: Vec<f64>,
    param_var: Vec<f64>,
}

impl Default for RandomWalkModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomWalkModel {
    /// Creates the model with the gain posterior at its prior.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ModelConfig {
                state_dimension: STATE_DIM,
                parameter_dimension: 1,
            },
            param_mean: vec![GAIN_PRIOR_MEAN],
            param_var: vec![GAIN_PRIOR_VAR],
        }
    }

    fn check_observation(observation: &[f64]) -> Result<()> {
        if observation.len() == 1 {
            Ok(())
        } else {
            Err(AgentError::ShapeMismatch {
                context: "random walk observation",
                expected: 1,
                got: observation.len(),
            })
        }
    }
}

impl SimpleModel for RandomWalkModel {
    fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn predict(&mut self, action: &[f64], belief: &BeliefState) -> Result<BeliefState> {
        if action.len() != 1 {
            return Err(AgentError::ShapeMismatch {
                context: "random walk action",
                expected: 1,
                got: action.len(),
            });
        }
        if belief.dim() != BELIEF_DIM {
            return Err(AgentError::ShapeMismatch {
                context: "random walk belief",
                expected: BELIEF_DIM,
                got: belief.dim(),
            });
        }

        let (x, gain) = (belief.mean[0], belief.mean[1]);
        let a = action[0];

        let mean = vec![x + MODEL_DT * gain * a, gain];

        #[rustfmt::skip]
        let jacobian = [
            1.0, MODEL_DT * a,
            0.0, 1.0,
        ];
        let mut covariance = belief.covariance.sandwich(&jacobian);
        covariance.add_diagonal(&[STATE_PROCESS_VAR, PARAM_DRIFT_VAR]);

        let predicted = BeliefState::new(mean, covariance)?;
        self.param_mean = predicted.param_mean(STATE_DIM).to_vec();
        self.param_var = predicted.param_var(STATE_DIM);
        Ok(predicted)
    }

    fn observe(&mut self, observation: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
        Self::check_observation(observation)?;
        Ok((vec![observation[0]], vec![OBS_NOISE]))
    }

    fn reset_episode(&mut self, observation: &[f64]) -> Result<BeliefState> {
        Self::check_observation(observation)?;
        let mean = vec![observation[0], self.param_mean[0]];
        let covariance = Covariance::from_diagonal(&[INIT_WALK_VAR, self.param_var[0]]);
        BeliefState::new(mean, covariance)
    }

    fn reset_trial(&mut self) {
        self.param_mean = vec![GAIN_PRIOR_MEAN];
        self.param_var = vec![GAIN_PRIOR_VAR];
    }
}
