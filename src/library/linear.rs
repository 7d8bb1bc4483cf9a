//! Linear point-mass transition with a learned drag parameter.
//!
//! Joint belief layout: `[position, velocity | drag]`. The transition
//! is linearized around the current mean and the covariance is
//! propagated as `A Σ Aᵀ + Q`. The drag estimate follows an
//! Ornstein-Uhlenbeck-style drift toward the nominal plant drag and
//! persists across episodes within a trial.

use crate::error::{AgentError, Result};
use crate::estimation::{BeliefState, Covariance};
use crate::library::{ModelConfig, SimpleModel};
use crate::params::{
    DRAG_NOMINAL, DRAG_PRIOR_MEAN, DRAG_PRIOR_VAR, INIT_POSITION_VAR, INIT_VELOCITY_VAR,
    MODEL_DT, OBS_NOISE, PARAM_DRIFT_VAR, PARAM_REVERSION, STATE_PROCESS_VAR,
};

const STATE_DIM: usize = 2;
const PARAM_DIM: usize = 1;
const BELIEF_DIM: usize = STATE_DIM + PARAM_DIM;

/// Constant-velocity model over `[position, velocity]` with a drag
/// parameter estimated in the belief's parameter block.
pub struct LinearDragModel {
    config: ModelConfig,
    /// Parameter posterior carried across episodes within a trial.
    param_mean: Vec<f64>,
    param_var: Vec<f64>,
}

impl Default for LinearDragModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearDragModel {
    /// Creates the model with the parameter posterior at its prior.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ModelConfig {
                state_dimension: STATE_DIM,
                parameter_dimension: PARAM_DIM,
            },
            param_mean: vec![DRAG_PRIOR_MEAN],
            param_var: vec![DRAG_PRIOR_VAR],
        }
    }

    fn check_observation(observation: &[f64]) -> Result<()> {
        if observation.len() == 1 {
            Ok(())
        } else {
            Err(AgentError::ShapeMismatch {
                context: "linear drag observation",
                expected: 1,
                got: observation.len(),
            })
        }
    }
}

impl SimpleModel for LinearDragModel {
    fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn predict(&mut self, action: &[f64], belief: &BeliefState) -> Result<BeliefState> {
        if action.len() != 1 {
            return Err(AgentError::ShapeMismatch {
                context: "linear drag action",
                expected: 1,
                got: action.len(),
            });
        }
        if belief.dim() != BELIEF_DIM {
            return Err(AgentError::ShapeMismatch {
                context: "linear drag belief",
                expected: BELIEF_DIM,
                got: belief.dim(),
            });
        }

        let dt = MODEL_DT;
        let (x, v, drag) = (belief.mean[0], belief.mean[1], belief.mean[2]);
        let a = action[0];

        let mean = vec![
            x + dt * v,
            v + dt * (a - drag * v),
            drag + PARAM_REVERSION * (DRAG_NOMINAL - drag),
        ];

        // Transition linearized around the current mean.
        #[rustfmt::skip]
        let jacobian = [
            1.0, dt,                0.0,
            0.0, 1.0 - dt * drag,   -dt * v,
            0.0, 0.0,               1.0 - PARAM_REVERSION,
        ];
        let mut covariance = belief.covariance.sandwich(&jacobian);
        covariance.add_diagonal(&[STATE_PROCESS_VAR, STATE_PROCESS_VAR, PARAM_DRIFT_VAR]);

        let predicted = BeliefState::new(mean, covariance)?;

        // The parameter posterior outlives the episode.
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
        let mean = vec![observation[0], 0.0, self.param_mean[0]];
        let covariance = Covariance::from_diagonal(&[
            INIT_POSITION_VAR,
            INIT_VELOCITY_VAR,
            self.param_var[0],
        ]);
        BeliefState::new(mean, covariance)
    }

    fn reset_trial(&mut self) {
        self.param_mean = vec![DRAG_PRIOR_MEAN];
        self.param_var = vec![DRAG_PRIOR_VAR];
    }
}
