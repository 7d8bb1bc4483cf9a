//! Agent lifecycle: trial → episode → step.
//!
//! The agent owns the belief state and the episode data store, and
//! drives the environment and the model library through the
//! predict → act → observe → log cycle. Lifecycle states:
//!
//! ```text
//! Unbuilt → Built → EpisodeReset → Stepping → EpisodeDone
//! ```
//!
//! Trial resets may occur between `EpisodeDone → EpisodeReset`; they
//! never revisit `Unbuilt`/`Built`.

pub mod policy;

use tracing::debug;

use crate::environment::{self, Environment, StepInfo};
use crate::error::{AgentError, Result};
use crate::estimation::{
    BeliefState, EpisodeData, ACTION_HISTORY, GT_STATE_HISTORY, OBS_HISTORY, PARAM_MU_HISTORY,
    PARAM_VAR_HISTORY, STATE_COV_HISTORY, STATE_MU_HISTORY, Z_MU_HISTORY, Z_STD_HISTORY,
};
use crate::library::ModelLibrary;
use crate::params::{ACTION_SEED, ENV_SEED};

use policy::{ActionSource, UniformActionSource};

/// Lifecycle position of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Unbuilt,
    Built,
    EpisodeReset,
    Stepping,
    EpisodeDone,
}

/// Everything needed to construct a concrete agent.
///
/// Construction goes through [`Agent::new`]; there is no abstract
/// base to subclass. The action source is injectable and defaults to
/// uniform sampling.
pub struct AgentSpec {
    pub env_name: String,
    pub model_name: String,
    pub library: ModelLibrary,
    pub policy: Box<dyn ActionSource>,
    pub env_seed: u64,
    pub action_seed: u64,
}

impl AgentSpec {
    /// Spec with the default uniform action source and fixed seeds.
    #[must_use]
    pub fn new(
        env_name: impl Into<String>,
        model_name: impl Into<String>,
        library: ModelLibrary,
    ) -> Self {
        Self {
            env_name: env_name.into(),
            model_name: model_name.into(),
            library,
            policy: Box::new(UniformActionSource::new()),
            env_seed: ENV_SEED,
            action_seed: ACTION_SEED,
        }
    }

    /// Replaces the action source.
    #[must_use]
    pub fn with_policy(mut self, policy: Box<dyn ActionSource>) -> Self {
        self.policy = policy;
        self
    }
}

/// Outcome of one step (or of a whole episode, from `do_episode`).
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Whether the environment signalled termination.
    pub done: bool,
    /// Reserved outcome flag for divergence detection (for example a
    /// belief covariance blow-up); always `false` in the base
    /// behavior.
    pub failed: bool,
    /// Reward accumulated since the episode reset.
    pub cumulative_reward: f64,
    /// Info payload of the step just executed.
    pub info: StepInfo,
}

/// The control/estimation agent.
pub struct Agent {
    env_name: String,
    active_model: String,
    env: Option<Box<dyn Environment>>,
    library: ModelLibrary,
    policy: Box<dyn ActionSource>,
    belief: Option<BeliefState>,
    data: EpisodeData,
    action_dimension: usize,
    cumulative_reward: f64,
    env_seed: u64,
    action_seed: u64,
    phase: Phase,
}

impl Agent {
    /// Factory for a concrete agent. The result is unbuilt: call
    /// [`Agent::build`] before the first episode.
    #[must_use]
    pub fn new(spec: AgentSpec) -> Self {
        Self {
            env_name: spec.env_name,
            active_model: spec.model_name,
            env: None,
            library: spec.library,
            policy: spec.policy,
            belief: None,
            data: EpisodeData::new(),
            action_dimension: 0,
            cumulative_reward: 0.0,
            env_seed: spec.env_seed,
            action_seed: spec.action_seed,
            phase: Phase::Unbuilt,
        }
    }

    /// Constructs the environment from the spec's name, seeds it and
    /// the action source deterministically, and fixes the action
    /// dimensionality for the trial.
    ///
    /// Exactly one build per agent instance.
    pub fn build(&mut self) -> Result<()> {
        if self.phase != Phase::Unbuilt {
            return Err(AgentError::AlreadyBuilt);
        }
        let mut env = environment::make(&self.env_name)?;
        env.seed(self.env_seed);
        self.policy.seed(self.action_seed);
        self.action_dimension = env.action_dimension();
        self.env = Some(env);
        self.phase = Phase::Built;
        debug!(
            environment = %self.env_name,
            action_dimension = self.action_dimension,
            "environment built"
        );
        Ok(())
    }

    /// Starts a fresh episode within the current trial.
    ///
    /// Clears every history, performs the discard step, reseeds the
    /// belief through the model library's per-episode reset, and
    /// primes the ground-truth history with the discard step's state.
    pub fn reset_episode(&mut self) -> Result<()> {
        if self.phase == Phase::Unbuilt {
            return Err(AgentError::NotBuilt);
        }
        self.data.clear();
        self.cumulative_reward = 0.0;
        self.belief = None;

        let zero = vec![0.0; self.action_dimension];
        let outcome = {
            let Some(env) = self.env.as_mut() else {
                return Err(AgentError::NotBuilt);
            };
            // The simulator's first post-reset frame is discontinuous
            // with subsequent frames; step once with a zero action and
            // discard that step's reward/done so it never enters the
            // pipeline as a genuine transition.
            let _ = env.reset();
            env.step(&zero)?
        };

        let belief = self
            .library
            .reset_episode(&outcome.observation, &self.active_model)?;
        debug!(model = %self.active_model, dim = belief.dim(), "episode reset");

        self.data.append(GT_STATE_HISTORY, outcome.info.state)?;
        self.belief = Some(belief);
        self.phase = Phase::EpisodeReset;
        Ok(())
    }

    /// Resets model-level learned state for a fresh trial.
    ///
    /// Delegates to the model library; touches neither the episode
    /// data nor the environment's seed.
    pub fn reset_trial(&mut self) {
        self.library.reset_trial();
    }

    /// Runs one full episode: reset, then step until termination.
    pub fn do_episode(&mut self) -> Result<StepReport> {
        self.reset_episode()?;
        loop {
            let report = self.step()?;
            if report.done {
                return Ok(report);
            }
        }
    }

    /// One predict → act → observe → log iteration with an action
    /// drawn from the injected action source.
    pub fn step(&mut self) -> Result<StepReport> {
        let action = self.policy.sample(self.action_dimension);
        self.step_with(&action)
    }

    /// One iteration with an externally supplied action.
    pub fn step_with(&mut self, action: &[f64]) -> Result<StepReport> {
        match self.phase {
            Phase::Unbuilt => return Err(AgentError::NotBuilt),
            Phase::Built | Phase::EpisodeDone => return Err(AgentError::NoEpisode),
            Phase::EpisodeReset | Phase::Stepping => {}
        }
        if action.len() != self.action_dimension {
            return Err(AgentError::ShapeMismatch {
                context: "agent action",
                expected: self.action_dimension,
                got: action.len(),
            });
        }
        let Some(belief) = self.belief.clone() else {
            return Err(AgentError::NoEpisode);
        };

        // Predict: one-step transition over the joint belief. The
        // state split is re-read from the active model's config on
        // every step.
        let (predicted, state_dimension) = {
            let model = self.library.get_mut(&self.active_model)?;
            let state_dimension = model.config().state_dimension;
            (model.predict(action, &belief)?, state_dimension)
        };

        // Act: apply the action to the environment.
        let outcome = {
            let Some(env) = self.env.as_mut() else {
                return Err(AgentError::NotBuilt);
            };
            env.step(action)?
        };
        self.cumulative_reward += outcome.reward;

        // Observe: latent summary of the raw observation. Logged
        // only; the propagated belief is the predict output.
        let (z_mu, z_std) = self
            .library
            .get_mut(&self.active_model)?
            .observe(&outcome.observation)?;

        // Log: all histories for this step, appended together. The
        // keys are the registered constants, so none of these appends
        // can fail individually.
        self.data.append(GT_STATE_HISTORY, outcome.info.state.clone())?;
        self.data.append(ACTION_HISTORY, action.to_vec())?;
        self.data.append(OBS_HISTORY, outcome.observation.clone())?;
        self.data.append(Z_MU_HISTORY, z_mu)?;
        self.data.append(Z_STD_HISTORY, z_std)?;
        self.data
            .append(STATE_MU_HISTORY, predicted.state_mean(state_dimension).to_vec())?;
        self.data
            .append(STATE_COV_HISTORY, predicted.state_cov(state_dimension))?;
        self.data
            .append(PARAM_MU_HISTORY, predicted.param_mean(state_dimension).to_vec())?;
        self.data
            .append(PARAM_VAR_HISTORY, predicted.param_var(state_dimension))?;

        self.belief = Some(predicted);
        self.phase = if outcome.done {
            Phase::EpisodeDone
        } else {
            Phase::Stepping
        };

        Ok(StepReport {
            done: outcome.done,
            failed: false,
            cumulative_reward: self.cumulative_reward,
            info: outcome.info,
        })
    }

    /// Per-episode data recorded so far.
    #[must_use]
    pub fn episode_data(&self) -> &EpisodeData {
        &self.data
    }

    /// Current belief, if an episode is in progress.
    #[must_use]
    pub fn belief(&self) -> Option<&BeliefState> {
        self.belief.as_ref()
    }

    /// Action dimensionality fixed at build time.
    #[must_use]
    pub fn action_dimension(&self) -> usize {
        self.action_dimension
    }

    /// Reward accumulated since the last episode reset.
    #[must_use]
    pub fn cumulative_reward(&self) -> f64 {
        self.cumulative_reward
    }

    /// Read access to the model library.
    #[must_use]
    pub fn library(&self) -> &ModelLibrary {
        &self.library
    }
}
