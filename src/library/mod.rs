//! Library of interchangeable simple dynamics/observation models.
//!
//! Each model is a named entry conforming to the [`SimpleModel`]
//! capability set: a transition over the joint belief, an observation
//! summary, and per-episode/per-trial resets. The lifecycle never
//! inspects a model's internals; it depends only on the config's
//! dimensions and on the four operations agreeing with the belief
//! convention.

mod linear;
mod random_walk;

use std::collections::BTreeMap;

use crate::error::{AgentError, Result};
use crate::estimation::BeliefState;

pub use linear::LinearDragModel;
pub use random_walk::RandomWalkModel;

/// Dimensions a model exposes to the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelConfig {
    /// Length of the latent state block of the belief.
    pub state_dimension: usize,
    /// Length of the parameter block of the belief.
    pub parameter_dimension: usize,
}

impl ModelConfig {
    /// Joint belief dimension `D`.
    #[must_use]
    pub const fn belief_dimension(&self) -> usize {
        self.state_dimension + self.parameter_dimension
    }
}

/// Capability set every library entry must provide.
///
/// Model-level learned state (the parameter posterior) persists across
/// episodes within a trial; only `reset_trial` clears it back to the
/// prior.
pub trait SimpleModel {
    /// Dimensions of this model's belief convention.
    fn config(&self) -> &ModelConfig;

    /// One-step transition over the joint state+parameter belief.
    ///
    /// Output dimensions must match the input; a belief or action of
    /// the wrong length fails with [`AgentError::ShapeMismatch`].
    fn predict(&mut self, action: &[f64], belief: &BeliefState) -> Result<BeliefState>;

    /// Latent summary `(z_mean, z_std)` of a raw observation.
    ///
    /// Diagnostic output only: the lifecycle logs it but never fuses
    /// it back into the propagated belief within a step.
    fn observe(&mut self, observation: &[f64]) -> Result<(Vec<f64>, Vec<f64>)>;

    /// Reseeds per-episode state from the priming observation and
    /// returns the initial belief: state block from the observation,
    /// parameter block from the persistent parameter estimate.
    fn reset_episode(&mut self, observation: &[f64]) -> Result<BeliefState>;

    /// Clears model-level learned state back to the prior.
    fn reset_trial(&mut self);
}

/// Named registry of simple models.
#[derive(Default)]
pub struct ModelLibrary {
    models: BTreeMap<String, Box<dyn SimpleModel>>,
}

impl ModelLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self {
            models: BTreeMap::new(),
        }
    }

    /// Registers a model under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, model: Box<dyn SimpleModel>) {
        self.models.insert(name.into(), model);
    }

    /// Looks a model up by name.
    pub fn get(&self, name: &str) -> Result<&dyn SimpleModel> {
        self.models
            .get(name)
            .map(|model| model.as_ref())
            .ok_or_else(|| AgentError::UnknownModel(name.to_string()))
    }

    /// Mutable lookup by name.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Box<dyn SimpleModel>> {
        self.models
            .get_mut(name)
            .ok_or_else(|| AgentError::UnknownModel(name.to_string()))
    }

    /// Registered model names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Fans the per-episode reset out to every model and returns the
    /// reseeded belief of the active one.
    pub fn reset_episode(&mut self, observation: &[f64], active: &str) -> Result<BeliefState> {
        if !self.models.contains_key(active) {
            return Err(AgentError::UnknownModel(active.to_string()));
        }
        let mut seeded = None;
        for (name, model) in &mut self.models {
            let belief = model.reset_episode(observation)?;
            if name == active {
                seeded = Some(belief);
            }
        }
        seeded.ok_or_else(|| AgentError::UnknownModel(active.to_string()))
    }

    /// Fans the per-trial reset out to every model. Idempotent:
    /// calling twice in a row is equivalent to calling once.
    pub fn reset_trial(&mut self) {
        for model in self.models.values_mut() {
            model.reset_trial();
        }
    }
}
