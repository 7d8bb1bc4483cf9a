//! Error taxonomy for the rollout core.
//!
//! Every variant is unrecoverable at the point of detection: a
//! mis-seeded environment or a belief with mismatched dimensions
//! invalidates the remainder of the episode, so errors surface to the
//! caller immediately and nothing retries internally.

use thiserror::Error;

/// Top-level error type for the agent core.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Lifecycle operation invoked before `build()`.
    #[error("environment has not been built, call build() first")]
    NotBuilt,

    /// `build()` invoked a second time on the same agent instance.
    #[error("agent has already been built")]
    AlreadyBuilt,

    /// `step()` invoked with no episode in progress.
    #[error("no episode in progress, call reset_episode() first")]
    NoEpisode,

    /// Model name not present in the model library.
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// Environment name not present in the environment registry.
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),

    /// Dimension disagreement between a belief and a model or action.
    #[error("shape mismatch in {context}: expected {expected}, got {got}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    /// History name not registered in the episode data store.
    #[error("unknown history key: {0}")]
    UnknownHistory(String),
}

/// Result type alias for the agent core.
pub type Result<T> = std::result::Result<T, AgentError>;
