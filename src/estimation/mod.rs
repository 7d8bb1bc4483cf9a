//! Recursive state estimation over the joint state+parameter vector.
//!
//! The belief `q(x, θ) = N(μ, Σ)` is propagated once per step by the
//! active simple model's transition and logged alongside the episode's
//! ground truth in the append-only data store.

mod belief;
mod history;

pub use belief::{BeliefState, Covariance};
pub use history::{
    EpisodeData, ACTION_HISTORY, GT_STATE_HISTORY, OBS_HISTORY, PARAM_MU_HISTORY,
    PARAM_VAR_HISTORY, REGISTERED_KEYS, STATE_COV_HISTORY, STATE_MU_HISTORY, Z_MU_HISTORY,
    Z_STD_HISTORY,
};
