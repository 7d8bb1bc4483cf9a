//! Rollout hyperparameters and fixed seeds.

/// Seed applied to the environment at build time.
pub const ENV_SEED: u64 = 0;
/// Seed applied to the action sampler at build time.
pub const ACTION_SEED: u64 = 0;

/// Lower bound of the per-dimension action range.
pub const ACTION_LOW: f64 = -1.0;
/// Upper bound of the per-dimension action range.
pub const ACTION_HIGH: f64 = 1.0;

/// Registry name of the reference environment.
pub const DEFAULT_ENVIRONMENT: &str = "point_mass";
/// Registry name of the reference simple model.
pub const DEFAULT_MODEL: &str = "linear_drag";

// Point-mass environment.
pub const ENV_DT: f64 = 0.05;
pub const ENV_DRAG: f64 = 0.4;
pub const TRACK_HALF_LENGTH: f64 = 2.5;
pub const MAX_EPISODE_STEPS: u64 = 200;
pub const PROCESS_NOISE: f64 = 0.005;
pub const OBS_NOISE: f64 = 0.02;

// Linear drag model.
pub const MODEL_DT: f64 = 0.05;
pub const DRAG_PRIOR_MEAN: f64 = 0.5;
pub const DRAG_PRIOR_VAR: f64 = 0.25;
/// Nominal plant drag the parameter estimate relaxes toward.
pub const DRAG_NOMINAL: f64 = 0.4;
/// Per-step reversion rate of the parameter estimate.
pub const PARAM_REVERSION: f64 = 0.05;
/// Random-walk drift variance applied to the parameter block per step.
pub const PARAM_DRIFT_VAR: f64 = 1e-4;
pub const INIT_POSITION_VAR: f64 = 4e-4;
pub const INIT_VELOCITY_VAR: f64 = 0.5;
pub const STATE_PROCESS_VAR: f64 = 1e-3;

// Random-walk model.
pub const GAIN_PRIOR_MEAN: f64 = 1.0;
pub const GAIN_PRIOR_VAR: f64 = 0.5;
pub const INIT_WALK_VAR: f64 = 4e-4;
