//! Per-episode append-only data store.
//!
//! Pure accumulation: append and clear, nothing else. The store is
//! owned by the agent lifecycle, cleared exactly at episode reset and
//! never at trial reset.

use std::collections::BTreeMap;

use crate::error::{AgentError, Result};

/// Actions applied to the environment, one row per step.
pub const ACTION_HISTORY: &str = "action_history";
/// Ground-truth simulator state; primed with one entry at episode
/// reset, then one row per step.
pub const GT_STATE_HISTORY: &str = "gt_state_history";
/// Raw observations returned by the environment.
pub const OBS_HISTORY: &str = "obs_history";
/// Observation-summary means from the active model.
pub const Z_MU_HISTORY: &str = "z_mu_history";
/// Observation-summary standard deviations from the active model.
pub const Z_STD_HISTORY: &str = "z_std_history";
/// State block of the predicted belief mean.
pub const STATE_MU_HISTORY: &str = "state_mu_history";
/// Dense state block of the predicted covariance, flattened row-major.
pub const STATE_COV_HISTORY: &str = "state_cov_history";
/// Parameter block of the predicted belief mean.
pub const PARAM_MU_HISTORY: &str = "param_mu_history";
/// Parameter-block variances, diagonal only.
pub const PARAM_VAR_HISTORY: &str = "param_var_history";

/// The fixed set of recognized history names.
pub const REGISTERED_KEYS: [&str; 9] = [
    ACTION_HISTORY,
    GT_STATE_HISTORY,
    OBS_HISTORY,
    Z_MU_HISTORY,
    Z_STD_HISTORY,
    STATE_MU_HISTORY,
    STATE_COV_HISTORY,
    PARAM_MU_HISTORY,
    PARAM_VAR_HISTORY,
];

/// Append-only log of everything recorded over one episode.
#[derive(Debug, Clone, Default)]
pub struct EpisodeData {
    histories: BTreeMap<&'static str, Vec<Vec<f64>>>,
}

impl EpisodeData {
    /// Creates the store with every registered history empty.
    #[must_use]
    pub fn new() -> Self {
        let mut histories = BTreeMap::new();
        for key in REGISTERED_KEYS {
            histories.insert(key, Vec::new());
        }
        Self { histories }
    }

    /// Appends one row to a history.
    ///
    /// Fails with [`AgentError::UnknownHistory`] if `key` is not one
    /// of the registered names.
    pub fn append(&mut self, key: &str, row: Vec<f64>) -> Result<()> {
        match self.histories.get_mut(key) {
            Some(history) => {
                history.push(row);
                Ok(())
            }
            None => Err(AgentError::UnknownHistory(key.to_string())),
        }
    }

    /// Resets every registered history to an empty sequence.
    pub fn clear(&mut self) {
        for history in self.histories.values_mut() {
            history.clear();
        }
    }

    /// Recorded rows of a history, oldest first.
    pub fn get(&self, key: &str) -> Result<&[Vec<f64>]> {
        self.histories
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| AgentError::UnknownHistory(key.to_string()))
    }

    /// Number of rows recorded under `key`.
    pub fn len(&self, key: &str) -> Result<usize> {
        self.get(key).map(<[Vec<f64>]>::len)
    }

    /// Whether every registered history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.histories.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let data = EpisodeData::new();
        assert!(data.is_empty());
        for key in REGISTERED_KEYS {
            assert_eq!(data.len(key).unwrap(), 0);
        }
    }

    #[test]
    fn test_append_and_get() {
        let mut data = EpisodeData::new();
        data.append(ACTION_HISTORY, vec![0.3]).unwrap();
        data.append(ACTION_HISTORY, vec![-0.5]).unwrap();

        let rows = data.get(ACTION_HISTORY).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![0.3]);
        assert_eq!(rows[1], vec![-0.5]);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut data = EpisodeData::new();
        let err = data.append("reward_history", vec![1.0]).unwrap_err();
        assert!(matches!(err, AgentError::UnknownHistory(_)));
        assert!(data.get("reward_history").is_err());
    }

    #[test]
    fn test_clear_resets_every_history() {
        let mut data = EpisodeData::new();
        data.append(ACTION_HISTORY, vec![0.1]).unwrap();
        data.append(GT_STATE_HISTORY, vec![0.0, 0.0]).unwrap();

        data.clear();
        assert!(data.is_empty());
    }
}
