//! Episode data store tests: registered keys, append, clear.

use simbelief::error::AgentError;
use simbelief::estimation::{
    EpisodeData, ACTION_HISTORY, GT_STATE_HISTORY, REGISTERED_KEYS,
};

#[test]
fn test_fresh_store_has_every_registered_history_empty() {
    let data = EpisodeData::new();
    assert!(data.is_empty());
    for key in REGISTERED_KEYS {
        assert_eq!(data.len(key).unwrap(), 0);
    }
}

#[test]
fn test_rows_are_appended_in_order() {
    let mut data = EpisodeData::new();
    data.append(GT_STATE_HISTORY, vec![0.0, 0.0]).unwrap();
    data.append(GT_STATE_HISTORY, vec![0.1, 0.2]).unwrap();

    let rows = data.get(GT_STATE_HISTORY).unwrap();
    assert_eq!(rows[0], vec![0.0, 0.0]);
    assert_eq!(rows[1], vec![0.1, 0.2]);
}

#[test]
fn test_unregistered_key_fails_with_key_error() {
    let mut data = EpisodeData::new();
    let err = data.append("img_history", vec![0.0]).unwrap_err();
    assert!(matches!(err, AgentError::UnknownHistory(name) if name == "img_history"));
}

#[test]
fn test_clear_empties_all_histories_at_once() {
    let mut data = EpisodeData::new();
    for key in REGISTERED_KEYS {
        data.append(key, vec![1.0]).unwrap();
    }
    assert!(!data.is_empty());

    data.clear();
    assert!(data.is_empty());
    // Still usable after a clear.
    data.append(ACTION_HISTORY, vec![0.5]).unwrap();
    assert_eq!(data.len(ACTION_HISTORY).unwrap(), 1);
}
