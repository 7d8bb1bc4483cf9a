//! Lifecycle tests: build, episode reset, stepping, and the error
//! paths that guard them.

use simbelief::agent::{Agent, AgentSpec};
use simbelief::error::AgentError;
use simbelief::estimation::{
    ACTION_HISTORY, GT_STATE_HISTORY, REGISTERED_KEYS, STATE_MU_HISTORY,
};
use simbelief::library::{LinearDragModel, ModelLibrary, RandomWalkModel};

fn reference_library() -> ModelLibrary {
    let mut library = ModelLibrary::new();
    library.insert("linear_drag", Box::new(LinearDragModel::new()));
    library.insert("random_walk", Box::new(RandomWalkModel::new()));
    library
}

fn reference_agent() -> Agent {
    Agent::new(AgentSpec::new("point_mass", "linear_drag", reference_library()))
}

#[test]
fn test_reset_episode_before_build_fails_and_leaves_no_state() {
    let mut agent = reference_agent();

    let err = agent.reset_episode().unwrap_err();
    assert!(matches!(err, AgentError::NotBuilt));

    // No partial state: histories stay empty, no belief exists.
    assert!(agent.episode_data().is_empty());
    assert!(agent.belief().is_none());
}

#[test]
fn test_build_is_once_only() {
    let mut agent = reference_agent();
    agent.build().unwrap();

    let err = agent.build().unwrap_err();
    assert!(matches!(err, AgentError::AlreadyBuilt));
}

#[test]
fn test_build_unknown_environment_fails() {
    let mut agent = Agent::new(AgentSpec::new(
        "mujoco_cartpole",
        "linear_drag",
        reference_library(),
    ));
    assert!(matches!(
        agent.build(),
        Err(AgentError::UnknownEnvironment(_))
    ));
}

#[test]
fn test_reset_episode_unknown_model_fails() {
    let mut agent = Agent::new(AgentSpec::new(
        "point_mass",
        "cartpole",
        reference_library(),
    ));
    agent.build().unwrap();
    assert!(matches!(
        agent.reset_episode(),
        Err(AgentError::UnknownModel(_))
    ));
}

#[test]
fn test_step_without_episode_fails() {
    let mut agent = reference_agent();
    agent.build().unwrap();

    let err = agent.step().unwrap_err();
    assert!(matches!(err, AgentError::NoEpisode));
}

#[test]
fn test_reset_episode_primes_ground_truth_only() {
    let mut agent = reference_agent();
    agent.build().unwrap();
    agent.reset_episode().unwrap();

    // One priming ground-truth entry from the discard step; every
    // per-step history is still empty.
    let data = agent.episode_data();
    assert_eq!(data.len(GT_STATE_HISTORY).unwrap(), 1);
    for key in REGISTERED_KEYS {
        if key != GT_STATE_HISTORY {
            assert_eq!(data.len(key).unwrap(), 0, "history {key} not empty");
        }
    }

    // Belief dimension matches the active model's joint convention:
    // state_dimension 2 + parameter_dimension 1.
    let belief = agent.belief().unwrap();
    assert_eq!(belief.dim(), 3);
    assert!(belief.covariance.is_symmetric(1e-12));
}

#[test]
fn test_single_external_action_step() {
    let mut agent = reference_agent();
    agent.build().unwrap();
    agent.reset_episode().unwrap();
    let dim_before = agent.belief().unwrap().dim();

    let report = agent.step_with(&[0.3]).unwrap();
    assert!(!report.failed);

    let data = agent.episode_data();
    assert_eq!(data.len(GT_STATE_HISTORY).unwrap(), 2);

    let actions = data.get(ACTION_HISTORY).unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0], vec![0.3]);

    assert_eq!(agent.belief().unwrap().dim(), dim_before);
}

#[test]
fn test_step_rejects_wrong_action_shape() {
    let mut agent = reference_agent();
    agent.build().unwrap();
    agent.reset_episode().unwrap();

    let before = agent.episode_data().len(STATE_MU_HISTORY).unwrap();
    assert!(matches!(
        agent.step_with(&[0.1, 0.2]),
        Err(AgentError::ShapeMismatch { .. })
    ));
    // Nothing was appended for the rejected step.
    assert_eq!(agent.episode_data().len(STATE_MU_HISTORY).unwrap(), before);
}

#[test]
fn test_step_after_episode_done_fails() {
    let mut agent = reference_agent();
    agent.build().unwrap();

    let report = agent.do_episode().unwrap();
    assert!(report.done);

    let err = agent.step().unwrap_err();
    assert!(matches!(err, AgentError::NoEpisode));
}

#[test]
fn test_reset_trial_leaves_episode_data_alone() {
    let mut agent = reference_agent();
    agent.build().unwrap();
    agent.reset_episode().unwrap();
    agent.step_with(&[0.5]).unwrap();

    let steps_before = agent.episode_data().len(ACTION_HISTORY).unwrap();
    agent.reset_trial();
    assert_eq!(
        agent.episode_data().len(ACTION_HISTORY).unwrap(),
        steps_before
    );
}
