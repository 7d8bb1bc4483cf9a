//! Rollout runner: trials of episodes on a named environment/model
//! pair, with per-episode logging. Owns no persistence.

#![warn(clippy::all, clippy::pedantic)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use simbelief::agent::{Agent, AgentSpec};
use simbelief::estimation::ACTION_HISTORY;
use simbelief::library::{LinearDragModel, ModelLibrary, RandomWalkModel};
use simbelief::params::{DEFAULT_ENVIRONMENT, DEFAULT_MODEL};

#[derive(Parser)]
#[command(name = "simbelief")]
#[command(about = "Belief-space rollouts on a stepped simulation")]
struct Cli {
    /// Number of trials to run.
    #[arg(long, default_value_t = 1)]
    trials: usize,

    /// Episodes per trial.
    #[arg(long, default_value_t = 3)]
    episodes: usize,

    /// Environment registry name.
    #[arg(long, default_value = DEFAULT_ENVIRONMENT)]
    environment: String,

    /// Active model name.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Override the fixed environment seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set subscriber");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut library = ModelLibrary::new();
    library.insert("linear_drag", Box::new(LinearDragModel::new()));
    library.insert("random_walk", Box::new(RandomWalkModel::new()));

    let mut spec = AgentSpec::new(&cli.environment, &cli.model, library);
    if let Some(seed) = cli.seed {
        spec.env_seed = seed;
    }

    let mut agent = Agent::new(spec);
    agent.build().context("failed to build environment")?;

    for trial in 0..cli.trials {
        if trial > 0 {
            agent.reset_trial();
        }
        for episode in 0..cli.episodes {
            let report = agent
                .do_episode()
                .with_context(|| format!("episode {episode} of trial {trial} failed"))?;
            let steps = agent.episode_data().len(ACTION_HISTORY)?;
            info!(
                trial,
                episode,
                steps,
                reward = report.cumulative_reward,
                done = report.done,
                "episode finished"
            );
        }
    }

    Ok(())
}
