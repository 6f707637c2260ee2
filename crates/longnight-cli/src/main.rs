//! Terminal front end for the Longnight survival simulation.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `longnight.yaml`
//! 3. Seed the dice roller (config seed or OS entropy)
//! 4. Build the initial player state
//! 5. Run the session against stdin/stdout
//! 6. Log the result

mod error;
mod input;
mod render;

use std::path::Path;

use longnight_sim::{GameConfig, RngRoller, run_session};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::input::StdinActionSource;
use crate::render::ConsolePresenter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration loading fails or the input
/// channel closes mid-session.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        seed = config.world.seed,
        goal_hours = config.world.goal_hours,
        "configuration loaded"
    );

    // 3. Seed the dice roller.
    let mut roller = match config.world.seed {
        Some(seed) => RngRoller::seeded(seed),
        None => RngRoller::from_entropy(),
    };

    // 4. Build the initial player state.
    let mut state = config.player.initial_state();

    // 5. Run the session.
    render::intro(config.world.goal_hours);
    render::status_panel(&state, config.world.goal_hours);
    let mut source = StdinActionSource::new();
    let mut presenter = ConsolePresenter::new(config.world.goal_hours);
    let result = run_session(&mut state, &config, &mut source, &mut roller, &mut presenter)
        .map_err(CliError::from)?;

    // 6. Log the result.
    info!(
        outcome = %result.outcome,
        hours = result.hours_survived,
        health = result.final_health,
        shelter = result.shelter_level,
        "longnight finished"
    );
    Ok(())
}

/// Load `longnight.yaml` if present, otherwise use defaults.
fn load_config() -> Result<GameConfig, CliError> {
    let config_path = Path::new("longnight.yaml");
    if config_path.exists() {
        let config = GameConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("config file not found, using defaults");
        Ok(GameConfig::default())
    }
}
