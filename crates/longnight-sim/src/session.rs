//! Session runner: drives the hourly engine until a terminal state.
//!
//! The runner owns the loop around [`run_hour`]: obtain one action from
//! the [`ActionSource`], run the hour, surface the hour's narration to
//! the [`Presenter`], and stop when the session reaches a terminal
//! state. The player state is exclusively owned here and mutated only
//! within the span of one hour's resolution.
//!
//! [`run_hour`]: crate::tick::run_hour

use tracing::info;

use longnight_types::{Outcome, PlayerState};

use crate::config::GameConfig;
use crate::decision::{ActionSource, ActionSourceError};
use crate::roll::Roller;
use crate::tick::{self, HourSummary, SessionStatus};

/// Receiver for per-hour snapshots and the final result.
///
/// Implementations render the state however they like; nothing flows
/// back into the core. The state reference is read-only and already
/// clamped when these methods are called.
pub trait Presenter {
    /// Called after each hour with the updated state and the hour's
    /// narration buffer.
    fn on_hour(&mut self, state: &PlayerState, summary: &HourSummary);

    /// Called once when the session reaches a terminal state.
    fn on_session_over(&mut self, result: &SessionResult);
}

/// A presenter that discards everything, for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpPresenter;

impl Presenter for NoOpPresenter {
    fn on_hour(&mut self, _state: &PlayerState, _summary: &HourSummary) {}
    fn on_session_over(&mut self, _result: &SessionResult) {}
}

/// How a session ended, with the final readings reported at the
/// process boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    /// Whether the player survived or died.
    pub outcome: Outcome,
    /// Hours completed when the session ended.
    pub hours_survived: u32,
    /// Final health reading.
    pub final_health: i32,
    /// Final shelter level.
    pub shelter_level: u32,
}

/// Run a session to completion.
///
/// # Errors
///
/// Returns [`ActionSourceError`] if the action source fails (closed
/// input, exhausted script). Gameplay never errors; win and loss are
/// normal return values.
pub fn run_session(
    state: &mut PlayerState,
    cfg: &GameConfig,
    source: &mut dyn ActionSource,
    roller: &mut impl Roller,
    presenter: &mut dyn Presenter,
) -> Result<SessionResult, ActionSourceError> {
    info!(goal_hours = cfg.world.goal_hours, "session starting");

    // A state already at a terminal condition plays no hours.
    if let SessionStatus::Over(outcome) = tick::session_status(state, cfg.world.goal_hours) {
        return Ok(finish(state, outcome, presenter));
    }

    loop {
        let action = source.next_action(state)?;
        let summary = tick::run_hour(state, action, cfg, roller);
        presenter.on_hour(state, &summary);

        if let SessionStatus::Over(outcome) = summary.status {
            return Ok(finish(state, outcome, presenter));
        }
    }
}

fn finish(state: &PlayerState, outcome: Outcome, presenter: &mut dyn Presenter) -> SessionResult {
    let result = SessionResult {
        outcome,
        hours_survived: state.hours_survived,
        final_health: state.health,
        shelter_level: state.shelter_level,
    };
    info!(
        outcome = %result.outcome,
        hours = result.hours_survived,
        health = result.final_health,
        shelter = result.shelter_level,
        "session over"
    );
    presenter.on_session_over(&result);
    result
}

#[cfg(test)]
mod tests {
    use longnight_types::Action;

    use super::*;
    use crate::config::StartConfig;
    use crate::decision::ScriptedActionSource;
    use crate::roll::ScriptedRoller;

    #[test]
    fn hesitating_all_night_survives_with_exhaustion_scars() {
        // With an empty scripted roller every event roll is 1 (a quiet
        // hour), so the session is fully deterministic: 24 hesitations
        // cost 7 energy per hour, energy hits zero during hour 15, and
        // the ten exhaustion penalties cost 30 health in total.
        let cfg = GameConfig::default();
        let mut state = StartConfig::default().initial_state();
        let mut source = ScriptedActionSource::cycling([Action::Invalid]);
        let mut roller = ScriptedRoller::default();
        let mut presenter = NoOpPresenter;

        let result = run_session(&mut state, &cfg, &mut source, &mut roller, &mut presenter)
            .unwrap_or(SessionResult {
                outcome: Outcome::Died,
                hours_survived: 0,
                final_health: 0,
                shelter_level: 0,
            });

        assert_eq!(result.outcome, Outcome::Survived);
        assert_eq!(result.hours_survived, 24);
        assert_eq!(result.final_health, 70);
        assert_eq!(result.shelter_level, 1);
        assert_eq!(state.energy, 0);
        assert_eq!(state.food, 50);
    }

    #[test]
    fn depleted_state_dies_in_the_first_hour() {
        let cfg = GameConfig::default();
        let mut state = StartConfig { health: 4, food: 0, energy: 0, ..StartConfig::default() }
            .initial_state();
        let mut source = ScriptedActionSource::new([Action::Invalid]);
        let mut roller = ScriptedRoller::new([50]);
        let mut presenter = NoOpPresenter;

        let result = run_session(&mut state, &cfg, &mut source, &mut roller, &mut presenter);

        assert!(matches!(
            result,
            Ok(SessionResult { outcome: Outcome::Died, hours_survived: 1, final_health: 0, .. })
        ));
    }

    #[test]
    fn exhausted_script_surfaces_as_an_error() {
        let cfg = GameConfig::default();
        let mut state = StartConfig::default().initial_state();
        let mut source = ScriptedActionSource::new([Action::Rest]);
        let mut roller = ScriptedRoller::default();
        let mut presenter = NoOpPresenter;

        let result = run_session(&mut state, &cfg, &mut source, &mut roller, &mut presenter);

        assert!(matches!(result, Err(ActionSourceError::ScriptExhausted { .. })));
    }

    #[test]
    fn already_terminal_state_plays_no_hours() {
        let cfg = GameConfig::default();
        let mut state = StartConfig::default().initial_state();
        state.hours_survived = 24;
        // No actions scripted: the source would error if consulted.
        let mut source = ScriptedActionSource::new([]);
        let mut roller = ScriptedRoller::default();
        let mut presenter = NoOpPresenter;

        let result = run_session(&mut state, &cfg, &mut source, &mut roller, &mut presenter);

        assert!(matches!(result, Ok(SessionResult { outcome: Outcome::Survived, .. })));
        assert_eq!(state.hours_survived, 24);
    }
}
