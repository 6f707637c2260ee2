//! The hourly step engine: one full cycle of the survival clock.
//!
//! Each hour runs through three phases over the shared state record:
//!
//! 1. **Action** -- apply the chosen player action ([`crate::actions`]).
//! 2. **Event** -- roll the environmental event ([`crate::events`]).
//! 3. **Resolution** -- passive decay, threshold penalties, clamping
//!    ([`crate::upkeep`]), then advance the hour counter.
//!
//! Terminal conditions are evaluated only at the hour boundary, never
//! mid-hour: zero health is a loss, reaching the goal hour is a win.
//! Zero health is checked first, so dying during the final hour is
//! still a loss.

use tracing::debug;

use longnight_types::{Action, Narration, Outcome, PlayerState};

use crate::config::GameConfig;
use crate::roll::Roller;
use crate::{actions, events, upkeep};

/// Whether the session continues after an hour boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// The session continues into the next hour.
    Ongoing,
    /// The session reached a terminal state.
    Over(Outcome),
}

/// Summary of one completed hour, surfaced to the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourSummary {
    /// The hour that just completed (equals `hours_survived` after it).
    pub hour: u32,
    /// Narration accumulated during the hour, in chronological order.
    pub narration: Vec<Narration>,
    /// Session status at the hour boundary.
    pub status: SessionStatus,
}

/// Run one full hour over the state record.
///
/// The caller obtains `action` from its [`ActionSource`] beforehand;
/// this function is pure simulation and performs no I/O.
///
/// [`ActionSource`]: crate::decision::ActionSource
pub fn run_hour(
    state: &mut PlayerState,
    action: Action,
    cfg: &GameConfig,
    roller: &mut impl Roller,
) -> HourSummary {
    let mut narration = Vec::new();

    actions::resolve_action(state, action, &cfg.tuning, roller, &mut narration);
    events::resolve_event(state, &cfg.tuning, roller, &mut narration);
    upkeep::apply_hourly_upkeep(state, &cfg.tuning, &mut narration);
    state.hours_survived += 1;

    let status = session_status(state, cfg.world.goal_hours);
    debug!(
        hour = state.hours_survived,
        health = state.health,
        food = state.food,
        energy = state.energy,
        shelter = state.shelter_level,
        ?status,
        "hour resolved"
    );

    HourSummary { hour: state.hours_survived, narration, status }
}

/// Evaluate the terminal conditions at an hour boundary.
pub const fn session_status(state: &PlayerState, goal_hours: u32) -> SessionStatus {
    if state.health == 0 {
        return SessionStatus::Over(Outcome::Died);
    }
    if state.hours_survived >= goal_hours {
        return SessionStatus::Over(Outcome::Survived);
    }
    SessionStatus::Ongoing
}
