//! Hourly upkeep: passive decay, threshold penalties, and clamping.
//!
//! This is the Resolution phase of the hourly cycle, applied after the
//! action and event resolvers have run.
//!
//! # Order of operations
//!
//! 1. Passive energy drain (fixed per-hour tax, independent of actions)
//! 2. Starvation penalty if food <= 0 (food pinned back to 0)
//! 3. Exhaustion penalty if energy <= 0 (energy pinned back to 0)
//! 4. Clamp health, food, and energy to the vital bounds
//!
//! The two threshold checks are independent and may both fire in the
//! same hour.

use tracing::debug;

use longnight_types::{Narration, PlayerState, VITAL_MAX, VITAL_MIN};

use crate::config::TuningConfig;

/// Apply one hour of passive decay, threshold penalties, and clamping.
///
/// After this returns, health, food, and energy are all within
/// `[VITAL_MIN, VITAL_MAX]`.
pub fn apply_hourly_upkeep(state: &mut PlayerState, cfg: &TuningConfig, log: &mut Vec<Narration>) {
    state.energy -= cfg.passive_energy_drain;

    if state.food <= 0 {
        state.health -= cfg.starvation_damage;
        state.food = 0;
        debug!(health = state.health, "starvation penalty");
        log.push(Narration::Starving { damage: cfg.starvation_damage });
    }

    if state.energy <= 0 {
        state.health -= cfg.exhaustion_damage;
        state.energy = 0;
        debug!(health = state.health, "exhaustion penalty");
        log.push(Narration::Exhausted { damage: cfg.exhaustion_damage });
    }

    state.health = state.health.clamp(VITAL_MIN, VITAL_MAX);
    state.food = state.food.clamp(VITAL_MIN, VITAL_MAX);
    state.energy = state.energy.clamp(VITAL_MIN, VITAL_MAX);
}
