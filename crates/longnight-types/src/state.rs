//! The player state record mutated in place by the resolvers each hour.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::ItemKind;

/// Upper bound for health, food, and energy at every hour boundary.
pub const VITAL_MAX: i32 = 100;

/// Lower bound for health, food, and energy at every hour boundary.
pub const VITAL_MIN: i32 = 0;

/// All mutable survival attributes for the single player.
///
/// One instance exists per session, owned by the session runner and
/// mutated exclusively by the resolvers. The vitals are signed because
/// intermediate values within a single hour may transiently leave the
/// `[VITAL_MIN, VITAL_MAX]` range; the hourly upkeep step clamps them
/// back before any collaborator observes the state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current health. Zero at an hour boundary ends the session.
    pub health: i32,
    /// Current food reserve. Starvation damage applies when it hits zero.
    pub food: i32,
    /// Current energy. Exhaustion damage applies when it hits zero.
    pub energy: i32,
    /// Shelter upgrade track. Starts at 1 and never decreases; only the
    /// Fortify action raises it.
    pub shelter_level: u32,
    /// Carried items by kind. Counts are never negative and entries are
    /// removed when a count reaches zero.
    pub inventory: BTreeMap<ItemKind, u32>,
    /// Completed hours. Increases by exactly 1 per hour, starting at 0.
    pub hours_survived: u32,
}

impl PlayerState {
    /// Number of units of `kind` currently carried.
    pub fn item_count(&self, kind: ItemKind) -> u32 {
        self.inventory.get(&kind).copied().unwrap_or(0)
    }

    /// True if the inventory holds at least one unit of anything.
    pub fn has_any_items(&self) -> bool {
        self.inventory.values().any(|&count| count > 0)
    }

    /// Iterate over carried items in stable (menu) order.
    pub fn carried_items(&self) -> impl Iterator<Item = (ItemKind, u32)> + '_ {
        self.inventory.iter().filter(|&(_, &count)| count > 0).map(|(&kind, &count)| (kind, count))
    }
}
