//! Action resolver: applying one chosen player action to the state.
//!
//! Each action appends exactly one narration entry (the item path may
//! narrate through the item resolver instead). Numeric effects are
//! applied without clamping -- intermediate values may transiently leave
//! the vital bounds within an hour; the upkeep step clamps once at the
//! end of the hour.

use tracing::debug;

use longnight_types::{Action, ItemKind, Narration, PlayerState};

use crate::config::TuningConfig;
use crate::items;
use crate::roll::Roller;

/// Apply the effect of one chosen action.
///
/// Insufficient resources (Rest without food, Fortify without energy)
/// and invalid selections are recovered locally with a narration and no
/// other state change; nothing here is an error.
pub fn resolve_action(
    state: &mut PlayerState,
    action: Action,
    cfg: &TuningConfig,
    roller: &mut impl Roller,
    log: &mut Vec<Narration>,
) {
    debug!(?action, "resolving action");
    match action {
        Action::Rest => rest(state, cfg, roller, log),
        Action::Scavenge => scavenge(state, cfg, roller, log),
        Action::Fortify => fortify(state, cfg, log),
        Action::UseItem(choice) => use_item(state, choice, cfg, log),
        Action::Invalid => {
            state.energy -= cfg.hesitation_energy_cost;
            log.push(Narration::Hesitated);
        }
    }
}

/// Eat a little food and recover health. Refused without enough food.
fn rest(state: &mut PlayerState, cfg: &TuningConfig, roller: &mut impl Roller, log: &mut Vec<Narration>) {
    if state.food < cfg.rest_food_cost {
        log.push(Narration::NotEnoughFood);
        return;
    }
    state.food -= cfg.rest_food_cost;
    state.energy -= cfg.rest_energy_cost;
    let health_gained = roller.roll_span(cfg.rest_heal);
    state.health += health_gained;
    log.push(Narration::Rested { health_gained });
}

/// Search outside. Costs energy up front; the percentile roll decides
/// between an item find, loose food, or an ambush -- exactly one branch.
fn scavenge(
    state: &mut PlayerState,
    cfg: &TuningConfig,
    roller: &mut impl Roller,
    log: &mut Vec<Narration>,
) {
    state.energy -= cfg.scavenge_energy_cost;
    let roll = roller.roll(1, 100);
    if roll > cfg.scavenge_item_over {
        let item = if roller.roll(0, 1) == 0 { ItemKind::CannedFood } else { ItemKind::Medkit };
        let count = state.item_count(item);
        state.inventory.insert(item, count + 1);
        log.push(Narration::FoundItem { item });
    } else if roll > cfg.scavenge_food_over {
        let amount = roller.roll_span(cfg.scavenge_food_found);
        state.food += amount;
        log.push(Narration::FoundFood { amount });
    } else {
        let damage = roller.roll_span(cfg.ambush_damage);
        state.health -= damage;
        log.push(Narration::Ambushed { damage });
    }
}

/// Raise the shelter level. Refused without enough energy.
fn fortify(state: &mut PlayerState, cfg: &TuningConfig, log: &mut Vec<Narration>) {
    if state.energy < cfg.fortify_energy_cost {
        log.push(Narration::TooExhausted);
        return;
    }
    state.energy -= cfg.fortify_energy_cost;
    state.shelter_level += 1;
    log.push(Narration::Fortified { level: state.shelter_level });
}

/// Delegate to the item resolver, narrating the empty-inventory and
/// invalid-selection cases without mutating anything.
fn use_item(
    state: &mut PlayerState,
    choice: Option<ItemKind>,
    cfg: &TuningConfig,
    log: &mut Vec<Narration>,
) {
    if !state.has_any_items() {
        log.push(Narration::InventoryEmpty);
        return;
    }
    match choice {
        Some(kind) => items::use_item(state, kind, cfg, log),
        None => log.push(Narration::InvalidItemChoice),
    }
}
