//! Item resolver: consuming one unit of an inventory item.

use tracing::debug;

use longnight_types::{ItemKind, Narration, PlayerState};

use crate::config::TuningConfig;

/// Consume one unit of `kind` and apply its effect.
///
/// If the player holds none of the item, nothing is mutated and an
/// invalid-choice narration is appended instead. The inventory entry is
/// removed entirely when its count reaches zero, so count-0 items are
/// never observable.
pub fn use_item(
    state: &mut PlayerState,
    kind: ItemKind,
    cfg: &TuningConfig,
    log: &mut Vec<Narration>,
) {
    let count = state.item_count(kind);
    if count == 0 {
        log.push(Narration::InvalidItemChoice);
        return;
    }

    if count == 1 {
        state.inventory.remove(&kind);
    } else {
        state.inventory.insert(kind, count - 1);
    }

    let restored = match kind {
        ItemKind::Medkit => {
            state.health += cfg.medkit_heal;
            cfg.medkit_heal
        }
        ItemKind::CannedFood => {
            state.food += cfg.canned_food_value;
            cfg.canned_food_value
        }
    };

    debug!(item = %kind, restored, remaining = count - 1, "item consumed");
    log.push(Narration::ItemUsed { item: kind, restored });
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn state_with(inventory: &[(ItemKind, u32)]) -> PlayerState {
        PlayerState {
            health: 40,
            food: 20,
            energy: 60,
            shelter_level: 1,
            inventory: inventory.iter().copied().collect(),
            hours_survived: 0,
        }
    }

    #[test]
    fn medkit_restores_health_and_decrements() {
        let cfg = TuningConfig::default();
        let mut state = state_with(&[(ItemKind::Medkit, 2)]);
        let mut log = Vec::new();

        use_item(&mut state, ItemKind::Medkit, &cfg, &mut log);

        assert_eq!(state.health, 90);
        assert_eq!(state.item_count(ItemKind::Medkit), 1);
        assert_eq!(log, vec![Narration::ItemUsed { item: ItemKind::Medkit, restored: 50 }]);
    }

    #[test]
    fn canned_food_restores_food() {
        let cfg = TuningConfig::default();
        let mut state = state_with(&[(ItemKind::CannedFood, 1)]);
        let mut log = Vec::new();

        use_item(&mut state, ItemKind::CannedFood, &cfg, &mut log);

        assert_eq!(state.food, 60);
        assert_eq!(state.health, 40);
    }

    #[test]
    fn last_unit_removes_the_entry() {
        let cfg = TuningConfig::default();
        let mut state = state_with(&[(ItemKind::Medkit, 1)]);
        let mut log = Vec::new();

        use_item(&mut state, ItemKind::Medkit, &cfg, &mut log);

        assert_eq!(state.inventory, BTreeMap::new());
    }

    #[test]
    fn zero_count_is_rejected_without_mutation() {
        let cfg = TuningConfig::default();
        let mut state = state_with(&[(ItemKind::CannedFood, 1)]);
        let before = state.clone();
        let mut log = Vec::new();

        use_item(&mut state, ItemKind::Medkit, &cfg, &mut log);

        assert_eq!(state, before);
        assert_eq!(log, vec![Narration::InvalidItemChoice]);
    }

    #[test]
    fn medkit_can_transiently_exceed_the_health_cap() {
        // Clamping happens once per hour in upkeep, not here.
        let cfg = TuningConfig::default();
        let mut state = state_with(&[(ItemKind::Medkit, 1)]);
        state.health = 90;
        let mut log = Vec::new();

        use_item(&mut state, ItemKind::Medkit, &cfg, &mut log);

        assert_eq!(state.health, 140);
    }
}
