//! Enumeration types for the Longnight simulation.

use serde::{Deserialize, Serialize};

/// An item the player can carry and consume.
///
/// Items are held in the player's inventory as non-negative counts.
/// An item whose count reaches zero is removed from the inventory map
/// entirely, so a present key always means at least one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Restores a large amount of health when used.
    Medkit,
    /// Restores a large amount of food when eaten.
    CannedFood,
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Medkit => write!(f, "Medkit"),
            Self::CannedFood => write!(f, "Canned Food"),
        }
    }
}

/// The action a player selects for one hour.
///
/// `UseItem(None)` models an out-of-range or unparseable item selection:
/// the action resolver treats it as a no-op with an invalid-choice
/// narration. Raw input that maps to no menu entry at all arrives as
/// [`Action::Invalid`], which carries a small energy penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Eat a little food and recover some health.
    Rest,
    /// Search outside for supplies. Risky.
    Scavenge,
    /// Spend energy to raise the shelter level.
    Fortify,
    /// Consume one inventory item of the chosen kind.
    UseItem(Option<ItemKind>),
    /// Unrecognized input; the player hesitates and wastes time.
    Invalid,
}

/// An adverse environmental event that can fire once per hour.
///
/// Whether any adverse event fires is modulated by the shelter level;
/// which one fires is a uniform pick among the three kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AdverseEvent {
    /// A loud crash outside; the stress costs a little health.
    Noise,
    /// An intruder tries to break in; fighting them off costs health.
    Intruder,
    /// A gust of wind blows a window open and spoils food.
    Wind,
}

/// How a session ended.
///
/// These are the only two terminal states; both are normal termination,
/// not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The player reached the goal hour with health remaining.
    Survived,
    /// The player's health reached zero before the goal hour.
    Died,
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Survived => write!(f, "survived"),
            Self::Died => write!(f, "died"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_kind_display_matches_menu_names() {
        assert_eq!(ItemKind::Medkit.to_string(), "Medkit");
        assert_eq!(ItemKind::CannedFood.to_string(), "Canned Food");
    }

    #[test]
    fn item_kind_orders_deterministically() {
        // Inventory listings rely on the Ord impl for a stable menu order.
        assert!(ItemKind::Medkit < ItemKind::CannedFood);
    }

    #[test]
    fn action_round_trips_through_serde() {
        let action = Action::UseItem(Some(ItemKind::Medkit));
        let json = serde_json::to_string(&action).unwrap_or_default();
        let back: Action = serde_json::from_str(&json).unwrap_or(Action::Invalid);
        assert_eq!(back, action);
    }
}
