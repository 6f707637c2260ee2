//! Structured narration events produced while resolving one hour.
//!
//! The core never builds display strings. Each narrated outcome is a
//! kind plus its parameters; the presentation layer decides how to word
//! it. Narration accumulates in chronological order (action, then event,
//! then threshold penalties) in a per-hour buffer that is surfaced to
//! the presenter and then discarded.

use serde::{Deserialize, Serialize};

use crate::enums::{AdverseEvent, ItemKind};

/// One narrated outcome from the current hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Narration {
    /// The player rested, ate a little, and recovered health.
    Rested {
        /// Health points recovered.
        health_gained: i32,
    },
    /// Rest was refused: not enough food to rest properly.
    NotEnoughFood,
    /// Scavenging turned up an item.
    FoundItem {
        /// The item added to the inventory.
        item: ItemKind,
    },
    /// Scavenging turned up loose food supplies.
    FoundFood {
        /// Food points gained.
        amount: i32,
    },
    /// The player was ambushed while scavenging.
    Ambushed {
        /// Health points lost in the ambush.
        damage: i32,
    },
    /// The shelter was fortified.
    Fortified {
        /// The shelter level after the upgrade.
        level: u32,
    },
    /// Fortifying was refused: too exhausted.
    TooExhausted,
    /// An inventory item was consumed.
    ItemUsed {
        /// The item consumed.
        item: ItemKind,
        /// Points restored (health for a medkit, food for canned food).
        restored: i32,
    },
    /// The player tried to use an item with an empty inventory.
    InventoryEmpty,
    /// The item selection was out of range or unparseable.
    InvalidItemChoice,
    /// Unrecognized input: the player hesitated and wasted time.
    Hesitated,
    /// An adverse event fired this hour.
    EventStruck {
        /// Which event fired.
        event: AdverseEvent,
        /// Points lost (health for Noise/Intruder, food for Wind).
        loss: i32,
    },
    /// The hour passed quietly; a moment of peace.
    QuietHour,
    /// Food hit zero: starvation damage applied.
    Starving {
        /// Health points lost to starvation.
        damage: i32,
    },
    /// Energy hit zero: exhaustion damage applied.
    Exhausted {
        /// Health points lost to exhaustion.
        damage: i32,
    },
}
