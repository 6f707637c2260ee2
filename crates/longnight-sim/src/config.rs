//! Configuration loading and typed tuning parameters.
//!
//! The canonical configuration lives in `longnight.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure and provides a loader that reads the file. Every gameplay
//! number is a named field here; the resolvers contain no literals.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use longnight_types::{ItemKind, PlayerState};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// An inclusive integer interval for randomized effect magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Span {
    /// Smallest value the roll can produce.
    pub lo: i32,
    /// Largest value the roll can produce.
    pub hi: i32,
}

impl Span {
    /// Create a span covering `lo..=hi`.
    pub const fn new(lo: i32, hi: i32) -> Self {
        Self { lo, hi }
    }
}

/// Top-level game configuration.
///
/// Mirrors the structure of `longnight.yaml`. All fields have defaults
/// matching the canonical tuning, so a missing file or a partial file
/// is always usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Session-level settings (seed, goal).
    #[serde(default)]
    pub world: WorldConfig,

    /// Starting player attributes and inventory.
    #[serde(default)]
    pub player: StartConfig,

    /// Gameplay tuning numbers.
    #[serde(default)]
    pub tuning: TuningConfig,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML for this
    /// structure.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }
}

/// Session-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// RNG seed for reproducible sessions. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Hours the player must survive to win (default: 24).
    #[serde(default = "default_goal_hours")]
    pub goal_hours: u32,
}

const fn default_goal_hours() -> u32 {
    24
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { seed: None, goal_hours: default_goal_hours() }
    }
}

/// Starting player attributes and inventory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    /// Starting health (default: 100).
    pub health: i32,
    /// Starting food (default: 50).
    pub food: i32,
    /// Starting energy (default: 100).
    pub energy: i32,
    /// Starting shelter level (default: 1).
    pub shelter_level: u32,
    /// Medkits in the starting inventory (default: 1).
    pub medkits: u32,
    /// Canned food in the starting inventory (default: 2).
    pub canned_food: u32,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self { health: 100, food: 50, energy: 100, shelter_level: 1, medkits: 1, canned_food: 2 }
    }
}

impl StartConfig {
    /// Build the initial player state for a new session.
    ///
    /// Zero-count starting items are omitted from the inventory map.
    pub fn initial_state(&self) -> PlayerState {
        let mut inventory = BTreeMap::new();
        if self.medkits > 0 {
            inventory.insert(ItemKind::Medkit, self.medkits);
        }
        if self.canned_food > 0 {
            inventory.insert(ItemKind::CannedFood, self.canned_food);
        }
        PlayerState {
            health: self.health,
            food: self.food,
            energy: self.energy,
            shelter_level: self.shelter_level,
            inventory,
            hours_survived: 0,
        }
    }
}

/// Gameplay tuning numbers applied by the resolvers.
///
/// All costs and damages are whole points against the `[0, 100]` vital
/// scales. Percentile rolls are drawn from `1..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    /// Food consumed by a successful Rest (default: 5).
    pub rest_food_cost: i32,
    /// Energy consumed by a successful Rest (default: 5).
    pub rest_energy_cost: i32,
    /// Health recovered by a successful Rest (default: 10..=15).
    pub rest_heal: Span,

    /// Energy consumed by Scavenge, success or not (default: 20).
    pub scavenge_energy_cost: i32,
    /// Percentile above which Scavenge yields an item (default: 70).
    pub scavenge_item_over: i32,
    /// Percentile above which Scavenge yields loose food (default: 40).
    /// At or below this, the scavenger is ambushed instead.
    pub scavenge_food_over: i32,
    /// Food gained when Scavenge finds supplies (default: 10..=20).
    pub scavenge_food_found: Span,
    /// Health lost to a scavenging ambush (default: 10..=15).
    pub ambush_damage: Span,

    /// Energy consumed by a successful Fortify (default: 30).
    pub fortify_energy_cost: i32,

    /// Energy wasted by hesitating on invalid input (default: 5).
    pub hesitation_energy_cost: i32,

    /// Base percentile an event roll must exceed to go adverse
    /// (default: 60). Each shelter level adds
    /// [`shelter_threshold_bonus`](Self::shelter_threshold_bonus).
    pub event_base_threshold: i32,
    /// Threshold increase per shelter level (default: 5).
    pub shelter_threshold_bonus: i32,
    /// Percentile below which the hour passes quietly (default: 10).
    pub calm_under: i32,
    /// Health lost to a Noise event (default: 5..=10).
    pub noise_damage: Span,
    /// Health lost to an Intruder event (default: 10..=20).
    pub intruder_damage: Span,
    /// Food lost to a Wind event (default: 5..=15).
    pub wind_food_loss: Span,

    /// Energy drained every hour regardless of action (default: 2).
    pub passive_energy_drain: i32,
    /// Health lost per hour while food is at zero (default: 5).
    pub starvation_damage: i32,
    /// Health lost per hour while energy is at zero (default: 3).
    pub exhaustion_damage: i32,

    /// Health restored by a medkit (default: 50).
    pub medkit_heal: i32,
    /// Food restored by canned food (default: 40).
    pub canned_food_value: i32,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            rest_food_cost: 5,
            rest_energy_cost: 5,
            rest_heal: Span::new(10, 15),
            scavenge_energy_cost: 20,
            scavenge_item_over: 70,
            scavenge_food_over: 40,
            scavenge_food_found: Span::new(10, 20),
            ambush_damage: Span::new(10, 15),
            fortify_energy_cost: 30,
            hesitation_energy_cost: 5,
            event_base_threshold: 60,
            shelter_threshold_bonus: 5,
            calm_under: 10,
            noise_damage: Span::new(5, 10),
            intruder_damage: Span::new(10, 20),
            wind_food_loss: Span::new(5, 15),
            passive_energy_drain: 2,
            starvation_damage: 5,
            exhaustion_damage: 3,
            medkit_heal: 50,
            canned_food_value: 40,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.world.goal_hours, 24);
        assert_eq!(cfg.world.seed, None);
        assert_eq!(cfg.player.health, 100);
        assert_eq!(cfg.player.food, 50);
        assert_eq!(cfg.player.energy, 100);
        assert_eq!(cfg.player.shelter_level, 1);
        assert_eq!(cfg.tuning.rest_heal, Span::new(10, 15));
        assert_eq!(cfg.tuning.event_base_threshold, 60);
        assert_eq!(cfg.tuning.passive_energy_drain, 2);
    }

    #[test]
    fn initial_state_carries_starter_inventory() {
        let state = StartConfig::default().initial_state();
        assert_eq!(state.item_count(ItemKind::Medkit), 1);
        assert_eq!(state.item_count(ItemKind::CannedFood), 2);
        assert_eq!(state.hours_survived, 0);
    }

    #[test]
    fn initial_state_omits_zero_count_items() {
        let start = StartConfig { medkits: 0, ..StartConfig::default() };
        let state = start.initial_state();
        assert!(!state.inventory.contains_key(&ItemKind::Medkit));
    }

    #[test]
    fn partial_yaml_fills_remaining_defaults() {
        let yaml = "world:\n  seed: 42\nplayer:\n  food: 100\n";
        let cfg: GameConfig = serde_yml::from_str(yaml).unwrap_or_default();
        assert_eq!(cfg.world.seed, Some(42));
        assert_eq!(cfg.world.goal_hours, 24);
        assert_eq!(cfg.player.food, 100);
        assert_eq!(cfg.player.health, 100);
        assert_eq!(cfg.tuning, TuningConfig::default());
    }

    #[test]
    fn span_parses_from_yaml_mapping() {
        let yaml = "tuning:\n  rest_heal: { lo: 1, hi: 2 }\n";
        let cfg: GameConfig = serde_yml::from_str(yaml).unwrap_or_default();
        assert_eq!(cfg.tuning.rest_heal, Span::new(1, 2));
    }
}
