//! Simulation rules for the Longnight survival game.
//!
//! This crate contains everything between the raw input boundary and
//! the rendering boundary: the per-hour resolvers, the hourly step
//! engine, and the session runner. It performs no I/O beyond `tracing`
//! diagnostics; input arrives through the [`ActionSource`] trait and
//! output leaves through the [`Presenter`] trait.
//!
//! # Modules
//!
//! - [`actions`] -- Action resolver (Rest, Scavenge, Fortify, items, hesitation)
//! - [`config`] -- Typed configuration with YAML loading ([`GameConfig`])
//! - [`decision`] -- Action source trait and scripted stub ([`ActionSource`])
//! - [`events`] -- Shelter-modulated hourly event resolver
//! - [`items`] -- Item resolver (medkits, canned food)
//! - [`roll`] -- Injected randomness seam ([`Roller`])
//! - [`session`] -- Session runner and presenter trait ([`run_session`])
//! - [`tick`] -- The hourly step engine ([`run_hour`])
//! - [`upkeep`] -- Passive decay, threshold penalties, clamping

pub mod actions;
pub mod config;
pub mod decision;
pub mod events;
pub mod items;
pub mod roll;
pub mod session;
pub mod tick;
pub mod upkeep;

// Re-export primary types at crate root for convenience.
pub use config::{ConfigError, GameConfig, StartConfig, TuningConfig, WorldConfig};
pub use decision::{ActionSource, ActionSourceError, ScriptedActionSource};
pub use roll::{RngRoller, Roller, ScriptedRoller};
pub use session::{NoOpPresenter, Presenter, SessionResult, run_session};
pub use tick::{HourSummary, SessionStatus, run_hour};
