//! Shared type definitions for the Longnight survival simulation.
//!
//! This crate is the single source of truth for the data types used across
//! the Longnight workspace. It holds no logic -- the simulation rules live
//! in `longnight-sim`, and all rendering lives in `longnight-cli`.
//!
//! # Modules
//!
//! - [`enums`] -- Enumeration types (actions, items, events, outcomes)
//! - [`state`] -- The player state record mutated by the resolvers
//! - [`narration`] -- Structured per-hour narration events

pub mod enums;
pub mod narration;
pub mod state;

// Re-export all public types at crate root for convenience.
pub use enums::{Action, AdverseEvent, ItemKind, Outcome};
pub use narration::Narration;
pub use state::{PlayerState, VITAL_MAX, VITAL_MIN};
