//! The injected randomness seam.
//!
//! Resolvers never call an ambient generator. They draw through the
//! narrow [`Roller`] trait, which exposes exactly one operation: a
//! uniform integer in an inclusive range. Production wraps a `rand`
//! generator in [`RngRoller`]; tests script exact draws with
//! [`ScriptedRoller`] so every branch is reachable deterministically.

use std::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Span;

/// A source of uniform integer draws.
pub trait Roller {
    /// Draw a uniformly distributed integer in `lo..=hi`.
    fn roll(&mut self, lo: i32, hi: i32) -> i32;

    /// Draw from an inclusive [`Span`].
    fn roll_span(&mut self, span: Span) -> i32 {
        self.roll(span.lo, span.hi)
    }
}

/// Adapter driving [`Roller`] from any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngRoller<R> {
    rng: R,
}

impl<R: Rng> RngRoller<R> {
    /// Wrap an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngRoller<SmallRng> {
    /// A roller seeded for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// A roller seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> Roller for RngRoller<R> {
    fn roll(&mut self, lo: i32, hi: i32) -> i32 {
        self.rng.random_range(lo..=hi)
    }
}

/// A roller that replays a fixed sequence of values.
///
/// Each call pops the next scripted value, clamped into the requested
/// range; an exhausted script yields the range minimum. This makes
/// resolver branch tests exact without touching a real generator.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    rolls: VecDeque<i32>,
}

impl ScriptedRoller {
    /// Script the given draws, in order.
    pub fn new(rolls: impl IntoIterator<Item = i32>) -> Self {
        Self { rolls: rolls.into_iter().collect() }
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, lo: i32, hi: i32) -> i32 {
        self.rolls.pop_front().map_or(lo, |value| value.clamp(lo, hi))
    }
}
