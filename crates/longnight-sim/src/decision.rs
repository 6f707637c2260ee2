//! Action source trait and scripted implementation.
//!
//! At the start of each hour the engine asks the [`ActionSource`] for
//! one action selection. The trait abstracts the mechanism -- a human
//! at a terminal, a scripted bot, or a test stub. The core never parses
//! raw input; sources are responsible for mapping whatever they read
//! into an [`Action`] (unparseable input becomes [`Action::Invalid`],
//! an invalid item selection becomes `UseItem(None)`).

use std::collections::VecDeque;

use longnight_types::{Action, PlayerState};

/// Errors that can occur while obtaining the next action.
///
/// These are boundary failures (a closed input channel, an exhausted
/// script), not gameplay failures -- bad selections are narrated by the
/// resolvers, never returned as errors.
#[derive(Debug, thiserror::Error)]
pub enum ActionSourceError {
    /// The underlying input channel failed or closed.
    #[error("input unavailable: {message}")]
    InputUnavailable {
        /// Description of the input failure.
        message: String,
    },

    /// A scripted source ran out of actions.
    #[error("action script exhausted after {actions_taken} actions")]
    ScriptExhausted {
        /// How many actions were taken before the script ran out.
        actions_taken: usize,
    },
}

/// A source of per-hour action selections.
///
/// The current state is provided read-only so interactive sources can
/// present the inventory when the player chooses to use an item.
pub trait ActionSource {
    /// Obtain the action for the coming hour.
    ///
    /// # Errors
    ///
    /// Returns [`ActionSourceError`] only when the source itself fails;
    /// invalid player input must be mapped to [`Action::Invalid`] or
    /// `UseItem(None)` instead.
    fn next_action(&mut self, state: &PlayerState) -> Result<Action, ActionSourceError>;
}

/// A source that replays a fixed sequence of actions.
///
/// Used by tests and headless runs. A draining script errors with
/// [`ActionSourceError::ScriptExhausted`] when empty; a cycling script
/// repeats its sequence forever.
#[derive(Debug, Clone)]
pub struct ScriptedActionSource {
    queue: VecDeque<Action>,
    cycle: bool,
    actions_taken: usize,
}

impl ScriptedActionSource {
    /// Replay the given actions once, in order.
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self { queue: actions.into_iter().collect(), cycle: false, actions_taken: 0 }
    }

    /// Repeat the given sequence of actions forever.
    pub fn cycling(actions: impl IntoIterator<Item = Action>) -> Self {
        Self { queue: actions.into_iter().collect(), cycle: true, actions_taken: 0 }
    }
}

impl ActionSource for ScriptedActionSource {
    fn next_action(&mut self, _state: &PlayerState) -> Result<Action, ActionSourceError> {
        let Some(action) = self.queue.pop_front() else {
            return Err(ActionSourceError::ScriptExhausted { actions_taken: self.actions_taken });
        };
        if self.cycle {
            self.queue.push_back(action);
        }
        self.actions_taken += 1;
        Ok(action)
    }
}
