//! Interactive action source reading menu selections from stdin.
//!
//! Parsing is split into pure helpers so the mapping from raw lines to
//! [`Action`] values is testable without a terminal. Unparseable input
//! never errors: a bad menu line becomes [`Action::Invalid`] (the core
//! charges a hesitation penalty) and a bad item line becomes
//! `UseItem(None)` (the core narrates an invalid choice). Only a closed
//! stdin surfaces as an [`ActionSourceError`].

use std::io::{self, Write};

use longnight_sim::{ActionSource, ActionSourceError};
use longnight_types::{Action, ItemKind, PlayerState};

/// What a raw menu line maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    /// A directly runnable action.
    Direct(Action),
    /// Entry 4: the item submenu must be shown first.
    ChooseItem,
}

/// Map a raw menu line to a choice. Anything unrecognized hesitates.
fn parse_menu(line: &str) -> MenuChoice {
    match line.trim() {
        "1" => MenuChoice::Direct(Action::Rest),
        "2" => MenuChoice::Direct(Action::Scavenge),
        "3" => MenuChoice::Direct(Action::Fortify),
        "4" => MenuChoice::ChooseItem,
        _ => MenuChoice::Direct(Action::Invalid),
    }
}

/// Map a raw item line to a carried item, 1-based against the listed
/// inventory. Out-of-range or unparseable selections yield `None`.
fn parse_item(line: &str, carried: &[(ItemKind, u32)]) -> Option<ItemKind> {
    line.trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| carried.get(index))
        .map(|&(kind, _)| kind)
}

/// An [`ActionSource`] that prompts on stdout and reads from stdin.
#[derive(Debug, Default)]
pub struct StdinActionSource;

impl StdinActionSource {
    /// Create a stdin-backed source.
    pub const fn new() -> Self {
        Self
    }

    fn read_line(&self) -> Result<String, ActionSourceError> {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| ActionSourceError::InputUnavailable { message: e.to_string() })?;
        if bytes == 0 {
            return Err(ActionSourceError::InputUnavailable {
                message: String::from("stdin closed"),
            });
        }
        Ok(line)
    }

    fn choose_item(&self, state: &PlayerState) -> Result<Action, ActionSourceError> {
        let carried: Vec<(ItemKind, u32)> = state.carried_items().collect();
        if carried.is_empty() {
            // Nothing to offer; the resolver narrates the empty inventory.
            return Ok(Action::UseItem(None));
        }

        println!("Which item to use?");
        for (position, (kind, count)) in carried.iter().enumerate() {
            println!("{}. {kind} ({count})", position + 1);
        }
        let line = self.read_line()?;
        Ok(Action::UseItem(parse_item(&line, &carried)))
    }
}

impl ActionSource for StdinActionSource {
    fn next_action(&mut self, state: &PlayerState) -> Result<Action, ActionSourceError> {
        println!("What will you do?");
        println!("1. Rest (Consume a little Food and Energy to regain Health)");
        println!("2. Scavenge for Supplies (Risky, consumes Energy)");
        println!("3. Fortify Shelter (Consumes Energy, increases Shelter Level)");
        println!("4. Use an Item from Inventory");

        let line = self.read_line()?;
        match parse_menu(&line) {
            MenuChoice::Direct(action) => Ok(action),
            MenuChoice::ChooseItem => self.choose_item(state),
        }
    }
}
