//! Console rendering: status panel, narration wording, final screen.
//!
//! All display text lives here. The core hands over structured
//! [`Narration`] events and a read-only state snapshot; this module
//! decides the wording and layout.

use std::io::{self, BufRead};

use longnight_sim::{HourSummary, Presenter, SessionResult, SessionStatus};
use longnight_types::{AdverseEvent, Narration, Outcome, PlayerState};

/// Print the opening banner.
pub fn intro(goal_hours: u32) {
    println!("=================================================");
    println!("==           THE LONG NIGHT BEGINS             ==");
    println!("=================================================");
    println!("You must survive for {goal_hours} hours. Good luck.");
    println!();
}

/// Print the status panel for the current state.
pub fn status_panel(state: &PlayerState, goal_hours: u32) {
    println!("=================================================");
    println!("==        LONGNIGHT - HOUR: {:02}/{goal_hours:02}               ==", state.hours_survived);
    println!("=================================================");
    println!("  Health: {:<5} Food: {:<5} Energy: {:<5}", state.health, state.food, state.energy);
    println!("  Shelter Level: {}", state.shelter_level);
    println!("-------------------------------------------------");
    println!("  Inventory:");
    if state.has_any_items() {
        for (kind, count) in state.carried_items() {
            println!("    - {kind}: {count}");
        }
    } else {
        println!("    - Empty");
    }
    println!("=================================================");
}

/// Word one narration event.
pub fn narration_line(narration: &Narration) -> String {
    match *narration {
        Narration::Rested { health_gained } => {
            format!("You rested and ate some food. Gained {health_gained} health.")
        }
        Narration::NotEnoughFood => String::from("Not enough food to rest properly!"),
        Narration::FoundItem { item } => format!("Success! You found a {item}."),
        Narration::FoundFood { amount } => format!("You found {amount} food supplies."),
        Narration::Ambushed { damage } => {
            format!("You were ambushed while scavenging! Lost {damage} health.")
        }
        Narration::Fortified { level } => {
            format!("You spent time fortifying your shelter. It is now Level {level}.")
        }
        Narration::TooExhausted => String::from("You are too exhausted to fortify the shelter."),
        Narration::ItemUsed { item, restored } => match item {
            longnight_types::ItemKind::Medkit => {
                format!("You used a Medkit and regained {restored} health.")
            }
            longnight_types::ItemKind::CannedFood => {
                format!("You ate Canned Food and restored {restored} food.")
            }
        },
        Narration::InventoryEmpty => String::from("Your inventory is empty."),
        Narration::InvalidItemChoice => String::from("Invalid item choice."),
        Narration::Hesitated => String::from("Invalid choice. You hesitate and waste time."),
        Narration::EventStruck { event, loss } => match event {
            AdverseEvent::Noise => format!(
                "You hear a loud crash outside. The stress damages your health by {loss}!"
            ),
            AdverseEvent::Intruder => format!(
                "An intruder tried to break in! You fought them off, but lost {loss} health."
            ),
            AdverseEvent::Wind => format!(
                "A strong gust of wind blows open a window, spoiling {loss} food."
            ),
        },
        Narration::QuietHour => {
            String::from("The night is surprisingly quiet. You feel a moment of peace.")
        }
        Narration::Starving { damage } => format!("You are starving! (-{damage} Health)"),
        Narration::Exhausted { damage } => format!("You are exhausted! (-{damage} Health)"),
    }
}

/// Print the final screen for a finished session.
pub fn final_screen(result: &SessionResult) {
    println!("=================================================");
    println!("==             THE NIGHT IS OVER               ==");
    println!("=================================================");
    match result.outcome {
        Outcome::Survived => {
            println!();
            println!("Congratulations! You have SURVIVED the long night.");
            println!("Final Health: {}%", result.final_health);
            println!("Final Shelter Level: {}", result.shelter_level);
        }
        Outcome::Died => {
            println!();
            println!("You did not make it through the night...");
            println!("GAME OVER.");
        }
    }
}

/// Console presenter: panel plus narration after each hour, pausing
/// for Enter between hours.
#[derive(Debug)]
pub struct ConsolePresenter {
    goal_hours: u32,
}

impl ConsolePresenter {
    /// Create a presenter for a session with the given goal.
    pub const fn new(goal_hours: u32) -> Self {
        Self { goal_hours }
    }
}

impl Presenter for ConsolePresenter {
    fn on_hour(&mut self, state: &PlayerState, summary: &HourSummary) {
        status_panel(state, self.goal_hours);
        for narration in &summary.narration {
            println!(">> {}", narration_line(narration));
        }
        if summary.status == SessionStatus::Ongoing {
            println!();
            println!("Press Enter to proceed to the next hour...");
            let mut line = String::new();
            let _ = io::stdin().lock().read_line(&mut line);
        }
    }

    fn on_session_over(&mut self, result: &SessionResult) {
        final_screen(result);
    }
}
