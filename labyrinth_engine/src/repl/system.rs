//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities.

use crate::world::Outcome;
use crate::{LabyrinthWorld, View, ViewItem};

use log::info;

/// Quit the game.
pub fn quit_handler(world: &mut LabyrinthWorld, view: &mut View) {
    info!("player quit after {} steps", world.state.steps_taken);
    info!("ending inventory:");
    world.state.inventory.iter().for_each(|item| info!("- {item}"));

    summary_handler(world, view);
    world.state.finish(Outcome::Quit);
}

/// Show the end-of-session tally.
pub fn summary_handler(world: &LabyrinthWorld, view: &mut View) {
    view.push(ViewItem::QuitSummary {
        steps: world.state.steps_taken,
        items: world.state.inventory.len(),
    });
}

/// Show available commands.
pub fn help_handler(world: &LabyrinthWorld, view: &mut View) {
    view.push(ViewItem::Help {
        basic_text: world.help.basic_text.clone(),
        commands: world.help.commands.clone(),
    });
}
