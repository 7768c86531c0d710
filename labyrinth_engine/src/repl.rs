//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the various command handlers that manipulate the [`LabyrinthWorld`].

pub mod hazard;
mod input;
pub mod inventory;
pub mod item;
pub mod look;
pub mod movement;
pub mod puzzle;
pub mod system;

pub use hazard::*;
pub use inventory::*;
pub use item::*;
pub use look::*;
pub use movement::*;
pub use puzzle::*;
pub use system::*;

use crate::command::{Command, Verb, parse_command};
use crate::prompt::Prompter;
use crate::style::GameStyle;
use crate::world::{LabyrinthWorld, Outcome};
use crate::{View, ViewItem};

use anyhow::Result;
use colored::Colorize;
use log::info;

use input::{InputEvent, InputManager};

/// Run the main read–eval–print loop until the game ends.
///
/// Handles prompting, command parsing and dispatching to the various handler
/// modules. Returns once the player wins, loses or quits. End of input and
/// Ctrl-C are treated as `quit`, also when they cut off a question mid-command.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing room for the player.
pub fn run_repl(world: &mut LabyrinthWorld) -> Result<()> {
    let mut view = View::new();
    let mut input_manager = InputManager::new();

    while !world.state.game_over {
        let prompt = format!("\n[Steps: {}]>> ", world.state.steps_taken)
            .prompt_style()
            .to_string();

        let input_event = if let Ok(event) = input_manager.read_line(&prompt) {
            event
        } else {
            view.push(ViewItem::Error("Failed to read input. Try again.".red().to_string()));
            view.flush();
            continue;
        };

        if !matches!(input_event, InputEvent::Line(_)) {
            view.push(ViewItem::EngineMessage("Input closed. Leaving the labyrinth.".to_string()));
        }
        let input = input_event.into_command_line();
        if input.trim().is_empty() {
            continue;
        }

        let command = parse_command(&input);
        info!("command: {command:?}");
        dispatch(world, &mut view, &mut input_manager, &command)?;
        view.flush();
    }
    Ok(())
}

/// Route one parsed command to its handler.
///
/// When the command ends the game by a win or a loss, the closing summary is
/// queued as well.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing room for the player.
pub fn dispatch(
    world: &mut LabyrinthWorld,
    view: &mut View,
    prompter: &mut dyn Prompter,
    command: &Command,
) -> Result<()> {
    if world.state.game_over {
        return Ok(());
    }
    match command {
        Command::Go(direction) => move_player(world, view, direction)?,
        Command::Look => look_handler(world, view)?,
        Command::Take(item) => take_item(world, view, item)?,
        Command::Use(item) => use_item(world, view, item),
        Command::Inventory => inv_handler(world, view),
        Command::Solve => solve_handler(world, view, prompter)?,
        Command::Help => help_handler(world, view),
        Command::Quit => quit_handler(world, view),
        Command::Incomplete(verb) => {
            let missing = match verb {
                Verb::Go => "Go where?",
                Verb::Take => "Take what?",
                Verb::Use => "Use what?",
            };
            view.push(ViewItem::ActionFailure(missing.to_string()));
        },
        Command::Unknown => {
            view.push(ViewItem::Error(
                "Didn't quite catch that. Type `help` for a list of commands.".to_string(),
            ));
        },
    }

    if world.state.game_over && world.state.outcome != Some(Outcome::Quit) {
        summary_handler(world, view);
    }
    Ok(())
}

/// End the session in victory.
pub fn win_game(world: &mut LabyrinthWorld, view: &mut View) {
    view.push(ViewItem::GameWon(
        "The chest holds the treasure of the labyrinth. You win!".to_string(),
    ));
    world.state.finish(Outcome::Won);
}

/// End the session in defeat.
pub fn lose_game(world: &mut LabyrinthWorld, view: &mut View, cause: &str) {
    view.push(ViewItem::GameLost(format!("{cause} The game is over.")));
    world.state.finish(Outcome::Lost {
        cause: cause.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedInput;
    use crate::room::Room;
    use crate::world::GameState;

    fn one_room() -> LabyrinthWorld {
        let mut world = LabyrinthWorld::new_empty();
        world.rooms.insert("entrance".into(), Room::new("entrance", "A doorway."));
        world.state = GameState::new("entrance");
        world
    }

    #[test]
    fn unknown_and_incomplete_commands_change_nothing() {
        let mut world = one_room();
        let before = world.state.clone();
        let mut view = View::new();
        let mut input = ScriptedInput::default();
        for line in ["dance", "go", "take", "use"] {
            dispatch(&mut world, &mut view, &mut input, &parse_command(line)).unwrap();
        }
        assert_eq!(world.state, before);
        assert_eq!(view.view_items().count(), 4);
    }

    #[test]
    fn nothing_runs_after_game_over() {
        let mut world = one_room();
        let mut view = View::new();
        let mut input = ScriptedInput::default();
        dispatch(&mut world, &mut view, &mut input, &Command::Quit).unwrap();
        view.reset();
        dispatch(&mut world, &mut view, &mut input, &Command::Look).unwrap();
        assert_eq!(view.view_items().count(), 0);
    }

    #[test]
    fn interrupt_ends_the_session() {
        let mut world = one_room();
        world.state.steps_taken = 2;
        let mut view = View::new();
        let mut input = ScriptedInput::default();
        let line = InputEvent::Interrupted.into_command_line();
        dispatch(&mut world, &mut view, &mut input, &parse_command(&line)).unwrap();
        assert!(world.state.game_over);
        assert_eq!(world.state.outcome, Some(Outcome::Quit));
        assert!(view.view_items().any(|item| *item == ViewItem::QuitSummary { steps: 2, items: 0 }));
    }

    #[test]
    fn lose_game_records_the_cause() {
        let mut world = one_room();
        let mut view = View::new();
        lose_game(&mut world, &mut view, "Crushed.");
        assert!(world.state.game_over);
        assert_eq!(
            world.state.outcome,
            Some(Outcome::Lost {
                cause: "Crushed.".into()
            })
        );
    }
}
