//! `repl::puzzle` module
//!
//! Riddles and the treasure chest. Both need an answer from the player in the
//! middle of the command, which is read through a [`Prompter`].

use crate::item::{ItemHolder, ItemKind};
use crate::prompt::Prompter;
use crate::repl::hazard::trigger_trap;
use crate::repl::{lose_game, win_game};
use crate::{LabyrinthWorld, View, ViewItem};

use anyhow::Result;
use log::info;

/// Route `solve`: in the treasure room with the chest still there it works the
/// chest, anywhere else it attempts the room's riddle.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn solve_handler(world: &mut LabyrinthWorld, view: &mut View, prompter: &mut dyn Prompter) -> Result<()> {
    if world.in_treasure_room() && world.player_room_ref()?.has(ItemKind::TreasureChest) {
        attempt_open_treasure(world, view, prompter)
    } else {
        solve_puzzle(world, view, prompter)
    }
}

/// Ask the current room's riddle and judge the answer.
///
/// A right answer (or a listed alternate) clears the riddle for good and drops
/// any reward into the room, unless the player is already carrying it. A wrong one counts against the room, springs the
/// trap in the trap room, and ends the game once the attempt limit is reached.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn solve_puzzle(world: &mut LabyrinthWorld, view: &mut View, prompter: &mut dyn Prompter) -> Result<()> {
    let Some(question) = current_question(world)? else {
        view.push(ViewItem::ActionFailure("There is no riddle here.".to_string()));
        return Ok(());
    };
    let Some(answer) = prompter.ask(&question) else {
        info!("no answer given; solve abandoned");
        return Ok(());
    };

    let max_attempts = world.rules.max_puzzle_attempts;
    let reward_held = world
        .player_room_ref()?
        .puzzle
        .as_ref()
        .and_then(|puzzle| puzzle.reward.as_deref())
        .is_some_and(|reward| world.state.contains_item(reward));
    let room = world.player_room_mut()?;
    if room.puzzle.as_ref().is_some_and(|puzzle| puzzle.accepts(&answer)) {
        if let Some(puzzle) = room.clear_puzzle() {
            info!("puzzle in '{}' solved", room.id);
            view.push(ViewItem::ActionSuccess("Correct! The riddle is solved.".to_string()));
            if !puzzle.solved_text.is_empty() {
                view.push(ViewItem::TriggeredEvent(puzzle.solved_text));
            }
            // an item lives in one place only
            if let Some(reward) = puzzle.reward
                && !reward_held
                && room.add_item(&reward)
            {
                info!("'{reward}' revealed in '{}'", room.id);
            }
        }
        return Ok(());
    }

    room.puzzle_attempts += 1;
    let attempts = room.puzzle_attempts;
    info!("wrong answer in '{}' ({attempts}/{max_attempts})", room.id);
    view.push(ViewItem::ActionFailure(format!(
        "Wrong. Try again. ({attempts} of {max_attempts} attempts used)"
    )));

    if world.in_trap_room() {
        trigger_trap(world, view);
    }
    if !world.state.game_over && attempts >= max_attempts {
        lose_game(
            world,
            view,
            "The walls close in. The labyrinth has run out of patience with your guesses.",
        );
    }
    Ok(())
}

/// Try to open the treasure chest, with the key or with the room's code.
///
/// The code path only takes the exact answer. A wrong code changes nothing and
/// can be retried as often as the player likes.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn attempt_open_treasure(
    world: &mut LabyrinthWorld,
    view: &mut View,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let chest = ItemKind::TreasureChest.symbol();
    if !world.player_room_ref()?.contains_item(chest) {
        view.push(ViewItem::ActionFailure("The chest is already open.".to_string()));
        return Ok(());
    }

    if world.state.has(ItemKind::TreasureKey) {
        world.player_room_mut()?.remove_item(chest);
        view.push(ViewItem::ActionSuccess(
            "You turn the key and the lock clicks. The chest is open!".to_string(),
        ));
        win_game(world, view);
        return Ok(());
    }

    let Some(choice) = prompter.ask("The chest is locked. Maybe a code would open it. Enter a code? (yes/no)") else {
        return Ok(());
    };
    if !matches!(choice.trim().to_lowercase().as_str(), "yes" | "y") {
        view.push(ViewItem::ActionSuccess("You step back from the chest.".to_string()));
        return Ok(());
    }

    let Some(question) = current_question(world)? else {
        view.push(ViewItem::ActionFailure("The code has already been used.".to_string()));
        return Ok(());
    };
    let Some(code) = prompter.ask(&question) else {
        return Ok(());
    };

    let room = world.player_room_mut()?;
    if room.puzzle.as_ref().is_some_and(|puzzle| puzzle.matches_exactly(&code)) {
        room.remove_item(chest);
        room.clear_puzzle();
        view.push(ViewItem::ActionSuccess(
            "The code is right! The chest opens with a soft click.".to_string(),
        ));
        win_game(world, view);
    } else {
        view.push(ViewItem::ActionFailure("Wrong code. The chest stays locked.".to_string()));
    }
    Ok(())
}

fn current_question(world: &LabyrinthWorld) -> Result<Option<String>> {
    Ok(world
        .player_room_ref()?
        .puzzle
        .as_ref()
        .map(|puzzle| puzzle.question.clone()))
}
