//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use crate::item::ItemHolder;
use crate::repl::hazard::random_event;
use crate::{LabyrinthWorld, View, ViewItem};

use anyhow::Result;
use log::info;

/// Move the player through an exit of the current room.
///
/// Nothing changes if there is no such exit or the destination is locked to the
/// player. A successful move counts a step, shows the new room and then rolls
/// for a random event.
///
/// # Errors
/// - if the current room or the exit's destination is missing from the world
pub fn move_player(world: &mut LabyrinthWorld, view: &mut View, direction: &str) -> Result<()> {
    let direction = direction.trim().to_lowercase();
    let Some(destination) = world.player_room_ref()?.exit_to(&direction).map(str::to_string) else {
        view.push(ViewItem::ActionFailure(format!("You can't go {direction} from here.")));
        return Ok(());
    };

    if let Some(required) = &world.room(&destination)?.entry_requires
        && !world.state.contains_item(required)
    {
        info!("player blocked from '{destination}': missing '{required}'");
        view.push(ViewItem::ActionFailure(format!(
            "The door to the {direction} is locked. Perhaps a key would help."
        )));
        return Ok(());
    }

    view.push(ViewItem::TransitionMessage(format!("You head {direction}.")));
    world.state.current_room = destination;
    world.state.steps_taken += 1;
    info!(
        "player moved to '{}' (step {})",
        world.state.current_room, world.state.steps_taken
    );
    world.player_room_ref()?.show(view);

    random_event(world, view)
}
