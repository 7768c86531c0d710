//! `repl::look` module
//!
//! Handlers for commands that observe the world without changing it.

use crate::{LabyrinthWorld, View};

use anyhow::Result;

/// Shows description of surroundings.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn look_handler(world: &LabyrinthWorld, view: &mut View) -> Result<()> {
    world.player_room_ref()?.show(view);
    Ok(())
}
