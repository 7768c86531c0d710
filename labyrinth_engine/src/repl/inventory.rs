//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that move items into the
//! player's hands or list what they carry.

use crate::item::{ItemHolder, ItemKind};
use crate::loader::rules::PickupPolicy;
use crate::style::GameStyle;
use crate::{LabyrinthWorld, View, ViewItem};

use anyhow::Result;
use log::info;

/// Pick up an item from the current room.
///
/// The treasure chest never moves. Under the guarded pickup policy nothing can
/// be taken from a room while its puzzle is still active.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn take_item(world: &mut LabyrinthWorld, view: &mut View, item: &str) -> Result<()> {
    if ItemKind::from_symbol(item) == Some(ItemKind::TreasureChest) {
        view.push(ViewItem::ActionFailure(
            "The chest is far too heavy to lift.".to_string(),
        ));
        return Ok(());
    }

    let guarded = world.rules.pickup_policy == PickupPolicy::Guarded;
    let room = world.player_room_mut()?;
    if guarded && room.has_puzzle() && room.contains_item(item) {
        view.push(ViewItem::ActionFailure(format!(
            "Something holds the {} in place. Perhaps the riddle here must be solved first.",
            item.item_style()
        )));
        return Ok(());
    }

    if room.remove_item(item) {
        world.state.inventory.push(item.to_string());
        info!("player picked up '{item}'");
        view.push(ViewItem::ActionSuccess(format!("You picked up the {}.", item.item_style())));
    } else {
        view.push(ViewItem::ActionFailure(format!(
            "There is no {} here.",
            item.error_style()
        )));
    }
    Ok(())
}

/// Show the contents of the player's inventory.
pub fn inv_handler(world: &LabyrinthWorld, view: &mut View) {
    view.push(ViewItem::Inventory(world.state.inventory.clone()));
}
