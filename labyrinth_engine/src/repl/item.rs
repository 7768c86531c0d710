//! `repl::item` module
//!
//! Contains repl loop handlers for commands that affect item state

use crate::item::{ItemHolder, ItemKind};
use crate::style::GameStyle;
use crate::{LabyrinthWorld, View, ViewItem};

use log::info;

/// Use an item from the inventory.
///
/// Using never consumes the item. The bronze box is the only item whose use
/// changes anything: the first time it is opened it hands over the rusty key.
pub fn use_item(world: &mut LabyrinthWorld, view: &mut View, item: &str) {
    if !world.state.contains_item(item) {
        view.push(ViewItem::ActionFailure(format!(
            "You don't have a {}.",
            item.error_style()
        )));
        return;
    }

    let msg = match ItemKind::from_symbol(item) {
        Some(ItemKind::Torch) => "You light the torch. The shadows draw back and you can see your surroundings.",
        Some(ItemKind::Sword) => "You take the sword in hand. You feel more confident.",
        Some(ItemKind::BronzeBox) => {
            if world.state.add_item(ItemKind::RustyKey.symbol()) {
                info!("bronze box opened: rusty key added to inventory");
                "You open the bronze box. Inside lies a rusty key!"
            } else {
                "The box is empty."
            }
        },
        Some(ItemKind::AncientBook) => {
            "You leaf through the ancient book. Someone has scribbled notes about the labyrinth's riddles in the margins."
        },
        Some(ItemKind::RustyKey) => "The key looks fragile. Maybe it fits one of the doors.",
        Some(ItemKind::Coin | ItemKind::TreasureChest | ItemKind::TreasureKey) | None => {
            view.push(ViewItem::ActionFailure(format!(
                "You don't know how to use the {}.",
                item.item_style()
            )));
            return;
        },
    };
    view.push(ViewItem::ActionSuccess(msg.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Room;
    use crate::world::GameState;

    fn armory_with(inventory: &[&str]) -> LabyrinthWorld {
        let mut world = LabyrinthWorld::new_empty();
        world.rooms.insert("armory".into(), Room::new("armory", "Racks."));
        world.state = GameState::new("armory");
        world.state.inventory = inventory.iter().map(ToString::to_string).collect();
        world
    }

    #[test]
    fn bronze_box_yields_key_once() {
        let mut world = armory_with(&["bronze_box"]);
        let mut view = View::new();
        use_item(&mut world, &mut view, "bronze_box");
        use_item(&mut world, &mut view, "bronze_box");
        assert_eq!(world.state.inventory, vec!["bronze_box".to_string(), "rusty_key".to_string()]);
    }

    #[test]
    fn use_needs_the_item_in_hand() {
        let mut world = armory_with(&[]);
        let mut view = View::new();
        use_item(&mut world, &mut view, "torch");
        assert!(view.view_items().all(ViewItem::is_action_failure));
        assert!(world.state.inventory.is_empty());
    }

    #[test]
    fn use_never_consumes() {
        let mut world = armory_with(&["torch", "sword", "ancient_book", "rusty_key", "coin"]);
        let before = world.state.inventory.clone();
        let mut view = View::new();
        for item in before.clone() {
            use_item(&mut world, &mut view, &item);
        }
        assert_eq!(world.state.inventory, before);
        // the coin has no use
        assert_eq!(view.view_items().filter(|item| item.is_action_failure()).count(), 1);
    }
}
