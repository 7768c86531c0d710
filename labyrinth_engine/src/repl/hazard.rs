//! `repl::hazard` module
//!
//! Traps and the random events rolled after each move. Every roll is keyed off
//! `steps_taken`, so a given route through the labyrinth always plays out the same.

use crate::item::{ItemHolder, ItemKind};
use crate::loader::rules::CoinPolicy;
use crate::repl::lose_game;
use crate::rng::pseudo_random;
use crate::{LabyrinthWorld, View, ViewItem};

use anyhow::Result;
use log::{debug, info};

/// Things that can happen on their own after the player moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RandomEvent {
    FoundCoin,
    Rustle,
    TrapRoomHazard,
}
impl RandomEvent {
    pub const COUNT: usize = 3;

    /// Map a roll in `0..COUNT` to its event.
    pub fn from_roll(roll: usize) -> Option<RandomEvent> {
        match roll {
            0 => Some(RandomEvent::FoundCoin),
            1 => Some(RandomEvent::Rustle),
            2 => Some(RandomEvent::TrapRoomHazard),
            _ => None,
        }
    }
}

/// Spring a trap on the player.
///
/// In the trap room without a torch this is fatal. Elsewhere (or with a torch)
/// the player loses one random item, or risks a hit if their hands are empty.
pub fn trigger_trap(world: &mut LabyrinthWorld, view: &mut View) {
    view.push(ViewItem::TrapSprung(
        "A trap springs! Stone grinds against stone somewhere in the walls.".to_string(),
    ));

    if world.in_trap_room() && !world.state.has(ItemKind::Torch) {
        lose_game(
            world,
            view,
            "In the darkness you never see the floor open. You fall into the pit.",
        );
        return;
    }

    let steps = world.state.steps_taken;
    if world.state.inventory.is_empty() {
        let roll = pseudo_random(steps, world.rules.event_probability);
        if roll < world.rules.damage_threshold {
            lose_game(world, view, "A stone block drops from the ceiling. There was nothing to shield you.");
        } else {
            info!("trap missed the player (roll {roll})");
            view.push(ViewItem::TriggeredEvent(
                "A blade whistles past your ear and buries itself in the wall. You got lucky.".to_string(),
            ));
        }
    } else {
        let index = pseudo_random(steps, world.state.inventory.len());
        let lost = world.state.inventory.remove(index);
        info!("trap took '{lost}' from the player");
        view.push(ViewItem::ItemLost(lost));
    }
}

/// Maybe fire a random event. Called once after every successful move.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn random_event(world: &mut LabyrinthWorld, view: &mut View) -> Result<()> {
    let steps = world.state.steps_taken;
    if pseudo_random(steps, world.rules.event_probability) != 0 {
        return Ok(());
    }
    let Some(event) = RandomEvent::from_roll(pseudo_random(steps, RandomEvent::COUNT)) else {
        return Ok(());
    };
    info!("random event at step {steps}: {event:?}");

    match event {
        RandomEvent::FoundCoin => found_coin(world, view)?,
        RandomEvent::Rustle => {
            let msg = if world.state.has(ItemKind::Sword) {
                "Something rustles in the dark. You raise your sword and it scurries away."
            } else {
                "Something rustles in the dark, then goes quiet. You feel watched."
            };
            view.push(ViewItem::TriggeredEvent(msg.to_string()));
        },
        RandomEvent::TrapRoomHazard => {
            let armed = world.in_trap_room() && world.player_room_ref()?.has_puzzle();
            if armed && !world.state.has(ItemKind::Torch) {
                view.push(ViewItem::TriggeredEvent(
                    "The flagstone under your foot sinks with a click.".to_string(),
                ));
                trigger_trap(world, view);
            }
        },
    }
    Ok(())
}

fn found_coin(world: &mut LabyrinthWorld, view: &mut View) -> Result<()> {
    let coin = ItemKind::Coin.symbol();
    if world.state.contains_item(coin) || world.player_room_ref()?.contains_item(coin) {
        debug!("coin event skipped: a coin is already in play");
        return Ok(());
    }
    match world.rules.coin_policy {
        CoinPolicy::Collect => {
            world.state.add_item(coin);
            view.push(ViewItem::TriggeredEvent(
                "A coin glints on the floor. You pocket it.".to_string(),
            ));
        },
        CoinPolicy::Spawn => {
            world.player_room_mut()?.add_item(coin);
            view.push(ViewItem::TriggeredEvent(
                "A coin rolls out of a crack in the wall and comes to rest at your feet.".to_string(),
            ));
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{Puzzle, Room};
    use crate::world::{GameState, Outcome};

    fn world_in(room_id: &str) -> LabyrinthWorld {
        let mut world = LabyrinthWorld::new_empty();
        let mut trap = Room::new("trap_room", "Flagstones.");
        trap.puzzle = Some(Puzzle {
            question: "Say it.".into(),
            answer: "step step step".into(),
            alternates: Vec::new(),
            solved_text: String::new(),
            reward: None,
        });
        world.rooms.insert("trap_room".into(), trap);
        world.rooms.insert("hall".into(), Room::new("hall", "Echoes."));
        world.state = GameState::new(room_id);
        world
    }

    #[test]
    fn event_variants_cover_every_roll() {
        for roll in 0..RandomEvent::COUNT {
            assert!(RandomEvent::from_roll(roll).is_some());
        }
        assert!(RandomEvent::from_roll(RandomEvent::COUNT).is_none());
    }

    #[test]
    fn trap_room_without_torch_is_fatal_and_keeps_items() {
        let mut world = world_in("trap_room");
        world.state.inventory.push("sword".into());
        let mut view = View::new();
        trigger_trap(&mut world, &mut view);
        assert!(world.state.game_over);
        assert!(matches!(world.state.outcome, Some(Outcome::Lost { .. })));
        assert_eq!(world.state.inventory, vec!["sword".to_string()]);
        assert!(view.view_items().any(ViewItem::is_trap_sprung));
        assert!(view.view_items().any(ViewItem::is_game_lost));
    }

    #[test]
    fn torch_turns_fatal_trap_into_item_loss() {
        let mut world = world_in("trap_room");
        world.state.inventory = vec!["torch".into(), "sword".into()];
        world.state.steps_taken = 1; // pseudo_random(1, 2) == 1
        let mut view = View::new();
        trigger_trap(&mut world, &mut view);
        assert!(!world.state.game_over);
        assert_eq!(world.state.inventory, vec!["torch".to_string()]);
        assert!(view.view_items().any(|item| *item == ViewItem::ItemLost("sword".into())));
    }

    #[test]
    fn empty_hands_roll_for_damage() {
        // pseudo_random(1, 10) == 9: a near miss against the default threshold of 3
        let mut world = world_in("hall");
        world.state.steps_taken = 1;
        let mut view = View::new();
        trigger_trap(&mut world, &mut view);
        assert!(!world.state.game_over);
        assert!(view.view_items().any(ViewItem::is_triggered_event));

        // pseudo_random(2, 10) == 0: fatal
        let mut world = world_in("hall");
        world.state.steps_taken = 2;
        let mut view = View::new();
        trigger_trap(&mut world, &mut view);
        assert!(world.state.game_over);
    }

    #[test]
    fn coin_is_collected_or_spawned_per_policy() {
        let mut world = world_in("hall");
        let mut view = View::new();
        found_coin(&mut world, &mut view).unwrap();
        assert!(world.state.has(ItemKind::Coin));
        assert!(!world.rooms["hall"].has(ItemKind::Coin));

        let mut world = world_in("hall");
        world.rules.coin_policy = CoinPolicy::Spawn;
        let mut view = View::new();
        found_coin(&mut world, &mut view).unwrap();
        assert!(!world.state.has(ItemKind::Coin));
        assert!(world.rooms["hall"].has(ItemKind::Coin));

        // a second coin never appears while one is in play
        found_coin(&mut world, &mut view).unwrap();
        assert_eq!(world.rooms["hall"].items.len(), 1);
    }

    #[test]
    fn hazard_event_only_fires_in_armed_trap_room() {
        // event_probability 1 always fires; pseudo_random(1, 3) == 2 selects the hazard
        let mut world = world_in("trap_room");
        world.rules.event_probability = 1;
        world.rooms.get_mut("trap_room").unwrap().clear_puzzle();
        world.state.steps_taken = 1;
        let mut view = View::new();
        random_event(&mut world, &mut view).unwrap();
        assert!(!world.state.game_over, "a solved trap room is disarmed");

        let mut world = world_in("trap_room");
        world.rules.event_probability = 1;
        world.state.steps_taken = 1;
        let mut view = View::new();
        random_event(&mut world, &mut view).unwrap();
        assert!(world.state.game_over);
    }
}
