//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into runtime engine structs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use labyrinth_data::{PuzzleDef, RoomDef, WorldDef};

use crate::room::{Puzzle, Room};
use crate::world::{GameState, LabyrinthWorld};

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - on file IO error or RON parsing error
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    parse_worlddef(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))
}

/// Parse a `WorldDef` from RON text.
///
/// # Errors
/// - on RON syntax or shape errors
pub fn parse_worlddef(text: &str) -> Result<WorldDef> {
    Ok(ron::from_str(text)?)
}

/// Convert a `WorldDef` into a populated `LabyrinthWorld` (rules and help are loaded separately).
pub fn build_world_from_def(def: &WorldDef) -> LabyrinthWorld {
    let mut world = LabyrinthWorld::new_empty();
    world.title.clone_from(&def.game.title);
    world.intro.clone_from(&def.game.intro);

    for room_def in &def.rooms {
        let room = room_from_def(room_def);
        world.rooms.insert(room.id.clone(), room);
    }

    world.state = GameState::new(def.game.start_room.clone());
    world
}

fn room_from_def(def: &RoomDef) -> Room {
    Room {
        id: def.id.clone(),
        name: def.name.clone().unwrap_or_else(|| def.id.to_uppercase()),
        description: def.desc.clone(),
        exits: def
            .exits
            .iter()
            .map(|exit| (exit.direction.to_lowercase(), exit.to.clone()))
            .collect(),
        items: def.items.clone(),
        puzzle: def.puzzle.as_ref().map(puzzle_from_def),
        puzzle_attempts: 0,
        entry_requires: def.entry_requires.clone(),
    }
}

fn puzzle_from_def(def: &PuzzleDef) -> Puzzle {
    Puzzle {
        question: def.question.clone(),
        answer: def.answer.clone(),
        alternates: def.alternates.clone(),
        solved_text: def.solved_text.clone(),
        reward: def.reward.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_WORLD: &str = r#"(
        game: (title: "Small", intro: "Hi.", start_room: "entrance"),
        rooms: [
            (
                id: "entrance",
                desc: "A doorway.",
                exits: [(direction: "North", to: "hall")],
                items: ["torch"],
            ),
            (
                id: "hall",
                name: Some("Great Hall"),
                desc: "Echoes.",
                exits: [(direction: "south", to: "entrance")],
                entry_requires: Some("rusty_key"),
                puzzle: Some((question: "After nine?", answer: "10", alternates: ["ten"], reward: Some("treasure_key"))),
            ),
        ],
    )"#;

    #[test]
    fn builds_rooms_and_start_state() {
        let def = parse_worlddef(SMALL_WORLD).unwrap();
        let world = build_world_from_def(&def);
        assert_eq!(world.title, "Small");
        assert_eq!(world.state.current_room, "entrance");
        assert_eq!(world.state.steps_taken, 0);
        assert!(world.state.inventory.is_empty());

        let entrance = world.room("entrance").unwrap();
        assert_eq!(entrance.name, "ENTRANCE");
        assert_eq!(entrance.exit_to("north"), Some("hall"));
        assert_eq!(entrance.items, vec!["torch".to_string()]);

        let hall = world.room("hall").unwrap();
        assert_eq!(hall.name, "Great Hall");
        assert_eq!(hall.entry_requires.as_deref(), Some("rusty_key"));
        let puzzle = hall.puzzle.as_ref().unwrap();
        assert!(puzzle.accepts("TEN"));
        assert_eq!(puzzle.reward.as_deref(), Some("treasure_key"));
    }

    #[test]
    fn bad_ron_is_an_error() {
        assert!(parse_worlddef("(game: )").is_err());
    }
}
