//! Shared data model for Labyrinth content.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_world};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_defaults_fill_optional_fields() {
        let src = r#"(
            game: (title: "T", start_room: "entrance"),
            rooms: [
                (id: "entrance", desc: "Dark.", exits: [(direction: "north", to: "entrance")]),
            ],
        )"#;
        let def: WorldDef = ron::from_str(src).expect("world parses");
        let room = &def.rooms[0];
        assert!(room.name.is_none());
        assert!(room.items.is_empty());
        assert!(room.puzzle.is_none());
        assert!(room.entry_requires.is_none());
        assert!(def.game.intro.is_empty());
    }

    #[test]
    fn puzzle_alternates_default_empty() {
        let src = r#"(question: "Q?", answer: "10")"#;
        let puzzle: PuzzleDef = ron::from_str(src).expect("puzzle parses");
        assert!(puzzle.alternates.is_empty());
        assert!(puzzle.reward.is_none());
    }
}
