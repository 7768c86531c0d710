use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    DuplicatePlacement { item: String, first: String, second: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::DuplicatePlacement { item, first, second } => {
                write!(f, "item '{item}' placed in both '{first}' and '{second}'")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// ```
/// use labyrinth_data::{ExitDef, GameDef, RoomDef, WorldDef, validate_world};
///
/// let room = |id: &str, to: &str| RoomDef {
///     id: id.into(),
///     name: None,
///     desc: "A room.".into(),
///     exits: vec![ExitDef { direction: "north".into(), to: to.into() }],
///     items: Vec::new(),
///     puzzle: None,
///     entry_requires: None,
/// };
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         intro: String::new(),
///         start_room: "a".into(),
///     },
///     rooms: vec![room("a", "b"), room("b", "a")],
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    for room in &world.rooms {
        if !rooms.insert(room.id.as_str()) {
            errors.push(ValidationError::DuplicateId {
                kind: "room",
                id: room.id.clone(),
            });
        }
    }

    if world.game.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game start room missing".to_string(),
        });
    } else {
        check_ref(
            "room",
            &world.game.start_room,
            &rooms,
            "game start room".to_string(),
            &mut errors,
        );
    }

    // item id -> where it was first placed
    let mut placements: HashMap<&str, String> = HashMap::new();

    for room in &world.rooms {
        for exit in &room.exits {
            check_ref(
                "room",
                &exit.to,
                &rooms,
                format!("exit '{}' from room '{}'", exit.direction, room.id),
                &mut errors,
            );
            if exit.direction.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("blank exit direction in room '{}'", room.id),
                });
            }
        }

        for item in &room.items {
            place(&mut placements, item, room.id.clone(), &mut errors);
        }

        if let Some(puzzle) = &room.puzzle {
            // a reward appears in the room once the puzzle is solved
            if let Some(reward) = &puzzle.reward {
                place(&mut placements, reward, format!("{} (puzzle reward)", room.id), &mut errors);
            }
            if puzzle.question.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("puzzle in room '{}' has no question", room.id),
                });
            }
            if puzzle.answer.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("puzzle in room '{}' has no answer", room.id),
                });
            }
        }
    }

    errors
}

fn place<'a>(
    placements: &mut HashMap<&'a str, String>,
    item: &'a str,
    location: String,
    errors: &mut Vec<ValidationError>,
) {
    match placements.entry(item) {
        Entry::Occupied(first) => errors.push(ValidationError::DuplicatePlacement {
            item: item.to_string(),
            first: first.get().clone(),
            second: location,
        }),
        Entry::Vacant(slot) => {
            slot.insert(location);
        },
    }
}

fn check_ref(
    kind: &'static str,
    id: &str,
    known: &HashSet<&str>,
    context: String,
    errors: &mut Vec<ValidationError>,
) {
    if !known.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str) -> RoomDef {
        RoomDef {
            id: id.into(),
            name: None,
            desc: format!("The {id}."),
            exits: Vec::new(),
            items: Vec::new(),
            puzzle: None,
            entry_requires: None,
        }
    }

    fn world(rooms: Vec<RoomDef>) -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Test".into(),
                intro: String::new(),
                start_room: "entrance".into(),
            },
            rooms,
        }
    }

    #[test]
    fn missing_start_room_is_reported() {
        let errors = validate_world(&world(vec![room("hall")]));
        assert_eq!(
            errors,
            vec![ValidationError::MissingReference {
                kind: "room",
                id: "entrance".into(),
                context: "game start room".into(),
            }]
        );
    }

    #[test]
    fn dangling_exit_is_reported() {
        let mut entrance = room("entrance");
        entrance.exits.push(ExitDef {
            direction: "north".into(),
            to: "nowhere".into(),
        });
        let errors = validate_world(&world(vec![entrance]));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("nowhere"));
    }

    #[test]
    fn item_placed_twice_is_reported() {
        let mut entrance = room("entrance");
        entrance.items.push("torch".into());
        let mut hall = room("hall");
        hall.items.push("torch".into());
        let errors = validate_world(&world(vec![entrance, hall]));
        assert_eq!(
            errors,
            vec![ValidationError::DuplicatePlacement {
                item: "torch".into(),
                first: "entrance".into(),
                second: "hall".into(),
            }]
        );
    }

    #[test]
    fn reward_already_placed_in_a_room_is_reported() {
        let mut entrance = room("entrance");
        entrance.items.push("torch".into());
        let mut hall = room("hall");
        hall.puzzle = Some(PuzzleDef {
            question: "Which way is up?".into(),
            answer: "a".into(),
            alternates: Vec::new(),
            solved_text: String::new(),
            reward: Some("torch".into()),
        });
        let errors = validate_world(&world(vec![entrance, hall]));
        assert_eq!(
            errors,
            vec![ValidationError::DuplicatePlacement {
                item: "torch".into(),
                first: "entrance".into(),
                second: "hall (puzzle reward)".into(),
            }]
        );
    }

    #[test]
    fn duplicate_room_and_blank_answer_are_reported() {
        let mut hall = room("hall");
        hall.puzzle = Some(PuzzleDef {
            question: "What comes after nine?".into(),
            answer: "  ".into(),
            alternates: Vec::new(),
            solved_text: String::new(),
            reward: None,
        });
        let errors = validate_world(&world(vec![room("entrance"), hall, room("entrance")]));
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| matches!(e, ValidationError::DuplicateId { .. })));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidValue { .. })));
    }
}
