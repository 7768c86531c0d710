//! Room definitions.
//!
//! Every location in the labyrinth is a `Room`. Rooms are created once at load
//! time and then mutated in place for the rest of the session: items come and
//! go, puzzles get cleared and wrong answers are counted.

use crate::item::ItemHolder;
use crate::view::{View, ViewItem};

use std::collections::BTreeMap;

/// A question guarding a room, with every spelling of the answer that counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub question: String,
    pub answer: String,
    pub alternates: Vec<String>,
    pub solved_text: String,
    pub reward: Option<String>,
}
impl Puzzle {
    /// Case-insensitive check against the answer and any registered alternates.
    pub fn accepts(&self, response: &str) -> bool {
        let response = response.trim().to_lowercase();
        std::iter::once(&self.answer)
            .chain(&self.alternates)
            .any(|candidate| candidate.trim().to_lowercase() == response)
    }

    /// Case-insensitive check against the canonical answer only.
    pub fn matches_exactly(&self, response: &str) -> bool {
        response.trim().to_lowercase() == self.answer.trim().to_lowercase()
    }
}

/// Any visitable location in the labyrinth.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub description: String,
    pub exits: BTreeMap<String, String>,
    pub items: Vec<String>,
    pub puzzle: Option<Puzzle>,
    pub puzzle_attempts: u32,
    pub entry_requires: Option<String>,
}
impl ItemHolder for Room {
    fn items(&self) -> &[String] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut Vec<String> {
        &mut self.items
    }
}
impl Room {
    /// Create an empty room with no exits, items, or puzzle.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.to_uppercase(),
            id,
            description: description.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
            puzzle: None,
            puzzle_attempts: 0,
            entry_requires: None,
        }
    }

    /// Find the destination for a direction, ignoring case.
    pub fn exit_to(&self, direction: &str) -> Option<&str> {
        let lc = direction.trim().to_lowercase();
        self.exits
            .iter()
            .find(|(dir, _)| dir.to_lowercase() == lc)
            .map(|(_, to)| to.as_str())
    }

    pub fn has_puzzle(&self) -> bool {
        self.puzzle.is_some()
    }

    /// Clear the puzzle for good and reset the attempt counter.
    /// Returns the puzzle that was cleared, if any.
    pub fn clear_puzzle(&mut self) -> Option<Puzzle> {
        self.puzzle_attempts = 0;
        self.puzzle.take()
    }

    /// Pushes the full description, items, exits and puzzle hint for the room.
    pub fn show(&self, view: &mut View) {
        view.push(ViewItem::RoomDescription {
            name: self.name.clone(),
            description: self.description.clone(),
        });
        if !self.items.is_empty() {
            view.push(ViewItem::RoomItems(self.items.clone()));
        }
        if !self.exits.is_empty() {
            view.push(ViewItem::RoomExits(self.exits.keys().cloned().collect()));
        }
        if self.has_puzzle() {
            view.push(ViewItem::RoomPuzzleHint);
        }
    }
}
