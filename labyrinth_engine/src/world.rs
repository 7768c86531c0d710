//! Data structures representing the running game.
//!
//! This module defines [`LabyrinthWorld`], the single owned value every
//! engine operation receives, and [`GameState`], the player's side of it.

use crate::item::ItemHolder;
use crate::loader::help::HelpData;
use crate::loader::rules::GameRules;
use crate::room::Room;

use log::info;
use std::collections::HashMap;
use thiserror::Error;

/// Lookups into the room registry that should never fail once a world has been validated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("room '{0}' not found in world")]
    RoomNotFound(String),
}

/// How a finished session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost { cause: String },
    Quit,
}

/// The player's mutable record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub inventory: Vec<String>,
    pub current_room: String,
    pub steps_taken: usize,
    pub game_over: bool,
    pub outcome: Option<Outcome>,
}
impl ItemHolder for GameState {
    fn items(&self) -> &[String] {
        &self.inventory
    }

    fn items_mut(&mut self) -> &mut Vec<String> {
        &mut self.inventory
    }
}
impl GameState {
    /// Start a fresh session in the given room.
    pub fn new(start_room: impl Into<String>) -> Self {
        Self {
            current_room: start_room.into(),
            ..Self::default()
        }
    }

    /// End the session. Only the first outcome recorded sticks.
    pub fn finish(&mut self, outcome: Outcome) {
        if self.game_over {
            return;
        }
        info!("game over after {} steps: {outcome:?}", self.steps_taken);
        self.game_over = true;
        self.outcome = Some(outcome);
    }
}

/// Complete state of the running game.
///
/// Created by the loader and then mutated in place by the REPL handlers for the
/// rest of the session. Rooms are only reached through the accessors here.
#[derive(Debug, Clone, Default)]
pub struct LabyrinthWorld {
    pub title: String,
    pub intro: String,
    pub rooms: HashMap<String, Room>,
    pub state: GameState,
    pub rules: GameRules,
    pub help: HelpData,
}
impl LabyrinthWorld {
    /// Create a world with no rooms and default rules.
    pub fn new_empty() -> LabyrinthWorld {
        info!("new, empty 'LabyrinthWorld' created");
        Self::default()
    }

    /// Obtain a reference to any room by id.
    ///
    /// # Errors
    /// - if the room id is not in the registry
    pub fn room(&self, room_id: &str) -> Result<&Room, RegistryError> {
        self.rooms
            .get(room_id)
            .ok_or_else(|| RegistryError::RoomNotFound(room_id.to_string()))
    }

    /// Obtain a reference to the room the player occupies.
    ///
    /// # Errors
    /// - if the player's room id is not in the registry
    pub fn player_room_ref(&self) -> Result<&Room, RegistryError> {
        self.room(&self.state.current_room)
    }

    /// Obtain a mutable reference to the room the player occupies.
    ///
    /// # Errors
    /// - if the player's room id is not in the registry
    pub fn player_room_mut(&mut self) -> Result<&mut Room, RegistryError> {
        let id = &self.state.current_room;
        self.rooms
            .get_mut(id)
            .ok_or_else(|| RegistryError::RoomNotFound(id.clone()))
    }

    pub fn in_trap_room(&self) -> bool {
        self.state.current_room == self.rules.trap_room
    }

    pub fn in_treasure_room(&self) -> bool {
        self.state.current_room == self.rules.treasure_room
    }
}
