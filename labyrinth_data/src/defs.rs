use serde::{Deserialize, Serialize};

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    pub start_room: Id,
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    /// Display title. The engine falls back to the upper-cased id when absent.
    #[serde(default)]
    pub name: Option<String>,
    pub desc: String,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
    #[serde(default)]
    pub items: Vec<Id>,
    #[serde(default)]
    pub puzzle: Option<PuzzleDef>,
    /// Item the player must carry to enter this room.
    #[serde(default)]
    pub entry_requires: Option<Id>,
}

/// Exit metadata for room navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: String,
    pub to: Id,
}

/// A question/answer pair gating a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleDef {
    pub question: String,
    pub answer: String,
    /// Other spellings accepted for the answer (e.g. "ten" for "10").
    #[serde(default)]
    pub alternates: Vec<String>,
    #[serde(default)]
    pub solved_text: String,
    /// Item placed in the room when the puzzle is solved.
    #[serde(default)]
    pub reward: Option<Id>,
}
