#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Labyrinth **
//! A small treasure-hunt text adventure: rooms, riddles, traps and a locked chest.

pub const LABYRINTH_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod item;
pub mod loader;
pub mod prompt;
pub mod repl;
pub mod rng;
pub mod room;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use command::{Command, parse_command};
pub use item::{ItemHolder, ItemKind};
pub use loader::{load_world, load_world_from};
pub use prompt::{Prompter, ScriptedInput};
pub use repl::{dispatch, run_repl};
pub use room::{Puzzle, Room};
pub use view::{View, ViewItem};
pub use world::{GameState, LabyrinthWorld, Outcome};
