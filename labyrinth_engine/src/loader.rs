//! Loader utilities for building a `LabyrinthWorld` from serialized data.
//!
//! Rooms come from `world.ron` (RON). Game rules and help text are TOML/text
//! side files in the same data directory.

pub mod help;
pub mod rules;
pub mod worlddef;

use crate::data_paths::data_root;
use crate::loader::help::HelpData;
use crate::loader::rules::load_rules;
use crate::loader::worlddef::{build_world_from_def, load_worlddef};
use crate::world::LabyrinthWorld;

use anyhow::{Context, Result, bail};
use labyrinth_data::WorldDef;
use log::info;
use std::path::Path;

/// Load the `LabyrinthWorld` from the detected data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or world validation.
pub fn load_world() -> Result<LabyrinthWorld> {
    load_world_from(data_root())
}

/// Load the `LabyrinthWorld` from a specific data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or world validation.
pub fn load_world_from(dir: &Path) -> Result<LabyrinthWorld> {
    info!("loading world data from '{}'", dir.display());
    let worlddef = load_worlddef(&dir.join("world.ron")).context("while loading worlddef from file")?;
    validate_worlddef(&worlddef)?;

    let mut world = build_world_from_def(&worlddef);
    info!("{} rooms added to LabyrinthWorld", world.rooms.len());

    world.rules = load_rules(&dir.join("rules.toml"));
    for (role, room_id) in [("trap", &world.rules.trap_room), ("treasure", &world.rules.treasure_room)] {
        if !world.rooms.contains_key(room_id) {
            bail!("rules.toml names {role} room '{room_id}', which is not in the world");
        }
    }

    world.help = HelpData::load(dir).context("while loading help data")?;

    info!("player starts in '{}'", world.state.current_room);
    Ok(world)
}

/// Validate the `WorldDef` and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = labyrinth_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}
