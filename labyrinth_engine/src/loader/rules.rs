//! Game rule configuration and loader.
//!
//! The tunable parts of the trap and event systems live in `rules.toml`.
//! Every field has a default, so a partial file is fine and a missing or
//! broken file falls back to [`GameRules::default`].

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Whether an unsolved puzzle stops the player picking up items in its room.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickupPolicy {
    /// Pickup blocked while the room's puzzle is active.
    Guarded,
    #[default]
    Unguarded,
}

/// What the "found a coin" random event does with the coin.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinPolicy {
    /// Coin goes straight into the inventory.
    #[default]
    Collect,
    /// Coin is left in the room for the player to take.
    Spawn,
}

/// Tunable rules for traps, events and puzzles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Room whose trap is fatal without a torch.
    pub trap_room: String,
    /// Room holding the chest; `solve` there opens the chest instead of a puzzle.
    pub treasure_room: String,
    /// Denominator `N` of the 1-in-N random event roll, also used for trap damage rolls.
    pub event_probability: usize,
    /// Damage rolls below this value kill an empty-handed player.
    pub damage_threshold: usize,
    /// Wrong answers allowed before the labyrinth claims the player.
    pub max_puzzle_attempts: u32,
    pub pickup_policy: PickupPolicy,
    pub coin_policy: CoinPolicy,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            trap_room: "trap_room".to_string(),
            treasure_room: "treasure_room".to_string(),
            event_probability: 10,
            damage_threshold: 3,
            max_puzzle_attempts: 3,
            pickup_policy: PickupPolicy::Unguarded,
            coin_policy: CoinPolicy::Collect,
        }
    }
}

/// Loads game rules from a TOML file, falling back to defaults on error.
///
/// This never fails. A `warn!` is logged when the file cannot be read or parsed.
pub fn load_rules(toml_path: &Path) -> GameRules {
    match try_load_rules(toml_path) {
        Ok(rules) => {
            info!("game rules loaded from '{}': {rules:?}", toml_path.display());
            rules
        },
        Err(e) => {
            warn!(
                "Could not load game rules from '{}': {e:#}. Using hardcoded defaults.",
                toml_path.display()
            );
            GameRules::default()
        },
    }
}

/// Attempts to load game rules from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or holds a zero
/// event probability.
fn try_load_rules(toml_path: &Path) -> Result<GameRules> {
    let text =
        fs::read_to_string(toml_path).with_context(|| format!("reading game rules from '{}'", toml_path.display()))?;
    parse_rules(&text).with_context(|| format!("parsing game rules from '{}'", toml_path.display()))
}

/// Parse rules from TOML text.
///
/// # Errors
/// Returns an error on malformed TOML or a zero `event_probability`.
pub fn parse_rules(text: &str) -> Result<GameRules> {
    let rules: GameRules = toml::from_str(text)?;
    anyhow::ensure!(rules.event_probability > 0, "event_probability must be at least 1");
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let rules = parse_rules("max_puzzle_attempts = 5\npickup_policy = \"guarded\"\n").unwrap();
        assert_eq!(rules.max_puzzle_attempts, 5);
        assert_eq!(rules.pickup_policy, PickupPolicy::Guarded);
        assert_eq!(rules.event_probability, 10);
        assert_eq!(rules.coin_policy, CoinPolicy::Collect);
        assert_eq!(rules.trap_room, "trap_room");
    }

    #[test]
    fn zero_event_probability_is_rejected() {
        assert!(parse_rules("event_probability = 0").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let rules = load_rules(Path::new("definitely/not/here/rules.toml"));
        assert_eq!(rules, GameRules::default());
    }

    #[test]
    fn loads_rules_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "coin_policy = \"spawn\"\ndamage_threshold = 5").unwrap();
        let rules = load_rules(file.path());
        assert_eq!(rules.coin_policy, CoinPolicy::Spawn);
        assert_eq!(rules.damage_threshold, 5);
    }

    #[test]
    fn bad_toml_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "event_probability = \"often\"").unwrap();
        assert_eq!(load_rules(file.path()), GameRules::default());
    }
}
