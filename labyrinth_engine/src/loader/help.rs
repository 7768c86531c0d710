//! module `loader::help`
//!
//! The help screen: an intro paragraph from `help_basic.txt` and one
//! `[[command]]` table per command in `help_commands.toml`. Every usage line
//! and alias is run through the command parser at load time, so the help
//! never advertises a word the REPL would not understand.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;

use crate::command::{Command, parse_command};

/// One row of the help table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HelpEntry {
    /// How the command is typed, e.g. `take <item>`.
    pub usage: String,
    /// Other words that do the same thing.
    #[serde(default)]
    pub aliases: Vec<String>,
    pub summary: String,
}

impl HelpEntry {
    /// The usage keyword followed by the aliases.
    fn spellings(&self) -> impl Iterator<Item = &str> {
        self.usage
            .split_whitespace()
            .next()
            .into_iter()
            .chain(self.aliases.iter().map(String::as_str))
    }

    /// True if the parser knows every way this entry says to type the command.
    pub fn is_understood(&self) -> bool {
        let mut spellings = self.spellings().peekable();
        spellings.peek().is_some() && spellings.all(|word| parse_command(word) != Command::Unknown)
    }
}

#[derive(Deserialize)]
struct HelpFile {
    #[serde(rename = "command", default)]
    commands: Vec<HelpEntry>,
}

/// Everything `help` shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpData {
    pub basic_text: String,
    pub commands: Vec<HelpEntry>,
}

impl HelpData {
    /// Read both help files from the data directory. Entries the parser does
    /// not understand are logged and left out.
    ///
    /// # Errors
    /// - if either file is missing or the TOML is malformed
    pub fn load(dir: &Path) -> Result<HelpData> {
        let text_path = dir.join("help_basic.txt");
        let basic_text = fs::read_to_string(&text_path)
            .with_context(|| format!("reading help text from '{}'", text_path.display()))?
            .trim()
            .to_string();

        let table_path = dir.join("help_commands.toml");
        let table = fs::read_to_string(&table_path)
            .with_context(|| format!("reading help commands from '{}'", table_path.display()))?;
        let commands = parse_help_table(&table)
            .with_context(|| format!("parsing help commands from '{}'", table_path.display()))?;

        info!("help loaded: {} commands", commands.len());
        Ok(HelpData { basic_text, commands })
    }
}

fn parse_help_table(source: &str) -> Result<Vec<HelpEntry>> {
    let file: HelpFile = toml::from_str(source)?;
    Ok(file
        .commands
        .into_iter()
        .filter(|entry| {
            let keep = entry.is_understood();
            if !keep {
                warn!("help entry '{}' names a command the parser rejects; skipped", entry.usage);
            }
            keep
        })
        .collect())
}
