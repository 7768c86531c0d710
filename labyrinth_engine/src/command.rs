//! Command module
//!
//! Describes possible commands used during gameplay and parses a line of
//! player input into one, using the pest grammar in `repl_grammar.pest`.

use pest::Parser;
use pest_derive::Parser as PestParser;

#[derive(PestParser)]
#[grammar = "src/repl_grammar.pest"]
struct CommandParser;

/// Verbs that need an argument to do anything.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verb {
    Go,
    Take,
    Use,
}

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Help,
    /// A verb typed without the argument it needs.
    Incomplete(Verb),
    Inventory,
    Look,
    Quit,
    Solve,
    Take(String),
    Unknown,
    Use(String),
}

/// Parses an input string and returns a corresponding `Command`.
///
/// Keywords are case-insensitive and arguments are lower-cased. Item
/// arguments have inner spaces folded to underscores ("rusty key" -> "rusty_key").
pub fn parse_command(input: &str) -> Command {
    let Ok(mut pairs) = CommandParser::parse(Rule::command, input.trim()) else {
        return Command::Unknown;
    };
    let Some(cmd) = pairs.next().and_then(|command| command.into_inner().next()) else {
        return Command::Unknown;
    };
    let rule = cmd.as_rule();
    let text = cmd.as_str().to_lowercase();
    let arg = cmd
        .into_inner()
        .find(|pair| pair.as_rule() == Rule::rest)
        .map(|pair| pair.as_str().trim().to_lowercase())
        .filter(|arg| !arg.is_empty());

    match rule {
        Rule::go_cmd => arg.map_or(Command::Incomplete(Verb::Go), Command::Go),
        Rule::take_cmd => arg.map_or(Command::Incomplete(Verb::Take), |a| Command::Take(item_symbol(&a))),
        Rule::use_cmd => arg.map_or(Command::Incomplete(Verb::Use), |a| Command::Use(item_symbol(&a))),
        Rule::look_cmd => Command::Look,
        Rule::inventory_cmd => Command::Inventory,
        Rule::solve_cmd => Command::Solve,
        Rule::help_cmd => Command::Help,
        Rule::quit_cmd => Command::Quit,
        Rule::bare_move => Command::Go(text),
        _ => Command::Unknown,
    }
}

fn item_symbol(arg: &str) -> String {
    arg.split_whitespace().collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_movement() {
        assert_eq!(parse_command("go north"), Command::Go("north".into()));
        assert_eq!(parse_command("  GO   West "), Command::Go("west".into()));
        assert_eq!(parse_command("south"), Command::Go("south".into()));
        assert_eq!(parse_command("go"), Command::Incomplete(Verb::Go));
    }

    #[test]
    fn parses_item_commands() {
        assert_eq!(parse_command("take torch"), Command::Take("torch".into()));
        assert_eq!(parse_command("take Rusty Key"), Command::Take("rusty_key".into()));
        assert_eq!(parse_command("use bronze_box"), Command::Use("bronze_box".into()));
        assert_eq!(parse_command("take"), Command::Incomplete(Verb::Take));
        assert_eq!(parse_command("use"), Command::Incomplete(Verb::Use));
    }

    #[test]
    fn parses_simple_commands_and_aliases() {
        assert_eq!(parse_command("look"), Command::Look);
        assert_eq!(parse_command("LOOK around"), Command::Look);
        assert_eq!(parse_command("inventory"), Command::Inventory);
        assert_eq!(parse_command("inv"), Command::Inventory);
        assert_eq!(parse_command("solve"), Command::Solve);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("exit"), Command::Quit);
    }

    #[test]
    fn rejects_unknown_and_partial_words() {
        for line in ["dance", "goat", "inventoryx", ""] {
            assert_eq!(parse_command(line), Command::Unknown, "'{line}' should not parse");
        }
    }
}
