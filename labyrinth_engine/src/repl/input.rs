//! Terminal input for the labyrinth REPL.
//!
//! Lines come from rustyline when stdin is a terminal, with history kept
//! between sessions, and from plain stdin otherwise. Tab completes command
//! words, then directions after `go` and item names after `take` or `use`.
//!
//! Closing input ends the session: Ctrl-C and Ctrl-D (or end of a piped
//! script) both read as `quit`, including when they arrive while a handler
//! is waiting for an answer.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::{info, warn};
use pest_meta::ast::Expr;
use pest_meta::parser::{Rule as MetaRule, consume_rules, parse};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use textwrap::fill;

use crate::item::ItemKind;
use crate::prompt::Prompter;
use crate::style::{GameStyle, normal_block};

lazy_static! {
    static ref VERBS: Vec<String> = grammar_words(|rule| rule.starts_with("kw_"));
    static ref DIRECTIONS: Vec<String> = grammar_words(|rule| rule == "direction");
}

/// What one read from the player produced.
#[derive(Debug, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

impl InputEvent {
    /// The command line this event stands for. Input that was closed or
    /// interrupted becomes `quit`.
    pub fn into_command_line(self) -> String {
        match self {
            InputEvent::Line(line) => line,
            InputEvent::Eof | InputEvent::Interrupted => "quit".to_string(),
        }
    }
}

/// Keywords spelled out in the grammar rules picked by `select`, lower-cased.
/// Symbols like `?` are left out.
fn grammar_words(select: impl Fn(&str) -> bool) -> Vec<String> {
    let source = include_str!("../repl_grammar.pest");
    let rules = match parse(MetaRule::grammar_rules, source) {
        Ok(pairs) => consume_rules(pairs).map_err(|errors| format!("{} grammar errors", errors.len())),
        Err(err) => Err(err.to_string()),
    };
    let rules = match rules {
        Ok(rules) => rules,
        Err(err) => {
            warn!("command grammar unreadable, tab completion is off: {err}");
            return Vec::new();
        },
    };

    let mut words = Vec::new();
    for rule in rules.iter().filter(|rule| select(&rule.name)) {
        keyword_literals(&rule.expr, &mut words);
    }
    words.retain(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()));
    words.sort_unstable();
    words.dedup();
    words
}

// Keyword rules are alternations of literals followed by `word_end`.
fn keyword_literals(expr: &Expr, words: &mut Vec<String>) {
    match expr {
        Expr::Str(word) | Expr::Insens(word) => words.push(word.to_lowercase()),
        Expr::Seq(left, right) | Expr::Choice(left, right) => {
            keyword_literals(left, words);
            keyword_literals(right, words);
        },
        _ => {},
    }
}

/// Where the word under the cursor starts, and what could finish it.
fn completions(line: &str) -> (usize, Vec<String>) {
    let partial = line.len() - line.trim_end_matches(|c: char| !c.is_whitespace()).len();
    let start = line.len() - partial;
    let typed = line[start..].to_lowercase();

    let candidates: Vec<String> = match line[..start].split_whitespace().next() {
        None => VERBS.iter().chain(DIRECTIONS.iter()).cloned().collect(),
        Some(verb) => match verb.to_lowercase().as_str() {
            "go" => DIRECTIONS.clone(),
            "take" | "use" => ItemKind::ALL.iter().map(|kind| kind.symbol().to_string()).collect(),
            _ => Vec::new(),
        },
    };
    let mut matches: Vec<String> = candidates.into_iter().filter(|word| word.starts_with(&typed)).collect();
    matches.sort_unstable();
    (start, matches)
}

struct CommandCompleter;

impl Helper for CommandCompleter {}
impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = completions(&line[..pos]);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, pairs))
    }
}

type LineEditor = Editor<CommandCompleter, DefaultHistory>;

/// Reads commands and answers from the player.
pub struct InputManager {
    /// `None` means plain stdin, either because stdin is not a terminal or
    /// because the editor failed.
    editor: Option<LineEditor>,
    history: Option<PathBuf>,
    /// Set once input has been closed or interrupted; every later read is `Eof`.
    closed: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let history = history_file_path();
        let editor = if io::stdin().is_terminal() {
            match open_editor(history.as_deref()) {
                Ok(editor) => Some(editor),
                Err(err) => {
                    warn!("line editor unavailable ({err}); reading plain stdin");
                    None
                },
            }
        } else {
            info!("stdin is not a terminal; reading plain stdin");
            None
        };
        Self {
            editor,
            history,
            closed: false,
        }
    }

    /// Read one line. If the line editor fails, drop to plain stdin for this
    /// and every later read.
    ///
    /// # Errors
    /// - if stdin itself cannot be read
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        if self.closed {
            return Ok(InputEvent::Eof);
        }
        let read = self.editor.as_mut().map(|editor| {
            let read = editor.readline(prompt);
            if let Ok(line) = &read {
                remember(editor, self.history.as_deref(), line);
            }
            read
        });
        let event = match read {
            Some(Ok(line)) => InputEvent::Line(line),
            Some(Err(err)) => match readline_event(err) {
                Ok(event) => event,
                Err(err) => {
                    warn!("line editor failed ({err}); switching to plain stdin");
                    self.editor = None;
                    read_stdin_line(prompt)?
                },
            },
            None => read_stdin_line(prompt)?,
        };
        if !matches!(event, InputEvent::Line(_)) {
            info!("input closed");
            self.closed = true;
        }
        Ok(event)
    }
}

impl Prompter for InputManager {
    fn ask(&mut self, question: &str) -> Option<String> {
        println!("\n{}", fill(question, normal_block()).hint_style());
        match self.read_line(&"answer> ".prompt_style().to_string()) {
            Ok(InputEvent::Line(line)) => Some(line.trim().to_string()),
            Ok(InputEvent::Eof | InputEvent::Interrupted) => None,
            Err(err) => {
                warn!("could not read an answer: {err}");
                None
            },
        }
    }
}

fn open_editor(history: Option<&Path>) -> Result<LineEditor, ReadlineError> {
    let mut editor = LineEditor::new()?;
    editor.set_helper(Some(CommandCompleter));
    if let Some(path) = history {
        if let Some(dir) = path.parent()
            && let Err(err) = fs::create_dir_all(dir)
        {
            warn!("cannot create history directory {}: {err}", dir.display());
        }
        match editor.load_history(path) {
            Ok(()) => info!("command history loaded from {}", path.display()),
            Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {},
            Err(err) => warn!("cannot load history from {}: {err}", path.display()),
        }
    }
    Ok(editor)
}

fn remember(editor: &mut LineEditor, history: Option<&Path>, line: &str) {
    if line.trim().is_empty() {
        return;
    }
    if let Err(err) = editor.add_history_entry(line) {
        warn!("cannot add to history: {err}");
    }
    if let Some(path) = history
        && let Err(err) = editor.save_history(path)
    {
        warn!("cannot save history to {}: {err}", path.display());
    }
}

fn read_stdin_line(prompt: &str) -> io::Result<InputEvent> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(InputEvent::Eof);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(InputEvent::Line(line))
}

/// Ctrl-C and Ctrl-D are events; anything else from the editor is an error.
fn readline_event(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(err) => Err(err),
        other => Err(io::Error::other(other)),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| history_path_in(&base))
}

fn history_path_in(base: &Path) -> PathBuf {
    base.join("labyrinth").join("history.txt")
}
