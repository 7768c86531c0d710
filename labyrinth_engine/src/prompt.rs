//! Follow-up questions asked in the middle of a command.
//!
//! `solve` needs an answer from the player before it can finish. Handlers ask
//! through a [`Prompter`] so the REPL can read from the terminal while tests
//! feed scripted answers.

use std::collections::VecDeque;

/// Something that can ask the player a question and wait for a line of input.
pub trait Prompter {
    /// Show `question` and return the player's reply, or `None` if input has ended.
    fn ask(&mut self, question: &str) -> Option<String>;
}

/// Replays a fixed list of answers and records every question asked.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedInput {
    fn ask(&mut self, question: &str) -> Option<String> {
        self.asked.push(question.to_string());
        self.answers.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_replays_in_order_then_ends() {
        let mut input = ScriptedInput::new(["yes", "10"]);
        assert_eq!(input.ask("Open it?").as_deref(), Some("yes"));
        assert_eq!(input.ask("Code?").as_deref(), Some("10"));
        assert_eq!(input.ask("Again?"), None);
        assert_eq!(input.asked, vec!["Open it?", "Code?", "Again?"]);
        assert_eq!(input.remaining(), 0);
    }
}
