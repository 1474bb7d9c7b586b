// src/command.rs - Colon command interpreter

use crate::syntax::Grammar;
use thiserror::Error;

pub const HELP_TEXT: &[&str] = &[
    "Commands:",
    "    :w          - Save file",
    "    :w <file>   - Save as",
    "    :wq         - Save and quit",
    "    :q          - Quit",
    "    :q!         - Force quit without saving",
    "    :h          - Show this help",
    "    :c          - Set language to C",
    "    :p          - Set language to Python",
    "    :a          - Set language to Assembly",
    "    :n          - Set language to Plain Text",
    "",
    "Navigation:",
    "    Arrow Keys  - Move cursor",
    "    Home/End    - Start/end of line",
    "    i           - Enter insert mode",
    "    ESC         - Return to command mode",
    "",
    "Press any key to continue...",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Save, optionally under a new filename first.
    Write(Option<String>),
    WriteQuit,
    Quit,
    ForceQuit,
    Help,
    SetGrammar(Grammar),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),
}

impl Command {
    /// Parse the text typed after `:`, most specific prefix first.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let (head, arg) = match input.split_once(char::is_whitespace) {
            Some((head, arg)) => (head, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (input, None),
        };

        let command = if head == "wq" {
            Command::WriteQuit
        } else if head.starts_with("q!") {
            Command::ForceQuit
        } else if head.starts_with('w') {
            Command::Write(arg.map(str::to_string))
        } else if head.starts_with('q') {
            Command::Quit
        } else if head.starts_with('h') {
            Command::Help
        } else if head.starts_with('c') {
            Command::SetGrammar(Grammar::CLike)
        } else if head.starts_with('p') {
            Command::SetGrammar(Grammar::PyLike)
        } else if head.starts_with('a') {
            Command::SetGrammar(Grammar::AsmLike)
        } else if head.starts_with('n') {
            Command::SetGrammar(Grammar::Text)
        } else {
            return Err(CommandError::Unknown(input.to_string()));
        };
        Ok(command)
    }
}
