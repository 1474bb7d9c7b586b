pub mod highlighter;
pub mod language;

pub use highlighter::{Token, TokenKind, tokenize};
pub use language::{GrammarRules, IndentRule};

/// Grammar selected for highlighting and auto-indent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Grammar {
    #[default]
    Text,
    CLike,
    PyLike,
    AsmLike,
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
