use crate::syntax::Grammar;
use log::trace;
use std::ops::Range;

/// Punctuation classified as [`TokenKind::Symbol`].
pub const SYMBOLS: &[u8] = b"{}()[];:=+-*/%&|^~!<>";
/// Only reaches the symbol rule in grammars where it does not start a comment.
const HASH: u8 = b'#';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Register,
    StringLiteral,
    NumberLiteral,
    Comment,
    Symbol,
    Plain,
    Whitespace,
}

/// A classified byte span of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.range()]
    }
}

/// Split `line` into tokens under `grammar`.
///
/// The tokens are ordered, never overlap, and together cover every byte of
/// the line. This never fails: anything unrecognised is [`TokenKind::Plain`].
pub fn tokenize(line: &str, grammar: Grammar) -> Vec<Token> {
    let rules = grammar.rules();
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        let rest = &line[i..];
        let kind = if bytes[i].is_ascii_whitespace() {
            i += run_len(rest, |b| b.is_ascii_whitespace());
            TokenKind::Whitespace
        } else if !grammar.highlights() {
            i += run_len(rest, |b| !b.is_ascii_whitespace());
            TokenKind::Plain
        } else if let Some(len) = match_word(rest, rules.keywords) {
            i += len;
            TokenKind::Keyword
        } else if let Some(len) = match_word(rest, rules.registers) {
            i += len;
            TokenKind::Register
        } else if bytes[i] == b'"' || bytes[i] == b'\'' {
            i += string_len(rest);
            TokenKind::StringLiteral
        } else if bytes[i].is_ascii_digit() {
            i += run_len(rest, |b| b.is_ascii_hexdigit() || b == b'.' || b == b'x');
            TokenKind::NumberLiteral
        } else if rules
            .comment_markers
            .iter()
            .any(|marker| rest.starts_with(marker))
        {
            i = bytes.len();
            TokenKind::Comment
        } else if SYMBOLS.contains(&bytes[i]) || bytes[i] == HASH {
            i += 1;
            TokenKind::Symbol
        } else {
            i += rest.chars().next().map_or(1, char::len_utf8);
            TokenKind::Plain
        };
        tokens.push(Token {
            kind,
            start,
            end: i,
        });
    }

    trace!("tokenized {} bytes into {} tokens", bytes.len(), tokens.len());
    tokens
}

/// Length of the first word in `words` that `text` starts with and that is
/// not immediately followed by an alphanumeric character.
fn match_word(text: &str, words: &[&str]) -> Option<usize> {
    words
        .iter()
        .find(|word| {
            text.starts_with(*word)
                && !matches!(text.as_bytes().get(word.len()), Some(b) if b.is_ascii_alphanumeric())
        })
        .map(|word| word.len())
}

/// Length of a quoted literal starting at `text[0]`, through the closing
/// delimiter or end of line.
fn string_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let delim = bytes[0];
    match bytes[1..].iter().position(|&b| b == delim) {
        Some(pos) => pos + 2,
        None => bytes.len(),
    }
}

fn run_len(text: &str, pred: impl Fn(u8) -> bool) -> usize {
    let len = text.bytes().take_while(|&b| pred(b)).count();
    // Keep spans on char boundaries even for text outside the ASCII model.
    let mut end = len;
    while !text.is_char_boundary(end) {
        end += 1;
    }
    end.max(1)
}
