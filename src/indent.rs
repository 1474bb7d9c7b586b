// src/indent.rs - Smart indentation for new lines

use crate::syntax::{Grammar, IndentRule};

pub const DEFAULT_INDENT_WIDTH: usize = 4;

#[derive(Debug)]
pub struct IndentationEngine {
    pub indent_width: usize,
    rule: IndentRule,
}

impl IndentationEngine {
    pub fn new(grammar: Grammar) -> Self {
        Self::with_width(grammar, DEFAULT_INDENT_WIDTH)
    }

    pub fn with_width(grammar: Grammar, indent_width: usize) -> Self {
        Self {
            indent_width,
            rule: grammar.rules().indent,
        }
    }

    /// Indent for the line created when `source` is split by Enter.
    ///
    /// `source` is the content of the line before the split.
    pub fn indent_for(&self, source: &str) -> usize {
        let base = leading_spaces(source);
        match self.rule {
            IndentRule::None => 0,
            IndentRule::Colon => {
                if source.trim_end().ends_with(':') {
                    base + self.indent_width
                } else {
                    base
                }
            }
            IndentRule::Braces => {
                let mut indent = base;
                if source.contains('{') {
                    indent += self.indent_width;
                }
                if source.contains('}') && indent >= self.indent_width {
                    indent -= self.indent_width;
                }
                indent
            }
        }
    }

    /// Text of the new line: the indent followed by the left-trimmed remainder.
    pub fn indented_line(&self, indent: usize, remainder: &str) -> String {
        format!("{}{}", self.create_indent_string(indent), remainder.trim_start())
    }

    pub fn create_indent_string(&self, columns: usize) -> String {
        " ".repeat(columns)
    }
}

/// Count of leading space characters.
pub fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}
