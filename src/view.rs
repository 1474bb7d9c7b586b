// src/view.rs - Plain frame model handed to the renderer each iteration

use crate::syntax::Token;

/// Columns taken by the line-number gutter (`"%4d "`).
pub const GUTTER_WIDTH: usize = 5;

pub const HINT: &str = " :w=Save :q=Quit :h=Help";

/// One visible buffer row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// 1-based line number.
    pub number: usize,
    pub text: String,
    pub tokens: Vec<Token>,
}

/// Content of the bottom line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BottomLine {
    /// A prompt being typed, including its leader (`:` or `Enter filename: `).
    Prompt(String),
    Message(String),
    Hint(String),
}

impl BottomLine {
    pub fn text(&self) -> &str {
        match self {
            BottomLine::Prompt(text) | BottomLine::Message(text) | BottomLine::Hint(text) => text,
        }
    }
}

/// Everything needed to paint one frame. The renderer performs no logic
/// beyond laying these out.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    /// One entry per text row; `None` for rows past the end of the buffer.
    pub rows: Vec<Option<RowView>>,
    pub status: String,
    pub modified: bool,
    pub bottom: BottomLine,
    /// Target cursor cell as `(x, y)` in screen coordinates.
    pub cursor: (usize, usize),
    pub help: bool,
}

impl Screen {
    pub fn status_row(&self) -> usize {
        self.rows.len()
    }

    pub fn bottom_row(&self) -> usize {
        self.rows.len() + 1
    }
}

pub fn format_status(
    mode: &str,
    grammar: &str,
    row: usize,
    col: usize,
    filename: Option<&str>,
    modified: bool,
) -> String {
    let mut status = format!(
        " {} | {} | Line {}, Col {} | {}",
        mode,
        grammar,
        row + 1,
        col + 1,
        filename.unwrap_or("[No Name]")
    );
    if modified {
        status.push_str(" [Modified]");
    }
    status
}
