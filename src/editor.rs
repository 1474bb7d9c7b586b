// src/editor.rs - Modal editor state machine

use crate::buffer::{Buffer, MAX_LINE_LEN, MAX_LINES};
use crate::command::Command;
use crate::config::EditorConfig;
use crate::cursor::Cursor;
use crate::indent::IndentationEngine;
use crate::key::Key;
use crate::mode::Mode;
use crate::persistence;
use crate::syntax::{Grammar, tokenize};
use crate::view::{BottomLine, GUTTER_WIDTH, HINT, RowView, Screen, format_status};
use crate::viewport::Viewport;
use log::{debug, info, warn};

pub const UNSAVED_WARNING: &str = "Unsaved changes! Use :q! to force quit.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Colon command line.
    Command,
    /// Filename for a save with no filename set.
    Filename { quit_after: bool },
}

/// Line of text being collected on the bottom line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    pub fn leader(&self) -> &'static str {
        match self.kind {
            PromptKind::Command => ":",
            PromptKind::Filename { .. } => "Enter filename: ",
        }
    }

    pub fn display(&self) -> String {
        format!("{}{}", self.leader(), self.input)
    }
}

pub struct Editor {
    pub buffer: Buffer,
    pub cursor: Cursor,
    pub viewport: Viewport,
    pub mode: Mode,
    pub grammar: Grammar,
    pub filename: Option<String>,
    pub prompt: Option<Prompt>,
    /// Transient message, cleared by the next key event.
    pub message: Option<String>,
    pub show_help: bool,
    indent_width: usize,
    show_hint: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            buffer: Buffer::new(),
            cursor: Cursor::new(),
            viewport: Viewport::new(20),
            mode: Mode::Command,
            grammar: Grammar::Text,
            filename: None,
            prompt: None,
            message: None,
            show_help: false,
            indent_width: config.indent_width,
            show_hint: config.show_hint,
        }
    }

    /// Load `path` into the buffer and select the grammar from its extension.
    ///
    /// A missing file gives an empty buffer. An unreadable file also gives an
    /// empty buffer, with the failure reported as the transient message; the
    /// filename is kept either way.
    pub fn open(&mut self, path: &str) {
        self.set_filename(path);
        self.buffer = match persistence::load_buffer(path) {
            Ok(buffer) => buffer,
            Err(err) => {
                warn!("failed to open {}", err);
                self.message = Some(format!("Could not open file: {}", path));
                Buffer::new()
            }
        };
        self.cursor = Cursor::new();
        self.viewport.top_line = 0;
    }

    pub fn is_dirty(&self) -> bool {
        self.buffer.modified
    }

    /// Process one logical key event. Returns true if the editor should quit.
    pub fn handle_key(&mut self, key: Key) -> bool {
        self.message = None;

        if self.show_help {
            self.show_help = false;
            return false;
        }

        if let Some(prompt) = self.prompt.take() {
            return self.handle_prompt_key(prompt, key);
        }

        match self.mode {
            Mode::Command => self.handle_command_mode(key),
            Mode::Insert => self.handle_insert_mode(key),
        }
        self.cursor.clamp(&self.buffer);
        false
    }

    fn handle_command_mode(&mut self, key: Key) {
        match key {
            Key::Char('i') => self.mode = Mode::Insert,
            Key::Char(':') => self.prompt = Some(Prompt::new(PromptKind::Command)),
            _ => self.navigate(key),
        }
    }

    fn handle_insert_mode(&mut self, key: Key) {
        match key {
            Key::Esc => self.mode = Mode::Command,
            Key::Backspace => self.backspace(),
            Key::Delete => self.delete_at_cursor(),
            Key::Enter => self.newline(),
            _ => match key.printable() {
                Some(c) => self.insert_char(c),
                None => self.navigate(key),
            },
        }
    }

    fn navigate(&mut self, key: Key) {
        match key {
            Key::Left => self.cursor.move_left(),
            Key::Right => self.cursor.move_right(&self.buffer),
            Key::Up => self.cursor.move_up(&self.buffer),
            Key::Down => self.cursor.move_down(&self.buffer),
            Key::Home => self.cursor.move_home(),
            Key::End => self.cursor.move_end(&self.buffer),
            _ => {}
        }
    }

    fn insert_char(&mut self, c: char) {
        if let Ok(true) = self.buffer.insert_char(self.cursor.row, self.cursor.col, c) {
            self.cursor.col += 1;
        }
    }

    fn backspace(&mut self) {
        let Cursor { row, col } = self.cursor;
        if col > 0 {
            if let Ok(true) = self.buffer.remove_char(row, col - 1) {
                self.cursor.col -= 1;
            }
        } else if row > 0 {
            match self.buffer.join(row) {
                Ok(join_col) => self.cursor.move_to(&self.buffer, row - 1, join_col),
                Err(err) => debug!("join refused: {}", err),
            }
        }
    }

    fn delete_at_cursor(&mut self) {
        if let Err(err) = self.buffer.remove_char(self.cursor.row, self.cursor.col) {
            debug!("delete refused: {}", err);
        }
    }

    /// Split the current line at the cursor and indent the new line.
    fn newline(&mut self) {
        let Cursor { row, col } = self.cursor;
        if row + 1 >= MAX_LINES {
            return;
        }
        let source = match self.buffer.get(row) {
            Ok(line) => line.to_string(),
            Err(err) => {
                debug!("newline outside buffer: {}", err);
                return;
            }
        };
        let col = col.min(source.len());
        if let Err(err) = self.buffer.split(row, col) {
            debug!("split refused: {}", err);
            return;
        }

        let engine = IndentationEngine::with_width(self.grammar, self.indent_width);
        let indent = engine.indent_for(&source);
        let new_line = engine.indented_line(indent, &source[col..]);
        if self.buffer.set(row + 1, &new_line).is_ok() {
            self.cursor.move_to(&self.buffer, row + 1, indent);
        }
    }

    fn handle_prompt_key(&mut self, mut prompt: Prompt, key: Key) -> bool {
        match key {
            Key::Esc => {}
            Key::Enter => return self.submit_prompt(prompt),
            Key::Backspace => {
                if prompt.input.pop().is_some() {
                    self.prompt = Some(prompt);
                }
            }
            _ => {
                if let Some(c) = key.printable()
                    && prompt.input.len() < MAX_LINE_LEN
                {
                    prompt.input.push(c);
                }
                self.prompt = Some(prompt);
            }
        }
        false
    }

    fn submit_prompt(&mut self, prompt: Prompt) -> bool {
        match prompt.kind {
            PromptKind::Command => self.execute_command_line(&prompt.input),
            PromptKind::Filename { quit_after } => {
                let name = prompt.input.trim();
                if name.is_empty() {
                    self.message = Some("Save cancelled".to_string());
                    return false;
                }
                self.set_filename(name);
                self.write(quit_after)
            }
        }
    }

    /// Parse and run the text typed after `:`. Returns true if the editor
    /// should quit.
    pub fn execute_command_line(&mut self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return false;
        }
        match Command::parse(line) {
            Ok(command) => self.execute_command(command),
            Err(err) => {
                info!("{}", err);
                self.message = Some(err.to_string());
                false
            }
        }
    }

    /// Returns true if the editor should quit.
    pub fn execute_command(&mut self, command: Command) -> bool {
        match command {
            Command::Write(name) => {
                if let Some(name) = name {
                    self.set_filename(&name);
                }
                self.write(false)
            }
            Command::WriteQuit => self.write(true),
            Command::Quit => {
                if self.is_dirty() {
                    self.message = Some(UNSAVED_WARNING.to_string());
                    false
                } else {
                    true
                }
            }
            Command::ForceQuit => true,
            Command::Help => {
                self.show_help = true;
                false
            }
            Command::SetGrammar(grammar) => {
                info!("grammar set to {}", grammar);
                self.grammar = grammar;
                false
            }
        }
    }

    fn set_filename(&mut self, name: &str) {
        self.filename = Some(name.to_string());
        self.grammar = Grammar::from_path(name);
    }

    /// Save to the current filename, prompting for one if unset. Returns
    /// `quit_after` only when the save succeeded.
    fn write(&mut self, quit_after: bool) -> bool {
        let Some(path) = self.filename.clone() else {
            self.prompt = Some(Prompt::new(PromptKind::Filename { quit_after }));
            return false;
        };
        match persistence::save_buffer(&path, &mut self.buffer) {
            Ok(count) => {
                self.message = Some(format!("\"{}\" written, {} lines", path, count));
                quit_after
            }
            Err(err) => {
                warn!("save failed: {}", err);
                self.message = Some(format!("Error: could not save {}", err));
                false
            }
        }
    }

    /// Build the frame for a screen with `text_rows` rows of buffer text,
    /// scrolling the viewport to keep the cursor visible.
    pub fn screen(&mut self, text_rows: usize) -> Screen {
        self.viewport.resize(text_rows);
        self.viewport.scroll_to_cursor(self.cursor.row);

        let rows: Vec<Option<RowView>> = self
            .viewport
            .visible_rows()
            .map(|row| {
                self.buffer.get(row).ok().map(|text| RowView {
                    number: row + 1,
                    text: text.to_string(),
                    tokens: tokenize(text, self.grammar),
                })
            })
            .collect();

        let status = format_status(
            self.mode.label(),
            self.grammar.name(),
            self.cursor.row,
            self.cursor.col,
            self.filename.as_deref(),
            self.is_dirty(),
        );

        let bottom = match (&self.prompt, &self.message) {
            (Some(prompt), _) => BottomLine::Prompt(prompt.display()),
            (None, Some(message)) => BottomLine::Message(message.clone()),
            (None, None) if self.show_hint => BottomLine::Hint(HINT.to_string()),
            (None, None) => BottomLine::Hint(String::new()),
        };

        let cursor = match &bottom {
            BottomLine::Prompt(text) => (text.len(), text_rows + 1),
            _ => (
                GUTTER_WIDTH + self.cursor.col,
                self.cursor.row - self.viewport.top_line,
            ),
        };

        Screen {
            rows,
            status,
            modified: self.is_dirty(),
            bottom,
            cursor,
            help: self.show_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(editor: &mut Editor, text: &str) {
        for c in text.chars() {
            editor.handle_key(Key::Char(c));
        }
    }

    fn command(editor: &mut Editor, text: &str) -> bool {
        editor.handle_key(Key::Char(':'));
        type_str(editor, text);
        editor.handle_key(Key::Enter)
    }

    #[test]
    fn test_starts_in_command_mode() {
        let editor = Editor::new();
        assert_eq!(editor.mode, Mode::Command);
        assert_eq!(editor.grammar, Grammar::Text);
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_insert_and_escape() {
        let mut editor = Editor::new();
        editor.handle_key(Key::Char('i'));
        assert_eq!(editor.mode, Mode::Insert);
        type_str(&mut editor, "hi");
        assert_eq!(editor.buffer.get(0).unwrap(), "hi");
        assert_eq!(editor.cursor.col, 2);
        assert!(editor.is_dirty());
        editor.handle_key(Key::Esc);
        assert_eq!(editor.mode, Mode::Command);
    }

    #[test]
    fn test_command_mode_ignores_text() {
        let mut editor = Editor::new();
        editor.handle_key(Key::Char('x'));
        assert_eq!(editor.buffer.get(0).unwrap(), "");
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut editor = Editor::new();
        editor.buffer = Buffer::from_lines(["abc", "def"]);
        editor.cursor = Cursor { row: 1, col: 0 };
        editor.handle_key(Key::Char('i'));
        editor.handle_key(Key::Backspace);
        assert_eq!(editor.buffer.get(0).unwrap(), "abcdef");
        assert_eq!(editor.cursor, Cursor { row: 0, col: 3 });
        assert_eq!(editor.buffer.line_count(), 1);
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut editor = Editor::new();
        editor.buffer = Buffer::from_lines(["abc"]);
        editor.handle_key(Key::Char('i'));
        editor.handle_key(Key::Backspace);
        assert_eq!(editor.buffer.get(0).unwrap(), "abc");
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_delete_removes_char_at_cursor() {
        let mut editor = Editor::new();
        editor.buffer = Buffer::from_lines(["abc"]);
        editor.cursor.col = 1;
        editor.handle_key(Key::Char('i'));
        editor.handle_key(Key::Delete);
        assert_eq!(editor.buffer.get(0).unwrap(), "ac");
        assert_eq!(editor.cursor.col, 1);
    }

    #[test]
    fn test_delete_outside_buffer_is_refused() {
        let mut editor = Editor::new();
        editor.buffer = Buffer::from_lines(["abc"]);
        editor.handle_key(Key::Char('i'));
        editor.cursor.row = 5;
        editor.handle_key(Key::Delete);
        assert_eq!(editor.buffer.get(0).unwrap(), "abc");
        assert!(!editor.is_dirty());
        assert_eq!(editor.cursor.row, 0);

        editor.cursor.col = 3;
        editor.handle_key(Key::Delete);
        assert_eq!(editor.buffer.get(0).unwrap(), "abc");
    }

    #[test]
    fn test_enter_indents_c_block() {
        let mut editor = Editor::new();
        editor.grammar = Grammar::CLike;
        editor.handle_key(Key::Char('i'));
        type_str(&mut editor, "if (x) {");
        editor.handle_key(Key::Enter);
        assert_eq!(editor.buffer.get(1).unwrap(), "    ");
        assert_eq!(editor.cursor, Cursor { row: 1, col: 4 });
    }

    #[test]
    fn test_enter_splits_with_python_indent() {
        let mut editor = Editor::new();
        editor.grammar = Grammar::PyLike;
        editor.buffer = Buffer::from_lines(["def f(): return 1"]);
        editor.cursor.col = 8;
        editor.handle_key(Key::Char('i'));
        editor.handle_key(Key::Enter);
        assert_eq!(editor.buffer.get(0).unwrap(), "def f():");
        // The full line before the split does not end with ':'.
        assert_eq!(editor.buffer.get(1).unwrap(), "return 1");
        assert_eq!(editor.cursor, Cursor { row: 1, col: 0 });
    }

    #[test]
    fn test_quit_when_dirty_warns() {
        let mut editor = Editor::new();
        editor.handle_key(Key::Char('i'));
        type_str(&mut editor, "x");
        editor.handle_key(Key::Esc);
        assert!(!command(&mut editor, "q"));
        assert_eq!(editor.message.as_deref(), Some(UNSAVED_WARNING));
        assert_eq!(editor.mode, Mode::Command);
        assert!(editor.is_dirty());
        assert!(command(&mut editor, "q!"));
    }

    #[test]
    fn test_quit_when_clean() {
        let mut editor = Editor::new();
        assert!(command(&mut editor, "q"));
    }

    #[test]
    fn test_unknown_command_message() {
        let mut editor = Editor::new();
        assert!(!command(&mut editor, "xyz"));
        assert_eq!(editor.message.as_deref(), Some("Unknown command: xyz"));
        editor.handle_key(Key::Left);
        assert!(editor.message.is_none());
    }

    #[test]
    fn test_grammar_commands() {
        let mut editor = Editor::new();
        command(&mut editor, "a");
        assert_eq!(editor.grammar, Grammar::AsmLike);
        command(&mut editor, "p");
        assert_eq!(editor.grammar, Grammar::PyLike);
        command(&mut editor, "c");
        assert_eq!(editor.grammar, Grammar::CLike);
        command(&mut editor, "n");
        assert_eq!(editor.grammar, Grammar::Text);
    }

    #[test]
    fn test_help_is_dismissed_by_any_key() {
        let mut editor = Editor::new();
        command(&mut editor, "h");
        assert!(editor.show_help);
        editor.handle_key(Key::Char('i'));
        assert!(!editor.show_help);
        assert_eq!(editor.mode, Mode::Command);
    }

    #[test]
    fn test_prompt_editing_and_cancel() {
        let mut editor = Editor::new();
        editor.handle_key(Key::Char(':'));
        type_str(&mut editor, "wx");
        editor.handle_key(Key::Backspace);
        assert_eq!(editor.prompt.as_ref().unwrap().input, "w");
        editor.handle_key(Key::Esc);
        assert!(editor.prompt.is_none());
        editor.handle_key(Key::Char(':'));
        editor.handle_key(Key::Backspace);
        assert!(editor.prompt.is_none());
    }

    #[test]
    fn test_write_without_filename_prompts() {
        let mut editor = Editor::new();
        command(&mut editor, "w");
        assert_eq!(
            editor.prompt,
            Some(Prompt::new(PromptKind::Filename { quit_after: false }))
        );
        editor.handle_key(Key::Enter);
        assert!(editor.prompt.is_none());
        assert_eq!(editor.message.as_deref(), Some("Save cancelled"));
    }

    #[test]
    fn test_screen_layout() {
        let mut editor = Editor::new();
        editor.buffer = Buffer::from_lines((0..30).map(|i| format!("line {}", i)));
        editor.cursor.row = 25;
        let screen = editor.screen(10);
        assert_eq!(screen.rows.len(), 10);
        assert_eq!(editor.viewport.top_line, 16);
        assert_eq!(screen.rows[9].as_ref().unwrap().number, 26);
        assert_eq!(screen.cursor, (GUTTER_WIDTH, 9));
        assert_eq!(screen.bottom, BottomLine::Hint(HINT.to_string()));
        assert_eq!(screen.status_row(), 10);
    }

    #[test]
    fn test_screen_rows_past_end_are_absent() {
        let mut editor = Editor::new();
        let screen = editor.screen(3);
        assert!(screen.rows[0].is_some());
        assert!(screen.rows[1].is_none());
        assert!(screen.rows[2].is_none());
    }

    #[test]
    fn test_screen_cursor_follows_prompt() {
        let mut editor = Editor::new();
        editor.handle_key(Key::Char(':'));
        editor.handle_key(Key::Char('w'));
        let screen = editor.screen(5);
        assert_eq!(screen.bottom, BottomLine::Prompt(":w".to_string()));
        assert_eq!(screen.cursor, (2, 6));
    }
}
