// Common test utilities for bounds and invariant testing

use iclass::buffer::{Buffer, MAX_LINE_LEN};
use iclass::editor::Editor;
use iclass::key::Key;

/// Builders for buffers and editors in specific states
pub mod boundary {
    use super::*;

    /// Buffer with `line_count` lines; line i has (i % 10) + 1 characters
    #[allow(dead_code)]
    pub fn create_multiline_buffer(line_count: usize) -> Buffer {
        Buffer::from_lines((0..line_count).map(|i| "a".repeat(i % 10 + 1)))
    }

    /// Editor holding `lines`, cursor at the origin
    #[allow(dead_code)]
    pub fn create_editor_with_lines(lines: &[&str]) -> Editor {
        let mut editor = Editor::new();
        editor.buffer = Buffer::from_lines(lines);
        editor
    }
}

/// Driving the editor with key sequences
pub mod keys {
    use super::*;

    #[allow(dead_code)]
    pub fn type_str(editor: &mut Editor, text: &str) {
        for c in text.chars() {
            editor.handle_key(Key::Char(c));
        }
    }

    /// Type `:<text><Enter>`; returns whether the editor asked to quit
    #[allow(dead_code)]
    pub fn run_command(editor: &mut Editor, text: &str) -> bool {
        editor.handle_key(Key::Char(':'));
        type_str(editor, text);
        editor.handle_key(Key::Enter)
    }
}

/// Invariant checks
pub mod validation {
    use super::*;

    /// Assert the cursor addresses a present line and a valid column
    pub fn assert_cursor_valid(editor: &Editor) {
        assert!(
            editor.cursor.row < editor.buffer.line_count(),
            "Cursor row {} out of bounds (line_count: {})",
            editor.cursor.row,
            editor.buffer.line_count()
        );
        let line_len = editor.buffer.line_len(editor.cursor.row);
        assert!(
            editor.cursor.col <= line_len,
            "Cursor col {} out of bounds for row {} (line_len: {})",
            editor.cursor.col,
            editor.cursor.row,
            line_len
        );
        assert!(line_len <= MAX_LINE_LEN);
    }

    /// Assert every present line is reachable and within length limits
    #[allow(dead_code)]
    pub fn assert_buffer_invariants(buffer: &Buffer) {
        assert!(buffer.line_count() >= 1, "Buffer must have at least 1 line");
        for row in 0..buffer.line_count() {
            let line = buffer.get(row).expect("All lines should be accessible");
            assert!(line.len() <= MAX_LINE_LEN);
        }
        assert!(buffer.get(buffer.line_count()).is_err());
    }
}
