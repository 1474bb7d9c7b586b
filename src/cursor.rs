use crate::buffer::{Buffer, MAX_LINE_LEN};

/// Cursor position in buffer coordinates.
///
/// After every operation `row < buffer.line_count()` and
/// `col <= buffer.line_len(row) <= MAX_LINE_LEN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    pub fn move_left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    pub fn move_right(&mut self, buffer: &Buffer) {
        let max = buffer.line_len(self.row).min(MAX_LINE_LEN);
        if self.col < max {
            self.col += 1;
        }
    }

    pub fn move_up(&mut self, buffer: &Buffer) {
        if self.row > 0 {
            self.row -= 1;
            self.clamp_col(buffer);
        }
    }

    pub fn move_down(&mut self, buffer: &Buffer) {
        if self.row + 1 < buffer.line_count() {
            self.row += 1;
            self.clamp_col(buffer);
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self, buffer: &Buffer) {
        self.col = buffer.line_len(self.row);
    }

    /// Place the cursor at `(row, col)`, clamped into the buffer.
    pub fn move_to(&mut self, buffer: &Buffer, row: usize, col: usize) {
        self.row = row;
        self.col = col;
        self.clamp(buffer);
    }

    /// Restore the position invariant after a buffer mutation.
    pub fn clamp(&mut self, buffer: &Buffer) {
        let last_row = buffer.line_count().saturating_sub(1);
        self.row = self.row.min(last_row);
        self.clamp_col(buffer);
    }

    fn clamp_col(&mut self, buffer: &Buffer) {
        self.col = self.col.min(buffer.line_len(self.row));
    }
}
