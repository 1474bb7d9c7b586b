/// Scrolled window of buffer rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top_line: usize,
    pub rows: usize,
}

impl Viewport {
    pub fn new(rows: usize) -> Self {
        Self { top_line: 0, rows }
    }

    /// Scroll the minimum amount needed to keep `cursor_row` visible.
    pub fn scroll_to_cursor(&mut self, cursor_row: usize) {
        let rows = self.rows.max(1);
        if cursor_row < self.top_line {
            self.top_line = cursor_row;
        } else if cursor_row >= self.top_line + rows {
            self.top_line = cursor_row + 1 - rows;
        }
    }

    pub fn resize(&mut self, rows: usize) {
        self.rows = rows;
    }

    /// Buffer rows currently covered by the viewport.
    pub fn visible_rows(&self) -> std::ops::Range<usize> {
        self.top_line..self.top_line + self.rows
    }
}
