// src/buffer.rs - Fixed-capacity line buffer

use log::debug;
use thiserror::Error;

/// Maximum number of line slots the buffer holds.
pub const MAX_LINES: usize = 1000;
/// Maximum length of a single line, in ASCII columns.
pub const MAX_LINE_LEN: usize = 255;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("row {row} out of range (line count: {line_count})")]
    OutOfRange { row: usize, line_count: usize },
    #[error("buffer is at capacity ({} lines)", MAX_LINES)]
    AtCapacity,
}

/// Ordered, pre-sized arena of line slots.
///
/// Present lines always form a contiguous prefix of the slots, and there is
/// always at least one present line (possibly empty). Rows past
/// [`Buffer::line_count`] are absent and never addressable.
pub struct Buffer {
    slots: Vec<Option<String>>,
    pub modified: bool,
}

impl Buffer {
    pub fn new() -> Self {
        let mut slots = vec![None; MAX_LINES];
        slots[0] = Some(String::new());
        Self {
            slots,
            modified: false,
        }
    }

    /// Build a buffer from an ordered sequence of lines.
    ///
    /// Lines past `MAX_LINES` are dropped and each line is normalised to the
    /// ASCII column model. The result is not marked modified.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buffer = Self::new();
        let mut count = 0;
        for line in lines.into_iter().take(MAX_LINES) {
            buffer.slots[count] = Some(normalize_line(line.as_ref()));
            count += 1;
        }
        debug!("buffer populated with {} lines", count.max(1));
        buffer
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// Number of contiguous present slots from the start.
    pub fn line_count(&self) -> usize {
        self.slots.iter().take_while(|slot| slot.is_some()).count()
    }

    pub fn get(&self, row: usize) -> Result<&str, BufferError> {
        if row >= self.line_count() {
            return Err(self.out_of_range(row));
        }
        self.slots[row]
            .as_deref()
            .ok_or_else(|| self.out_of_range(row))
    }

    /// Length of a present line, or 0 for an absent row.
    pub fn line_len(&self, row: usize) -> usize {
        self.get(row).map(str::len).unwrap_or(0)
    }

    /// Iterate over the present lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map_while(|slot| slot.as_deref())
    }

    /// Replace the content of `row`, silently truncating to `MAX_LINE_LEN`.
    pub fn set(&mut self, row: usize, text: &str) -> Result<(), BufferError> {
        if row >= self.line_count() {
            return Err(self.out_of_range(row));
        }
        self.slots[row] = Some(truncate(text).to_string());
        self.modified = true;
        Ok(())
    }

    /// Insert a new line directly below `row`.
    ///
    /// When every slot is already in use the last line is discarded to keep
    /// the capacity fixed.
    pub fn insert_after(&mut self, row: usize, text: &str) -> Result<(), BufferError> {
        if row >= self.line_count() {
            return Err(self.out_of_range(row));
        }
        if self.slots[MAX_LINES - 1].is_some() {
            debug!("buffer full, dropping line {}", MAX_LINES);
        }
        self.slots.insert(row + 1, Some(truncate(text).to_string()));
        self.slots.truncate(MAX_LINES);
        self.modified = true;
        Ok(())
    }

    /// Remove `row`, shifting later lines up and appending an absent slot.
    ///
    /// Deleting the only line leaves a single empty line behind.
    pub fn delete(&mut self, row: usize) -> Result<(), BufferError> {
        if row >= self.line_count() {
            return Err(self.out_of_range(row));
        }
        self.slots.remove(row);
        self.slots.push(None);
        if self.slots[0].is_none() {
            self.slots[0] = Some(String::new());
        }
        self.modified = true;
        Ok(())
    }

    /// Truncate `row` at `col` and insert the remainder as a new line below.
    ///
    /// `col` is clamped to the line length. Splitting the final slot is
    /// refused since its remainder would immediately fall off the end.
    pub fn split(&mut self, row: usize, col: usize) -> Result<(), BufferError> {
        let line = self.get(row)?;
        if row + 1 >= MAX_LINES {
            return Err(BufferError::AtCapacity);
        }
        let col = col.min(line.len());
        let (head, tail) = line.split_at(col);
        let (head, tail) = (head.to_string(), tail.to_string());
        self.set(row, &head)?;
        self.insert_after(row, &tail)
    }

    /// Append `row` onto `row - 1` and delete `row`.
    ///
    /// Returns the length `row - 1` had before the join, i.e. the column of
    /// the join point.
    pub fn join(&mut self, row: usize) -> Result<usize, BufferError> {
        if row == 0 {
            return Err(self.out_of_range(row));
        }
        let tail = self.get(row)?.to_string();
        let head = self.get(row - 1)?;
        let join_col = head.len();
        let joined = format!("{}{}", head, tail);
        self.set(row - 1, &joined)?;
        self.delete(row)?;
        Ok(join_col)
    }

    /// Insert a printable character at `(row, col)`.
    ///
    /// Returns `false` without touching the line when it is already at
    /// `MAX_LINE_LEN`.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) -> Result<bool, BufferError> {
        let line = self.get(row)?;
        if line.len() >= MAX_LINE_LEN {
            return Ok(false);
        }
        let col = col.min(line.len());
        let mut text = line.to_string();
        text.insert(col, ch);
        self.set(row, &text)?;
        Ok(true)
    }

    /// Remove the character at `(row, col)`. Returns `false` when `col` is at
    /// or past the end of the line.
    pub fn remove_char(&mut self, row: usize, col: usize) -> Result<bool, BufferError> {
        let line = self.get(row)?;
        if col >= line.len() {
            return Ok(false);
        }
        let mut text = line.to_string();
        text.remove(col);
        self.set(row, &text)?;
        Ok(true)
    }

    fn out_of_range(&self, row: usize) -> BufferError {
        BufferError::OutOfRange {
            row,
            line_count: self.line_count(),
        }
    }
}

fn truncate(text: &str) -> &str {
    if text.len() <= MAX_LINE_LEN {
        return text;
    }
    let mut end = MAX_LINE_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Map arbitrary text into the ASCII column model: tabs expand to four
/// spaces, anything else outside 0x20-0x7E becomes `?`.
pub fn normalize_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len().min(MAX_LINE_LEN));
    for ch in text.chars() {
        match ch {
            '\t' => out.push_str("    "),
            ' '..='~' => out.push(ch),
            '\r' | '\n' => {}
            _ => out.push('?'),
        }
        if out.len() >= MAX_LINE_LEN {
            break;
        }
    }
    out.truncate(MAX_LINE_LEN);
    out
}
