//! Editable rune sequence with a cursor

use tracing::trace;

use super::width::{rune_width, str_width};
use super::wrap::wrap;
use crate::geometry::Point;

/// Text being edited: runes, a cursor index and wrap settings
///
/// The cursor is an index into the runes in `0..=len`. Every mutation keeps
/// it in that range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuneBuffer {
    runes: Vec<char>,
    cursor: usize,
    word_wrap: bool,
    max_width: usize,
}

impl RuneBuffer {
    /// Create an empty buffer with wrapping off
    pub fn new() -> Self {
        Self::default()
    }

    /// Full text
    pub fn text(&self) -> String {
        self.runes.iter().collect()
    }

    /// Runes as a slice
    pub fn runes(&self) -> &[char] {
        &self.runes
    }

    /// Number of runes
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// Replace the text; the cursor moves to the end
    pub fn set_text(&mut self, text: &str) {
        self.runes = text.chars().collect();
        self.cursor = self.runes.len();
    }

    /// Remove all text
    pub fn clear(&mut self) {
        self.runes.clear();
        self.cursor = 0;
    }

    /// Cursor index
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamped to the text length
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(self.runes.len());
    }

    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    pub fn set_word_wrap(&mut self, enabled: bool) {
        self.word_wrap = enabled;
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Width used for wrapping; 0 disables wrapping
    pub fn set_max_width(&mut self, width: usize) {
        self.max_width = width;
    }

    /// Insert a rune at the cursor and step past it
    pub fn insert_rune(&mut self, c: char) {
        self.runes.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor and step past it
    pub fn insert_str(&mut self, s: &str) {
        let tail = self.runes.split_off(self.cursor);
        self.runes.extend(s.chars());
        self.cursor = self.runes.len();
        self.runes.extend(tail);
    }

    pub fn move_forward(&mut self) {
        if self.cursor < self.runes.len() {
            self.cursor += 1;
        }
    }

    pub fn move_backward(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn line_start(&self) -> usize {
        self.runes[..self.cursor]
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |i| i + 1)
    }

    fn line_end(&self) -> usize {
        self.runes[self.cursor..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(self.runes.len(), |i| self.cursor + i)
    }

    /// Move to the start of the current logical line
    pub fn move_to_line_start(&mut self) {
        self.cursor = self.line_start();
    }

    /// Move to the end of the current logical line (before its `\n`)
    pub fn move_to_line_end(&mut self) {
        self.cursor = self.line_end();
    }

    /// Move to the same column of the previous logical line, clamped to its length
    pub fn move_up(&mut self) {
        let start = self.line_start();
        if start == 0 {
            return;
        }
        let column = self.cursor - start;
        let prev_end = start - 1;
        self.cursor = prev_end;
        let prev_start = self.line_start();
        self.cursor = prev_start + column.min(prev_end - prev_start);
    }

    /// Move to the same column of the next logical line, clamped to its length
    pub fn move_down(&mut self) {
        let end = self.line_end();
        if end == self.runes.len() {
            return;
        }
        let column = self.cursor - self.line_start();
        self.cursor = end + 1;
        let next_end = self.line_end();
        self.cursor = (end + 1 + column).min(next_end);
    }

    /// Delete the rune before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.runes.remove(self.cursor);
        }
    }

    /// Delete the rune at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.runes.len() {
            self.runes.remove(self.cursor);
        }
    }

    /// Delete from the cursor to the end of the line, newline included
    pub fn kill(&mut self) {
        let end = self.line_end();
        let end = if end < self.runes.len() { end + 1 } else { end };
        let removed = self.runes.drain(self.cursor..end).count();
        trace!(removed, "killed to end of line");
    }

    /// Total display width
    pub fn width(&self) -> usize {
        self.runes.iter().copied().map(rune_width).sum()
    }

    fn effective_wrap_width(&self) -> usize {
        if self.word_wrap {
            self.max_width
        } else {
            0
        }
    }

    /// Display lines, wrapped at `max_width` when word wrap is on
    pub fn split_by_line(&self) -> Vec<String> {
        wrap(&self.text(), self.effective_wrap_width())
    }

    /// Cursor position in display coordinates
    ///
    /// The row is the number of display lines before the cursor and the column
    /// is the display width of the text preceding it on its line.
    pub fn cursor_pos(&self) -> Point {
        let before: String = self.runes[..self.cursor].iter().collect();
        let lines = wrap(&before, self.effective_wrap_width());
        let last = lines.last().map_or(0, |line| str_width(line));
        Point::new(last as i32, lines.len().saturating_sub(1) as i32)
    }
}

impl From<&str> for RuneBuffer {
    fn from(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_text(text);
        buffer
    }
}
