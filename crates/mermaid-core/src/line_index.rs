//! Logical line index over the live document text.
//!
//! Backed by a [`ropey::Rope`], so line lookups and edits are `O(log N)`. All offsets exposed by
//! this module are in Unicode scalar values (`char`), not bytes.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`, matching the renderer's line numbering. Other
//! Unicode separators (VT, FF, NEL, U+2028, U+2029) are ordinary characters.

use crate::view::DocumentView;
use ropey::{Rope, RopeSlice};

/// Rope-backed line index.
#[derive(Debug, Clone)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an empty line index.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a line index from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total line count. An empty document still has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total byte count.
    pub fn byte_count(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Total character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Character offset of the first character of `line`.
    ///
    /// Lines past the end clamp to the document length.
    pub fn line_start_offset(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line)
    }

    /// Character offset just past the last character of `line`, excluding its line terminator.
    pub fn line_end_offset(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        let slice = self.rope.line(line);
        self.rope.line_to_char(line) + slice.len_chars() - line_break_len(slice)
    }

    /// Convert a byte offset into a character offset.
    ///
    /// A byte offset inside a multi-byte sequence maps to the character containing it.
    pub fn byte_to_char(&self, byte_offset: usize) -> usize {
        self.rope.byte_to_char(byte_offset.min(self.rope.len_bytes()))
    }

    /// Get the complete text.
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }

    /// Insert text at a character offset (clamped to the document end).
    pub fn insert(&mut self, char_offset: usize, text: &str) {
        let char_offset = char_offset.min(self.rope.len_chars());
        self.rope.insert(char_offset, text);
    }

    /// Delete `len_chars` characters starting at `start_char` (clamped to the document end).
    pub fn delete(&mut self, start_char: usize, len_chars: usize) {
        let start_char = start_char.min(self.rope.len_chars());
        let end_char = start_char.saturating_add(len_chars).min(self.rope.len_chars());

        if start_char < end_char {
            self.rope.remove(start_char..end_char);
        }
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentView for LineIndex {
    fn line_count(&self) -> usize {
        LineIndex::line_count(self)
    }

    fn line_start_offset(&self, line: usize) -> usize {
        LineIndex::line_start_offset(self, line)
    }

    fn line_end_offset(&self, line: usize) -> usize {
        LineIndex::line_end_offset(self, line)
    }

    fn len_chars(&self) -> usize {
        self.char_count()
    }
}

// Built without `unicode_lines`, ropey only breaks on LF, CRLF and CR.
fn line_break_len(line: RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len == 0 {
        return 0;
    }
    match line.char(len - 1) {
        '\n' if len >= 2 && line.char(len - 2) == '\r' => 2,
        '\n' | '\r' => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_line_index() {
        let index = LineIndex::new();
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.byte_count(), 0);
        assert_eq!(index.char_count(), 0);
        assert_eq!(index.line_start_offset(0), 0);
        assert_eq!(index.line_end_offset(0), 0);
    }

    #[test]
    fn test_line_offsets_exclude_terminator() {
        let index = LineIndex::from_text("graph TD\n  A-->B\n");

        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_start_offset(0), 0);
        assert_eq!(index.line_end_offset(0), 8);
        assert_eq!(index.line_start_offset(1), 9);
        assert_eq!(index.line_end_offset(1), 16);
        // Trailing empty line.
        assert_eq!(index.line_start_offset(2), 17);
        assert_eq!(index.line_end_offset(2), 17);
    }

    #[test]
    fn test_crlf_counts_as_one_terminator() {
        let index = LineIndex::from_text("ab\r\ncd");

        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_end_offset(0), 2);
        assert_eq!(index.line_start_offset(1), 4);
    }

    #[test]
    fn test_unicode_separators_do_not_break_lines() {
        let text = "graph TD\u{000C}\nA[\"x\u{2028}y\u{0085}\"] --> B\u{000B}\nC";
        let index = LineIndex::from_text(text);

        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_end_offset(0), 9);
        assert_eq!(index.line_start_offset(1), 10);
        assert_eq!(index.line_end_offset(1), 26);
        assert_eq!(index.line_start_offset(2), 27);
    }

    #[test]
    fn test_lone_cr_breaks_line() {
        let index = LineIndex::from_text("ab\rcd");

        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_end_offset(0), 2);
        assert_eq!(index.line_start_offset(1), 3);
    }

    #[test]
    fn test_out_of_range_line_clamps_to_end() {
        let index = LineIndex::from_text("abc\ndef");

        assert_eq!(index.line_start_offset(99), 7);
        assert_eq!(index.line_end_offset(99), 7);
    }

    #[test]
    fn test_utf8_offsets() {
        let text = "图 A\n节点";
        let index = LineIndex::from_text(text);

        assert_eq!(index.char_count(), 6);
        assert_eq!(index.byte_count(), text.len());
        assert_eq!(index.line_start_offset(1), 4);
        assert_eq!(index.byte_to_char(6), 4);
        // Inside the three-byte `节`.
        assert_eq!(index.byte_to_char(7), 4);
        assert_eq!(index.byte_to_char(99), 6);
    }

    #[test]
    fn test_insert_delete() {
        let mut index = LineIndex::from_text("graph TD");

        index.insert(5, " LR");
        assert_eq!(index.get_text(), "graph LR TD");

        index.delete(5, 3);
        assert_eq!(index.get_text(), "graph TD");

        index.delete(6, 100);
        assert_eq!(index.get_text(), "graph ");
    }
}
