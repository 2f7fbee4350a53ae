//! The document being edited
//!
//! Wraps a `TextArea` and answers the host questions the dictionary core
//! asks: which word is under the cursor and what is selected.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::host::{EditorHost, WordRange};
use crate::theme;

pub struct Document {
    pub textarea: TextArea<'static>,
    path: Option<PathBuf>,
    modified: bool,
}

fn create_textarea(lines: Vec<String>) -> TextArea<'static> {
    let mut textarea = if lines.is_empty() {
        TextArea::default()
    } else {
        TextArea::new(lines)
    };
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea.set_selection_style(theme::editor::SELECTION);
    textarea
}

impl Document {
    /// In-memory document that is not backed by a file
    pub fn from_text(text: &str) -> Self {
        Self {
            textarea: create_textarea(text.lines().map(String::from).collect()),
            path: None,
            modified: false,
        }
    }

    /// Open `path`; a file that does not exist yet gives an empty document
    /// that will be created on save.
    pub fn open(path: PathBuf) -> io::Result<Self> {
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e),
        };

        Ok(Self {
            textarea: create_textarea(text.lines().map(String::from).collect()),
            path: Some(path),
            modified: false,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// (row, column) of the cursor in characters
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    /// Forward a key to the text area
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let changed = self.textarea.input(key);
        self.modified |= changed;
        changed
    }

    /// Insert pasted text at the cursor, replacing any selection
    pub fn paste(&mut self, text: &str) {
        if self.has_selection() {
            self.textarea.cut();
        }
        self.textarea.insert_str(text);
        self.modified = true;
    }

    pub fn save(&mut self) -> io::Result<&Path> {
        let Some(path) = self.path.as_deref() else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "Document has no file path",
            ));
        };

        let mut content = self.text();
        content.push('\n');
        fs::write(path, content)?;

        self.modified = false;
        Ok(path)
    }

    pub fn has_selection(&self) -> bool {
        self.textarea
            .selection_range()
            .is_some_and(|(start, end)| start != end)
    }

    /// Select `range`, leaving the cursor at its end
    pub fn select_range(&mut self, range: &WordRange) {
        self.textarea.cancel_selection();
        self.textarea.move_cursor(jump(range.row, range.start));
        self.textarea.start_selection();
        self.textarea.move_cursor(jump(range.row, range.end));
    }

    /// Replace the current selection with `text`. Returns false when nothing
    /// was selected.
    pub fn replace_selection(&mut self, text: &str) -> bool {
        if !self.has_selection() {
            return false;
        }

        self.textarea.cut();
        self.textarea.insert_str(text);
        self.modified = true;
        true
    }
}

fn jump(row: usize, col: usize) -> CursorMove {
    CursorMove::Jump(
        u16::try_from(row).unwrap_or(u16::MAX),
        u16::try_from(col).unwrap_or(u16::MAX),
    )
}

impl EditorHost for Document {
    fn current_selection_text(&self) -> String {
        let Some(((start_row, start_col), (end_row, end_col))) = self.textarea.selection_range()
        else {
            return String::new();
        };

        let lines = self.textarea.lines();
        let mut selected = Vec::new();
        for row in start_row..=end_row.min(lines.len().saturating_sub(1)) {
            let line = &lines[row];
            let from = if row == start_row { start_col } else { 0 };
            let to = if row == end_row {
                end_col
            } else {
                line.chars().count()
            };
            selected.push(slice_chars(line, from, to));
        }

        selected.join("\n")
    }

    fn word_range_at_cursor(&self) -> Option<WordRange> {
        let (row, col) = self.textarea.cursor();
        let line = self.textarea.lines().get(row)?;
        let (start, end) = find_word_boundaries(line, col)?;
        Some(WordRange { row, start, end })
    }

    fn text_in_range(&self, range: &WordRange) -> String {
        self.textarea
            .lines()
            .get(range.row)
            .map(|line| slice_chars(line, range.start, range.end))
            .unwrap_or_default()
    }
}

fn slice_chars(line: &str, from: usize, to: usize) -> String {
    line.chars().skip(from).take(to.saturating_sub(from)).collect()
}

/// Word boundaries (char columns, end exclusive) around `cursor_pos`.
///
/// A cursor just past the end of a word still counts as on it. Apostrophes
/// join word characters ("don't") but are not kept at either edge.
pub fn find_word_boundaries(line: &str, cursor_pos: usize) -> Option<(usize, usize)> {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();

    let check_pos = if cursor_pos < len && is_word_char(chars[cursor_pos]) {
        cursor_pos
    } else if cursor_pos > 0 && cursor_pos <= len && is_word_char(chars[cursor_pos - 1]) {
        cursor_pos - 1
    } else {
        return None;
    };

    let mut start = check_pos;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }

    let mut end = check_pos + 1;
    while end < len && is_word_char(chars[end]) {
        end += 1;
    }

    while start < end && chars[start] == '\'' {
        start += 1;
    }
    while end > start && chars[end - 1] == '\'' {
        end -= 1;
    }

    (start < end).then_some((start, end))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\''
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod document_tests;
