use tui_textarea::TextArea;

use super::matcher::ChoiceMatcher;
use crate::theme;

/// Maximum number of choices shown in the popup at once.
pub const MAX_VISIBLE_CHOICES: usize = 10;

fn create_filter_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(ratatui::style::Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea
}

/// State of the synonym picker popup.
///
/// The first choice is always the original selection, so accepting it
/// leaves the document unchanged.
#[derive(Debug)]
pub struct PickerState {
    choices: Vec<String>,
    filtered_indices: Vec<usize>,
    filter_textarea: TextArea<'static>,
    selected_index: usize,
    scroll_offset: usize,
    visible: bool,
    matcher: ChoiceMatcher,
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PickerState {
    pub fn new() -> Self {
        Self {
            choices: Vec::new(),
            filtered_indices: Vec::new(),
            filter_textarea: create_filter_textarea(),
            selected_index: 0,
            scroll_offset: 0,
            visible: false,
            matcher: ChoiceMatcher::new(),
        }
    }

    /// Show the popup with a fresh list of choices.
    pub fn open(&mut self, choices: Vec<String>) {
        self.clear_filter();
        self.filtered_indices = (0..choices.len()).collect();
        self.choices = choices;
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.clear_filter();
        self.choices.clear();
        self.filtered_indices.clear();
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn filter_query(&self) -> &str {
        self.filter_textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn filter_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.filter_textarea
    }

    /// Called after filter input to refresh the matches.
    pub fn on_filter_changed(&mut self) {
        self.filtered_indices = self.matcher.filter(self.filter_query(), &self.choices);
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn select_next(&mut self) {
        if self.filtered_indices.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_indices.len();
        self.keep_selection_visible();
    }

    pub fn select_previous(&mut self) {
        if self.filtered_indices.is_empty() {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            self.filtered_indices.len() - 1
        } else {
            self.selected_index - 1
        };
        self.keep_selection_visible();
    }

    pub fn selected_choice(&self) -> Option<&str> {
        self.filtered_indices
            .get(self.selected_index)
            .and_then(|&idx| self.choices.get(idx))
            .map(String::as_str)
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn total_count(&self) -> usize {
        self.choices.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Whether a choice is the original selection
    pub fn is_original(&self, display_idx: usize) -> bool {
        self.filtered_indices.get(display_idx) == Some(&0)
    }

    /// Window of filtered choices around the selection, with display indices.
    pub fn visible_choices(&self) -> impl Iterator<Item = (usize, &str)> {
        self.filtered_indices
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(MAX_VISIBLE_CHOICES)
            .filter_map(|(display_idx, &idx)| {
                self.choices.get(idx).map(|c| (display_idx, c.as_str()))
            })
    }

    fn keep_selection_visible(&mut self) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + MAX_VISIBLE_CHOICES {
            self.scroll_offset = self.selected_index + 1 - MAX_VISIBLE_CHOICES;
        }
    }

    fn clear_filter(&mut self) {
        self.filter_textarea.select_all();
        self.filter_textarea.cut();
    }
}

#[cfg(test)]
#[path = "picker_state_tests.rs"]
mod picker_state_tests;
