use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use super::picker_state::{MAX_VISIBLE_CHOICES, PickerState};
use crate::theme;
use crate::widgets::popup;

pub const PICKER_FILTER_HEIGHT: u16 = 3;
const PICKER_MIN_WIDTH: u16 = 28;
const PICKER_MAX_WIDTH: u16 = 50;
/// Selection marker, padding and borders around a choice
const CHOICE_CHROME_WIDTH: u16 = 8;

/// Render the synonym picker centered over the editor
///
/// Returns the popup area for region tracking.
pub fn render_popup(picker: &mut PickerState, frame: &mut Frame, editor_area: Rect) -> Option<Rect> {
    if !picker.is_visible() {
        return None;
    }

    let widest = picker
        .visible_choices()
        .map(|(_, choice)| choice.chars().count())
        .max()
        .unwrap_or(0);
    let width = u16::try_from(widest)
        .unwrap_or(u16::MAX)
        .saturating_add(CHOICE_CHROME_WIDTH)
        .clamp(PICKER_MIN_WIDTH, PICKER_MAX_WIDTH);

    let visible_count = picker.filtered_count().min(MAX_VISIBLE_CHOICES) as u16;
    let list_height = visible_count.max(1) + 2;
    let popup_area = popup::centered_popup(editor_area, width, list_height + PICKER_FILTER_HEIGHT);
    if popup_area.height < PICKER_FILTER_HEIGHT + 3 {
        return None;
    }

    popup::clear_area(frame, popup_area);

    let layout = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(PICKER_FILTER_HEIGHT),
    ])
    .split(popup_area);
    let (list_area, filter_area) = (layout[0], layout[1]);

    let title = format!(
        " Synonyms ({}/{}) ",
        picker.filtered_count(),
        picker.total_count()
    );

    let max_text_len = (list_area.width as usize).saturating_sub(6);

    let items: Vec<ListItem> = if picker.filtered_count() == 0 {
        vec![ListItem::new(Line::from(Span::styled(
            "   No matches",
            Style::default().fg(theme::picker::NO_MATCHES),
        )))]
    } else {
        picker
            .visible_choices()
            .map(|(display_idx, choice)| {
                let display_text = if choice.chars().count() > max_text_len {
                    let truncated: String = choice.chars().take(max_text_len).collect();
                    format!("{}…", truncated)
                } else {
                    choice.to_string()
                };

                let line = if display_idx == picker.selected_index() {
                    Line::from(Span::styled(
                        format!(" ► {} ", display_text),
                        Style::default()
                            .fg(theme::picker::ITEM_SELECTED_FG)
                            .bg(theme::picker::ITEM_SELECTED_BG)
                            .add_modifier(theme::picker::ITEM_SELECTED_MODIFIER),
                    ))
                } else {
                    let fg = if picker.is_original(display_idx) {
                        theme::picker::ORIGINAL
                    } else {
                        theme::picker::ITEM_NORMAL_FG
                    };
                    Line::from(Span::styled(
                        format!("   {} ", display_text),
                        Style::default().fg(fg).bg(theme::picker::ITEM_NORMAL_BG),
                    ))
                };

                ListItem::new(line)
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(theme::picker::BORDER))
        .style(Style::default().bg(theme::picker::BACKGROUND));

    frame.render_widget(List::new(items).block(block), list_area);

    let filter_textarea = picker.filter_textarea_mut();
    filter_textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Filter ")
            .title_bottom(Line::from(" Enter replace • Esc cancel ").right_aligned())
            .border_style(Style::default().fg(theme::picker::BORDER))
            .style(Style::default().bg(theme::picker::BACKGROUND)),
    );
    filter_textarea.set_style(
        Style::default()
            .fg(theme::picker::FILTER_TEXT)
            .bg(theme::picker::FILTER_BG),
    );
    frame.render_widget(&*filter_textarea, filter_area);

    Some(popup_area)
}

#[cfg(test)]
#[path = "picker_render_tests.rs"]
mod picker_render_tests;
