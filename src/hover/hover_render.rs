use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::hover_state::HoverState;
use crate::theme;
use crate::widgets::popup;

const HOVER_MIN_WIDTH: u16 = 30;
const HOVER_MAX_WIDTH: u16 = 72;
const HOVER_BORDER_HEIGHT: u16 = 2;
const HOVER_BORDER_WIDTH: u16 = 4; // left border + padding + right border + padding
const HOVER_MAX_HEIGHT: u16 = 18;
const DEFINITION_INDENT: &str = "  ";

/// Kind of hover line, from its markdown prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Word,
    PartOfSpeech,
    Definition,
}

fn classify(line: &str) -> (LineKind, &str) {
    if let Some(rest) = line.strip_prefix("## ") {
        (LineKind::PartOfSpeech, rest)
    } else if let Some(rest) = line.strip_prefix("# ") {
        (LineKind::Word, rest)
    } else {
        (LineKind::Definition, line)
    }
}

fn style_for(kind: LineKind) -> Style {
    match kind {
        LineKind::Word => theme::hover::WORD,
        LineKind::PartOfSpeech => theme::hover::PART_OF_SPEECH,
        LineKind::Definition => Style::default().fg(theme::hover::DEFINITION),
    }
}

fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if text.chars().count() <= max_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.chars().count() + 1 + word.chars().count() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Styled, wrapped lines for the popup body
fn build_lines(hover_lines: &[String], max_width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut seen_part_of_speech = false;

    for raw in hover_lines {
        let (kind, text) = classify(raw);
        let style = style_for(kind);

        // Blank line between part-of-speech blocks, not under the word
        if kind == LineKind::PartOfSpeech {
            if seen_part_of_speech {
                lines.push(Line::from(""));
            }
            seen_part_of_speech = true;
        }

        let (indent, width) = match kind {
            LineKind::Definition => (
                DEFINITION_INDENT,
                max_width.saturating_sub(DEFINITION_INDENT.len()).max(1),
            ),
            _ => ("", max_width.max(1)),
        };

        for wrapped in wrap_text(text, width) {
            lines.push(Line::from(vec![
                Span::raw(indent),
                Span::styled(wrapped, style),
            ]));
        }
    }

    lines
}

/// Render the hover popup in the top-right corner of the editor
///
/// Returns the popup area for region tracking.
pub fn render_popup(hover: &HoverState, frame: &mut Frame, editor_area: Rect) -> Option<Rect> {
    if !hover.should_show() {
        return None;
    }
    let hover_lines = hover.lines()?;

    let content_width = hover_lines
        .iter()
        .map(|l| classify(l).1.chars().count() + DEFINITION_INDENT.len())
        .max()
        .unwrap_or(0);
    let max_allowed_width = (editor_area.width * 3) / 4;
    let popup_width = (u16::try_from(content_width).unwrap_or(u16::MAX))
        .saturating_add(HOVER_BORDER_WIDTH)
        .clamp(HOVER_MIN_WIDTH, HOVER_MAX_WIDTH)
        .min(max_allowed_width);

    let inner_width = popup_width.saturating_sub(HOVER_BORDER_WIDTH) as usize;
    let body = build_lines(hover_lines, inner_width);

    let popup_height = (u16::try_from(body.len()).unwrap_or(u16::MAX))
        .saturating_add(HOVER_BORDER_HEIGHT)
        .min(HOVER_MAX_HEIGHT)
        .min(editor_area.height.saturating_sub(1));

    let popup_area = popup::top_right_popup(editor_area, popup_width, popup_height);
    if popup_area.width < HOVER_BORDER_WIDTH || popup_area.height <= HOVER_BORDER_HEIGHT {
        return None;
    }

    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" definition ")
        .title_bottom(
            Line::styled(" Ctrl+T hide ", Style::default().fg(theme::hover::DISMISS_HINT))
                .right_aligned(),
        )
        .border_style(Style::default().fg(theme::hover::BORDER))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme::hover::BACKGROUND));

    let paragraph = Paragraph::new(Text::from(body)).block(block);
    frame.render_widget(paragraph, popup_area);

    Some(popup_area)
}

#[cfg(test)]
#[path = "hover_render_tests.rs"]
mod hover_render_tests;
