use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::theme;
use crate::theme::border_hints;

const SCRATCH_TITLE: &str = "[scratch]";

const HINTS: &[(&str, &str)] = &[
    ("Ctrl+S", "Save"),
    ("Ctrl+K", "Synonyms"),
    ("Ctrl+T", "Hover"),
    ("Ctrl+Q", "Quit"),
];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());
        let (editor_area, status_area) = (layout[0], layout[1]);

        self.render_editor(frame, editor_area);
        self.render_status_bar(frame, status_area);

        if !self.picker.is_visible() {
            crate::hover::render_popup(&self.hover, frame, editor_area);
        }
        crate::picker::picker_render::render_popup(&mut self.picker, frame, editor_area);

        render_notification(frame, &self.notification);
    }

    fn render_editor(&mut self, frame: &mut Frame, area: Rect) {
        let name = self
            .document
            .path()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| SCRATCH_TITLE.to_string());

        let (title, border) = if self.document.is_modified() {
            (format!(" {} ● ", name), theme::editor::BORDER_MODIFIED)
        } else {
            (format!(" {} ", name), theme::editor::BORDER)
        };

        self.document.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(title, theme::editor::TITLE))
                .border_style(Style::default().fg(border)),
        );
        self.document
            .textarea
            .set_style(Style::default().fg(theme::editor::TEXT));

        frame.render_widget(&self.document.textarea, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let (row, col) = self.document.cursor();
        let position = format!("Ln {}, Col {} ", row + 1, col + 1);

        let mut right = Vec::new();
        if self.hover.is_loading()
            && let Some(word) = self.hover.word()
        {
            right.push(Span::styled(
                format!("looking up '{}'… ", word),
                Style::default().fg(theme::status_bar::LOADING),
            ));
        }
        if !self.hover.enabled {
            right.push(Span::styled(
                "hover off ",
                Style::default().fg(theme::status_bar::HINTS),
            ));
        }
        right.push(Span::styled(
            position,
            Style::default().fg(theme::status_bar::FILE_NAME),
        ));

        let right_line = Line::from(right);
        let right_width = u16::try_from(right_line.width()).unwrap_or(u16::MAX);
        let layout = Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)])
            .split(area);

        frame.render_widget(
            Paragraph::new(border_hints::build_hints(HINTS, theme::status_bar::HINTS)),
            layout[0],
        );
        frame.render_widget(Paragraph::new(right_line.right_aligned()), layout[1]);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
