use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

const MARGIN: u16 = 2;
const NOTIFICATION_HEIGHT: u16 = 3;
/// Status bar rows kept clear below the notification
const STATUS_BAR_HEIGHT: u16 = 1;

/// Render the current notification in the bottom-right corner of the frame
///
/// Called after the rest of the UI so it draws on top.
pub fn render_notification(frame: &mut Frame, notification: &NotificationState) -> Option<Rect> {
    let notif = notification.current()?;
    let style = &notif.style;
    let frame_area = frame.area();

    let max_width = frame_area.width.saturating_sub(MARGIN * 2);
    let content_width = u16::try_from(notif.message.chars().count()).unwrap_or(u16::MAX);
    let width = content_width.saturating_add(4).min(max_width);

    let height = NOTIFICATION_HEIGHT;
    let bottom = frame_area
        .bottom()
        .saturating_sub(STATUS_BAR_HEIGHT + MARGIN / 2);

    let area = Rect {
        x: frame_area.right().saturating_sub(width + MARGIN),
        y: bottom.saturating_sub(height),
        width,
        height: height.min(frame_area.height),
    };

    if area.width < 5 || area.height < NOTIFICATION_HEIGHT || area.y < frame_area.y {
        return None;
    }

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
    Some(area)
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
