use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = frame_area.y + (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Popup hugging the top-right corner of `anchor`, one cell inside its border
pub fn top_right_popup(anchor: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(anchor.width.saturating_sub(2));
    let popup_height = height.min(anchor.height.saturating_sub(1));

    Rect {
        x: anchor.x + anchor.width.saturating_sub(popup_width + 1),
        y: anchor.y + 1,
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
