//! Tests for notification_render

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::*;

fn render(notification: &NotificationState, width: u16, height: u16) -> (String, Option<Rect>) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut area = None;
    terminal
        .draw(|f| area = render_notification(f, notification))
        .unwrap();
    (terminal.backend().to_string(), area)
}

#[test]
fn test_renders_message() {
    let mut notification = NotificationState::new();
    notification.show("Saved notes.txt");

    let (output, area) = render(&notification, 80, 24);
    assert!(output.contains("Saved notes.txt"));

    let area = area.unwrap();
    assert_eq!(area.height, 3);
    assert_eq!(area.width, "Saved notes.txt".len() as u16 + 4);
}

#[test]
fn test_positioned_bottom_right_above_status_bar() {
    let mut notification = NotificationState::new();
    notification.show_warning("No synonyms found for qwxz");

    let (_, area) = render(&notification, 100, 30);
    let area = area.unwrap();

    assert_eq!(area.right(), 98);
    assert_eq!(area.bottom(), 28);
}

#[test]
fn test_nothing_without_notification() {
    let notification = NotificationState::new();
    let (output, area) = render(&notification, 80, 24);

    assert!(area.is_none());
    assert!(!output.chars().any(char::is_alphanumeric));
}

#[test]
fn test_long_message_is_clamped_to_frame() {
    let mut notification = NotificationState::new();
    notification.show_error(&"x".repeat(200));

    let (_, area) = render(&notification, 60, 20);
    assert_eq!(area.unwrap().width, 56);
}

#[test]
fn test_tiny_frame_skips_notification() {
    let mut notification = NotificationState::new();
    notification.show("hi");

    let (_, area) = render(&notification, 4, 3);
    assert!(area.is_none());
}
