use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::theme;

/// Determines style and how long a notification stays up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Short-lived confirmation such as "Saved"
    #[default]
    Info,
    Warning,
    /// Stays until replaced or dismissed
    Error,
}

impl NotificationType {
    fn duration(self) -> Option<Duration> {
        match self {
            NotificationType::Info => Some(Duration::from_millis(1500)),
            NotificationType::Warning => Some(Duration::from_secs(5)),
            NotificationType::Error => None,
        }
    }

    fn style(self) -> NotificationStyle {
        let colors = match self {
            NotificationType::Info => &theme::notification::INFO,
            NotificationType::Warning => &theme::notification::WARNING,
            NotificationType::Error => &theme::notification::ERROR,
        };
        NotificationStyle {
            fg: colors.fg,
            bg: colors.bg,
            border: colors.border,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub style: NotificationStyle,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    /// None = permanent
    pub duration: Option<Duration>,
}

impl Notification {
    pub fn new(message: &str) -> Self {
        Self::with_type(message, NotificationType::Info)
    }

    pub fn with_type(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            style: notification_type.style(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.duration {
            Some(d) => now.saturating_duration_since(self.created_at) > d,
            None => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Info);
    }

    pub fn show_with_type(&mut self, message: &str, notification_type: NotificationType) {
        log::debug!("notification ({:?}): {}", notification_type, message);
        self.current = Some(Notification::with_type(message, notification_type));
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Warning);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Error);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Clear an expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        self.clear_if_expired_at(Instant::now())
    }

    pub fn clear_if_expired_at(&mut self, now: Instant) -> bool {
        if let Some(notif) = &self.current
            && notif.is_expired_at(now)
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
