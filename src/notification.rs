//! Transient messages shown over the editor
//!
//! Lookup failures, cache warnings, save confirmations and "no synonyms"
//! messages all go through here.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationState, NotificationType};
