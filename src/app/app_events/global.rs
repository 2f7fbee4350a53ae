use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;

/// Keys that work everywhere. Returns true when the key was handled.
///
/// While the picker is open only quit is global; other keys edit its filter.
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            true
        }
        _ if app.picker.is_visible() => false,
        KeyCode::Char('s') => {
            app.save();
            true
        }
        KeyCode::Char('t') => {
            app.hover.toggle();
            let state = if app.hover.enabled { "on" } else { "off" };
            app.notification.show(&format!("Hover {}", state));
            true
        }
        KeyCode::Char('k') => {
            app.open_synonyms();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
