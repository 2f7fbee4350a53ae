use ratatui::crossterm::event::{KeyCode, KeyEvent};
use tui_textarea::Input;

use crate::app::App;

/// Handle keys while the picker is open
pub fn handle_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down => app.picker.select_next(),
        KeyCode::Up => app.picker.select_previous(),

        KeyCode::Enter | KeyCode::Tab => {
            if let Some(choice) = app.picker.selected_choice() {
                let choice = choice.to_string();
                app.apply_synonym(&choice);
            }
            app.picker.close();
        }

        KeyCode::Esc => app.picker.close(),

        // Everything else edits the filter
        _ => {
            if app.picker.filter_textarea_mut().input(Input::from(key)) {
                app.picker.on_filter_changed();
            }
        }
    }
}

#[cfg(test)]
#[path = "picker_events_tests.rs"]
mod picker_events_tests;
