//! Synonym picker
//!
//! Quick-pick popup listing the selection followed by its synonyms. Typing
//! filters the list; Enter replaces the selection, Esc leaves it alone.

mod matcher;
pub mod picker_events;
pub mod picker_render;
mod picker_state;

pub use picker_state::{MAX_VISIBLE_CHOICES, PickerState};
