//! Hover module
//!
//! Shows the dictionary definition of the word under the cursor. Lookups
//! are debounced while the cursor moves and answered by the lookup worker;
//! Ctrl+T turns automatic hovers on and off.

mod debouncer;
pub mod hover_render;
mod hover_state;

pub use hover_render::render_popup;
pub use hover_state::{HoverState, HoverUpdate};
