//! lexi library - dictionary hovers and synonym substitution for a terminal editor
//!
//! The dictionary core (`dictionary`, `host`) knows nothing about terminals;
//! the editor modules drive it through the `EditorHost` adapter.

pub mod app;
pub mod config;
pub mod dictionary;
pub mod document;
pub mod error;
pub mod host;
pub mod hover;
pub mod notification;
pub mod picker;
pub mod theme;
pub mod widgets;
pub mod worker;

#[cfg(test)]
pub mod test_utils;

pub use app::App;
pub use config::Config;
