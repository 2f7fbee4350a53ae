//! Centralized theme configuration for all UI components.
//!
//! Render files use `theme::module::CONSTANT` instead of hardcoding
//! `Color::*` values.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HOVER: Color = Color::Rgb(45, 45, 72);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const MAGENTA: Color = Color::Rgb(198, 120, 221);
    pub const RED: Color = Color::Rgb(224, 108, 117);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Editor pane styles
pub mod editor {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BORDER_MODIFIED: Color = palette::YELLOW;
    pub const TEXT: Color = palette::TEXT;
    pub const SELECTION: Style = Style::new().bg(Color::Rgb(55, 55, 85));
    pub const TITLE: Style = Style::new().fg(palette::CYAN).add_modifier(Modifier::BOLD);
}

/// Definition hover popup styles
pub mod hover {
    use super::*;

    pub const BORDER: Color = palette::MAGENTA;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const WORD: Style = Style::new().fg(palette::CYAN).add_modifier(Modifier::BOLD);
    pub const PART_OF_SPEECH: Style = Style::new()
        .fg(palette::YELLOW)
        .add_modifier(Modifier::ITALIC);
    pub const DEFINITION: Color = palette::TEXT;
    pub const DISMISS_HINT: Color = palette::TEXT_DIM;
}

/// Synonym picker styles
pub mod picker {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;

    pub const ITEM_SELECTED_BG: Color = palette::BG_HOVER;
    pub const ITEM_SELECTED_FG: Color = palette::CYAN;
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;

    pub const ITEM_NORMAL_BG: Color = palette::BG_DARK;
    pub const ITEM_NORMAL_FG: Color = Color::Rgb(180, 182, 200);

    /// The selection itself, listed first
    pub const ORIGINAL: Color = palette::TEXT_MUTED;

    pub const NO_MATCHES: Color = palette::TEXT_DIM;

    pub const FILTER_TEXT: Color = palette::TEXT;
    pub const FILTER_BG: Color = palette::BG_DARK;
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: Color::Rgb(55, 55, 85),
        border: palette::TEXT_MUTED,
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: palette::BG_DARK,
        bg: palette::YELLOW,
        border: palette::YELLOW,
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::RED,
        border: Color::Rgb(255, 135, 145),
    };
}

/// Bottom status bar styles
pub mod status_bar {
    use super::*;

    pub const FILE_NAME: Color = palette::TEXT;
    pub const LOADING: Color = palette::MAGENTA;
    pub const HINTS: Color = palette::TEXT_MUTED;
}

/// Border hint utilities - for building styled keyboard shortcuts
pub mod border_hints {
    use super::*;
    use ratatui::text::{Line, Span};

    /// Key in full color, description dimmed
    pub fn hint(key: &'static str, desc: &'static str, color: Color) -> Vec<Span<'static>> {
        vec![
            Span::styled(key, Style::new().fg(color)),
            Span::styled(
                format!(" {} ", desc),
                Style::new().fg(color).add_modifier(Modifier::DIM),
            ),
        ]
    }

    pub fn separator(color: Color) -> Span<'static> {
        Span::styled("• ", Style::new().fg(color).add_modifier(Modifier::DIM))
    }

    /// Build a line with multiple hints separated by dots
    pub fn build_hints(hints: &[(&'static str, &'static str)], color: Color) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(separator(color));
            }
            spans.extend(hint(key, desc, color));
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_hints_joins_with_separator() {
        let line = border_hints::build_hints(&[("Ctrl+S", "Save"), ("Ctrl+Q", "Quit")], palette::TEXT);
        assert_eq!(line.to_string(), " Ctrl+S Save • Ctrl+Q Quit ");
    }

    #[test]
    fn test_build_hints_empty() {
        let line = border_hints::build_hints(&[], palette::TEXT);
        assert_eq!(line.to_string(), " ");
    }
}
