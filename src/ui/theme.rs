//! # Theme System
//!
//! Colour pairs used by the target list.
//!
//! ## Built-in Themes
//!
//! - **Classic** (default) - cyan title, green hints, white-on-blue selection
//!   over black-on-light-gray entries
//! - **Catppuccin Mocha** - warm, dark pastel theme
//! - **Nord** - arctic, north-bluish color palette
//! - **Dracula** - dark theme with vivid colors

use ratatui::style::{Color, Style};

/// All colours used by the launcher, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Name matched (case-insensitively) against the `theme` setting.
    pub name: &'static str,

    // -- Header --
    pub title: Color,
    pub instructions: Color,

    // -- Target list --
    /// Foreground of the entry under the cursor.
    pub selected_fg: Color,
    /// Background of the entry under the cursor.
    pub selected_bg: Color,
    pub item_fg: Color,
    pub item_bg: Color,

    // -- Status footer --
    pub success: Color,
    pub error: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Classic).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    pub fn selected_style(&self) -> Style {
        Style::default().fg(self.selected_fg).bg(self.selected_bg)
    }

    pub fn item_style(&self) -> Style {
        Style::default().fg(self.item_fg).bg(self.item_bg)
    }
}

static BUILT_IN_THEMES: [Theme; 4] = [
    Theme {
        name: "Classic",
        title: Color::Cyan,
        instructions: Color::Green,
        selected_fg: Color::White,
        selected_bg: Color::Blue,
        item_fg: Color::Black,
        item_bg: Color::Gray,
        success: Color::Green,
        error: Color::Red,
    },
    Theme {
        name: "Catppuccin Mocha",
        title: Color::Rgb(137, 180, 250),        // blue
        instructions: Color::Rgb(166, 227, 161), // green
        selected_fg: Color::Rgb(30, 30, 46),     // base
        selected_bg: Color::Rgb(137, 180, 250),  // blue
        item_fg: Color::Rgb(205, 214, 244),      // text
        item_bg: Color::Rgb(49, 50, 68),         // surface0
        success: Color::Rgb(166, 227, 161),
        error: Color::Rgb(243, 139, 168),
    },
    Theme {
        name: "Nord",
        title: Color::Rgb(136, 192, 208),
        instructions: Color::Rgb(163, 190, 140),
        selected_fg: Color::Rgb(46, 52, 64),
        selected_bg: Color::Rgb(136, 192, 208),
        item_fg: Color::Rgb(216, 222, 233),
        item_bg: Color::Rgb(59, 66, 82),
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
    },
    Theme {
        name: "Dracula",
        title: Color::Rgb(139, 233, 253),
        instructions: Color::Rgb(80, 250, 123),
        selected_fg: Color::Rgb(40, 42, 54),
        selected_bg: Color::Rgb(189, 147, 249),
        item_fg: Color::Rgb(248, 248, 242),
        item_bg: Color::Rgb(68, 71, 90),
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
    },
];
