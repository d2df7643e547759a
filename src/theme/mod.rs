//! Theming system for HKP Hub

mod slate;

pub use slate::SLATE;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// A color theme for the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub error: Color,

    // Code examples
    pub code_bg: Color,
    pub code_fg: Color,

    // Syntax highlighting fallback
    pub syntax_keyword: Color,
    pub syntax_string: Color,
    pub syntax_number: Color,
    pub syntax_comment: Color,
    pub syntax_tag: Color,
    pub syntax_operator: Color,

    // UI elements
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::slate()
    }
}

impl Theme {
    /// Built-in theme by name, ignoring case
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "slate" => Some(Theme::slate()),
            _ => None,
        }
    }

    /// Base page style
    pub fn page(&self) -> Style {
        Style::default().fg(self.fg_primary).bg(self.bg_primary)
    }

    /// Raised surface (cards, modals)
    pub fn surface(&self) -> Style {
        Style::default().fg(self.fg_primary).bg(self.bg_secondary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.fg_muted)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.fg_secondary).add_modifier(Modifier::BOLD)
    }

    /// Style for a disabled button
    pub fn disabled(&self) -> Style {
        Style::default().fg(self.bg_tertiary).add_modifier(Modifier::DIM)
    }
}
