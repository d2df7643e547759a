//! Slate theme: dark blue-grey with a blue accent

use ratatui::style::Color;

use super::Theme;

/// Slate color palette
pub const SLATE: Theme = Theme {
    name: String::new(),

    // Background colors
    bg_primary: Color::Rgb(15, 23, 42),   // #0f172a
    bg_secondary: Color::Rgb(30, 41, 59), // #1e293b
    bg_tertiary: Color::Rgb(51, 65, 85),  // #334155

    // Foreground colors
    fg_primary: Color::Rgb(203, 213, 225),   // #cbd5e1
    fg_secondary: Color::Rgb(241, 245, 249), // #f1f5f9
    fg_muted: Color::Rgb(100, 116, 139),     // #64748b

    // Accent colors
    accent_primary: Color::Rgb(59, 130, 246),   // #3b82f6
    accent_secondary: Color::Rgb(139, 92, 246), // #8b5cf6

    // Semantic colors
    success: Color::Rgb(34, 197, 94), // #22c55e
    error: Color::Rgb(239, 68, 68),   // #ef4444

    // Code examples
    code_bg: Color::Rgb(2, 6, 23),       // #020617
    code_fg: Color::Rgb(134, 239, 172), // #86efac

    // Syntax highlighting fallback
    syntax_keyword: Color::Rgb(192, 132, 252),  // #c084fc
    syntax_string: Color::Rgb(134, 239, 172),   // #86efac
    syntax_number: Color::Rgb(251, 146, 60),    // #fb923c
    syntax_comment: Color::Rgb(100, 116, 139),  // #64748b
    syntax_tag: Color::Rgb(96, 165, 250),       // #60a5fa
    syntax_operator: Color::Rgb(148, 163, 184), // #94a3b8

    // UI elements
    border: Color::Rgb(51, 65, 85),           // #334155
};

impl Theme {
    pub fn slate() -> Self {
        Theme { name: "Slate".to_string(), ..SLATE }
    }
}
