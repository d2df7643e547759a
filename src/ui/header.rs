//! Header bar: brand and section navigation

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::state::NavState;
use crate::catalog::{Catalog, SectionId};
use crate::theme::Theme;

/// Brand text: "HKP HUB" on the landing view, "HKP | CSS" inside a section
pub fn brand(section: SectionId) -> String {
    if section.is_home() {
        "HKP HUB".to_string()
    } else {
        format!("HKP | {}", section.as_str().to_uppercase())
    }
}

/// Draw the header
pub fn draw(frame: &mut Frame, area: Rect, catalog: &Catalog, nav: &NavState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border))
        .style(theme.page());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [brand_area, tabs_area] =
        Layout::horizontal([Constraint::Length(24), Constraint::Min(10)]).areas(inner);

    let current = nav.current_section();
    let brand_lines = vec![
        Line::from(Span::styled(
            brand(current),
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Student Knowledge Hub", theme.muted())),
    ];
    frame.render_widget(Paragraph::new(brand_lines), brand_area);

    // Short ids keep every tab on screen at 80 columns
    let mut titles = vec![Line::from("HOME")];
    titles.extend(catalog.sections().iter().map(|s| Line::from(s.id.as_str().to_uppercase())));

    // A section missing from the catalog has no tab
    let selected = if current.is_home() {
        0
    } else {
        catalog.position(current).map_or(usize::MAX, |p| p + 1)
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(theme.muted())
        .highlight_style(
            Style::default()
                .fg(theme.accent_primary)
                .bg(theme.bg_secondary)
                .add_modifier(Modifier::BOLD),
        )
        .divider("");
    frame.render_widget(tabs, tabs_area);
}
