//! Layout utilities and common components

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::theme::Theme;

/// Card height on the home and section grids, borders included
pub const CARD_HEIGHT: u16 = 6;

/// Narrowest a card may get before the grid drops a column
const CARD_MIN_WIDTH: u16 = 30;

/// Rectangle of the given percentage size, centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center).areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center).areas(area);
    area
}

/// Number of card columns that fit in `width`, capped at `max`
pub fn grid_columns(width: u16, max: usize) -> usize {
    ((width / CARD_MIN_WIDTH) as usize).clamp(1, max.max(1))
}

/// Split one grid row into `columns` equal cells
pub fn row_cells(area: Rect, columns: usize) -> Vec<Rect> {
    let constraints = vec![Constraint::Ratio(1, columns as u32); columns];
    Layout::horizontal(constraints).spacing(1).split(area).to_vec()
}

/// First row to show so that `selected_row` stays visible
pub fn scroll_to_row(offset: usize, selected_row: usize, visible_rows: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    if selected_row < offset {
        selected_row
    } else if selected_row >= offset + visible_rows {
        selected_row + 1 - visible_rows
    } else {
        offset
    }
}

/// Content of one card
pub struct Card<'a> {
    pub icon: &'a str,
    pub title: &'a str,
    pub body: &'a str,
    pub footer: String,
    pub accent: Color,
}

/// Draw a bordered card, highlighted when selected
pub fn draw_card(frame: &mut Frame, area: Rect, card: &Card, selected: bool, theme: &Theme) {
    let (border_style, border_type) = if selected {
        (Style::default().fg(card.accent).add_modifier(Modifier::BOLD), BorderType::Thick)
    } else {
        (Style::default().fg(theme.border), BorderType::Rounded)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(theme.surface());

    let title_style = if selected {
        Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(" {} ", card.icon),
            Style::default().fg(theme.bg_primary).bg(card.accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(card.title.to_string(), title_style),
    ])];
    if !card.body.is_empty() {
        lines.push(Line::from(Span::styled(card.body.to_string(), theme.muted())));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body_area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            card.footer.clone(),
            Style::default().fg(card.accent).add_modifier(Modifier::BOLD),
        )),
        footer_area,
    );
}
