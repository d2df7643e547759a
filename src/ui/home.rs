//! Landing view: hero banner and a card per section

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::layout::{CARD_HEIGHT, Card, draw_card, grid_columns, row_cells, scroll_to_row};
use crate::app::state::GridState;
use crate::catalog::Catalog;
use crate::theme::Theme;

const HERO_HEIGHT: u16 = 5;
const FOOTER_HEIGHT: u16 = 3;

const TAGLINE: &str = "A simplified digital library empowering students with the skills of tomorrow.";
const CONTACTS: &str =
    "github.com/HarshithPathipaka-Git · linkedin.com/in/harshithpathipaka · hkphub@gmail.com";
const COPYRIGHT: &str = "© HKP HUB Student Portal · [P] Privacy · [R] Rules · [D] Docs";

pub fn draw(frame: &mut Frame, area: Rect, catalog: &Catalog, grid: &mut GridState, theme: &Theme) {
    let hero_height = if area.height > HERO_HEIGHT + CARD_HEIGHT { HERO_HEIGHT } else { 0 };
    // Footer only when every card row fits above it
    let rows_needed = catalog.len().div_ceil(grid_columns(area.width, 3)) as u16;
    let needed = hero_height.saturating_add(rows_needed.saturating_mul(CARD_HEIGHT));
    let footer_height =
        if area.height >= needed.saturating_add(FOOTER_HEIGHT) {
            FOOTER_HEIGHT
        } else {
            0
        };
    let [hero_area, grid_area, footer_area] = Layout::vertical([
        Constraint::Length(hero_height),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .areas(area);

    draw_hero(frame, hero_area, theme);
    draw_footer(frame, footer_area, theme);

    let columns = grid_columns(grid_area.width, 3);
    grid.columns = columns;
    grid.clamp(catalog.len());

    let visible_rows = (grid_area.height / CARD_HEIGHT) as usize;
    grid.scroll_offset = scroll_to_row(grid.scroll_offset, grid.selected / columns, visible_rows);

    let rows = catalog.sections().chunks(columns).enumerate().skip(grid.scroll_offset);
    for (visible, (row, sections)) in rows.take(visible_rows).enumerate() {
        let row_area = Rect {
            y: grid_area.y + visible as u16 * CARD_HEIGHT,
            height: CARD_HEIGHT,
            ..grid_area
        };
        let cells = row_cells(row_area, columns);

        for (col, section) in sections.iter().enumerate() {
            let lessons = section.topics.len();
            let card = Card {
                icon: &section.icon,
                title: &section.title,
                body: &section.short_desc,
                footer: format!(
                    "Start learning → {} lesson{}",
                    lessons,
                    if lessons == 1 { "" } else { "s" }
                ),
                accent: section.accent_color().unwrap_or(theme.accent_primary),
            };
            draw_card(frame, cells[col], &card, row * columns + col == grid.selected, theme);
        }
    }
}

fn draw_hero(frame: &mut Frame, area: Rect, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    let lines = vec![
        Line::from(Span::styled(
            "LEARNING SIMPLIFIED FOR STUDENTS",
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "HKP HUB",
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "The ultimate student guide for programming languages, OS installation, and Linux \
             commands. Explained in simple words.",
            theme.muted(),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    let lines = vec![
        Line::from(Span::styled(TAGLINE, theme.muted())),
        Line::from(Span::styled(CONTACTS, Style::default().fg(theme.fg_primary))),
        Line::from(Span::styled(COPYRIGHT, theme.muted())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
