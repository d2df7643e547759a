//! Section view: lessons grouped by category

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::layout::{CARD_HEIGHT, Card, draw_card, grid_columns, row_cells};
use crate::app::state::GridState;
use crate::catalog::{Section, SectionId, TopicRef};
use crate::theme::Theme;

const HEADER_HEIGHT: u16 = 4;
const HEADING_HEIGHT: u16 = 2;

/// One vertical slice of the section page
enum Item<'a> {
    Heading(&'a str),
    /// Cards of one grid row with their display positions and in-group numbers
    Row(Vec<(usize, usize, TopicRef<'a>)>),
}

impl Item<'_> {
    fn height(&self) -> u16 {
        match self {
            Item::Heading(_) => HEADING_HEIGHT,
            Item::Row(_) => CARD_HEIGHT,
        }
    }
}

fn build_items(section: &Section, columns: usize) -> Vec<Item<'_>> {
    let mut items = Vec::new();
    let mut position = 0;

    for group in section.group_by_category() {
        if !group.is_general() {
            items.push(Item::Heading(group.label));
        }
        for (chunk_index, chunk) in group.entries.chunks(columns).enumerate() {
            let row = chunk
                .iter()
                .enumerate()
                .map(|(offset, entry)| (position + offset, chunk_index * columns + offset + 1, *entry))
                .collect::<Vec<_>>();
            position += row.len();
            items.push(Item::Row(row));
        }
    }

    items
}

/// Line offset keeping the range `top..top + height` inside the viewport
fn scroll_into_view(offset: usize, top: usize, height: usize, viewport: usize) -> usize {
    if top < offset {
        top
    } else if top + height > offset + viewport {
        (top + height).saturating_sub(viewport)
    } else {
        offset
    }
}

/// First item start at or after `offset`, never past `limit`
///
/// Items are drawn whole, so the page always starts on an item boundary.
fn snap_to_item(offset: usize, tops: &[usize], limit: usize) -> usize {
    tops.iter().copied().find(|&top| top >= offset).map_or(limit, |top| top.min(limit))
}

pub fn draw(frame: &mut Frame, area: Rect, section: &Section, grid: &mut GridState, theme: &Theme) {
    let accent = section.accent_color().unwrap_or(theme.accent_primary);
    let [header_area, body_area] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);

    let header = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", section.icon),
                Style::default().fg(theme.bg_primary).bg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  SECTION MODULES", theme.muted()),
        ]),
        Line::from(Span::styled(format!("{} Notes", section.title), theme.heading())),
        Line::from(Span::styled(section.short_desc.clone(), theme.muted())),
    ];
    frame.render_widget(Paragraph::new(header), header_area);

    if section.topics.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No lessons yet.", theme.muted())),
            body_area,
        );
        return;
    }

    let columns = grid_columns(body_area.width, 4);
    grid.columns = columns;
    grid.clamp(section.topics.len());

    let items = build_items(section, columns);

    let tops: Vec<usize> = items
        .iter()
        .scan(0usize, |top, item| {
            let start = *top;
            *top += item.height() as usize;
            Some(start)
        })
        .collect();

    // Bring the selected card's row into view
    let selected_top = items.iter().zip(&tops).find_map(|(item, top)| match item {
        Item::Row(row) if row.iter().any(|(pos, _, _)| *pos == grid.selected) => Some(*top),
        _ => None,
    });
    if let Some(top) = selected_top {
        let offset = scroll_into_view(
            grid.scroll_offset,
            top,
            CARD_HEIGHT as usize,
            body_area.height as usize,
        );
        grid.scroll_offset = snap_to_item(offset, &tops, top);
    }

    let mut y = 0usize;
    let bottom = grid.scroll_offset + body_area.height as usize;
    for item in &items {
        let height = item.height() as usize;
        if y < grid.scroll_offset || y + height > bottom {
            y += height;
            continue;
        }

        let item_area = Rect {
            y: body_area.y + (y - grid.scroll_offset) as u16,
            height: item.height(),
            ..body_area
        };
        match item {
            Item::Heading(label) => {
                let line = Line::from(vec![
                    Span::styled("▌ ", Style::default().fg(accent)),
                    Span::styled(label.to_uppercase(), theme.heading()),
                ]);
                frame.render_widget(Paragraph::new(vec![Line::from(""), line]), item_area);
            }
            Item::Row(row) => {
                let cells = row_cells(item_area, columns);
                for (cell, (position, number, entry)) in cells.iter().zip(row) {
                    let number = number.to_string();
                    let card = Card {
                        icon: &number,
                        title: &entry.topic.title,
                        body: "",
                        footer: "Simplified Notes ›".to_string(),
                        accent,
                    };
                    draw_card(frame, *cell, &card, *position == grid.selected, theme);
                }
            }
        }
        y += height;
    }
}

/// Neutral page for a section the catalog does not define
pub fn draw_missing(frame: &mut Frame, area: Rect, id: SectionId, theme: &Theme) {
    tracing::debug!("Rendering empty page for missing section {}", id);
    frame.render_widget(Paragraph::new(Span::styled("Nothing here yet.", theme.muted())), area);
}
