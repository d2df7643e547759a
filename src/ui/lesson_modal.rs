//! Lesson overlay: one topic with previous/next navigation

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use crate::app::state::LessonState;
use crate::app::view::LessonView;
use crate::syntax;
use crate::theme::Theme;

/// Body lines of a lesson, wrapped to `width`
pub fn lesson_lines(
    lesson: &LessonView,
    width: usize,
    theme: &Theme,
    highlight: bool,
    accent: Color,
) -> Vec<Line<'static>> {
    let width = width.max(10);
    let mut lines = vec![
        Line::from(Span::styled(
            lesson.eyebrow().to_uppercase(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(lesson.topic.title.clone(), theme.heading())),
        Line::from(""),
    ];

    let body_style = Style::default().fg(theme.fg_primary);
    for paragraph in lesson.topic.content.lines() {
        if paragraph.trim().is_empty() {
            lines.push(Line::from(""));
            continue;
        }
        for wrapped in textwrap::wrap(paragraph, width) {
            lines.push(Line::from(Span::styled(wrapped.into_owned(), body_style)));
        }
    }

    if let Some(snippet) = lesson.topic.snippet() {
        lines.push(Line::from(""));
        let label = "PRACTICAL EXAMPLE";
        let hint = "[y] COPY CODE";
        let gap = width.saturating_sub(label.len() + hint.len() + 2).max(1);
        lines.push(Line::from(vec![
            Span::styled(format!(" {}", label), Style::default().fg(theme.fg_muted).bg(theme.code_bg)),
            Span::styled(" ".repeat(gap), Style::default().bg(theme.code_bg)),
            Span::styled(format!("{} ", hint), Style::default().fg(theme.fg_muted).bg(theme.code_bg)),
        ]));

        let language = lesson.section.id.snippet_language();
        let code = if highlight {
            syntax::highlight_snippet(snippet, language, theme)
        } else {
            syntax::plain_snippet(snippet, theme)
        };
        lines.extend(code.into_iter().map(|mut line| {
            line.spans.insert(0, Span::styled(" ", Style::default().bg(theme.code_bg)));
            line
        }));
    }

    lines
}

/// Previous / Next buttons, dimmed when unavailable
fn button_line(lesson: &LessonView, theme: &Theme, accent: Color, width: usize) -> Line<'static> {
    let previous = "[←] PREVIOUS";
    let next = " NEXT TOPIC [→] ";

    let previous_style =
        if lesson.has_previous { Style::default().fg(theme.fg_primary) } else { theme.disabled() };
    let next_style = if lesson.has_next {
        Style::default().fg(theme.bg_primary).bg(accent).add_modifier(Modifier::BOLD)
    } else {
        theme.disabled().bg(theme.bg_tertiary)
    };

    let gap = width.saturating_sub(previous.chars().count() + next.chars().count()).max(1);
    Line::from(vec![
        Span::styled(previous, previous_style),
        Span::raw(" ".repeat(gap)),
        Span::styled(next, next_style),
    ])
}

pub fn draw(
    frame: &mut Frame,
    area: Rect,
    lesson: &LessonView,
    scroll: &mut LessonState,
    theme: &Theme,
    highlight: bool,
) {
    let accent = lesson.section.accent_color().unwrap_or(theme.accent_primary);
    let modal = centered_rect(85, 90, area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(format!(" {} {} ", lesson.section.icon, lesson.section.title))
        .title_bottom(Line::from(" [Esc] close ").alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .style(theme.surface());
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let [body_area, _, buttons_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
            .areas(inner);

    // Reserve 1 column for padding on each side
    let body_area = Rect {
        x: body_area.x + 1,
        width: body_area.width.saturating_sub(2),
        ..body_area
    };
    let lines = lesson_lines(lesson, body_area.width as usize, theme, highlight, accent);

    // Update state with content metrics for scroll clamping
    scroll.total_lines = lines.len();
    scroll.visible_height = body_area.height as usize;
    scroll.clamp_scroll();

    let visible: Vec<Line> =
        lines.into_iter().skip(scroll.scroll_offset).take(scroll.visible_height).collect();
    frame.render_widget(Paragraph::new(visible), body_area);

    let buttons_area = Rect {
        x: buttons_area.x + 1,
        width: buttons_area.width.saturating_sub(2),
        ..buttons_area
    };
    frame.render_widget(
        Paragraph::new(button_line(lesson, theme, accent, buttons_area.width as usize)),
        buttons_area,
    );
}
