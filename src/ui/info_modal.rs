//! Static information pages (privacy, rules, docs)

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::layout::centered_rect;
use crate::app::state::InfoModal;
use crate::theme::Theme;

/// Paragraphs shown for each page
pub fn paragraphs(modal: InfoModal) -> &'static [&'static str] {
    match modal {
        InfoModal::Privacy => &[
            "• HKP HUB is built for students. We do NOT collect any personal data or track your behavior.",
            "• This platform is completely free and will remain free forever for students.",
            "• We don't use cookies to serve ads. Your learning experience is uninterrupted.",
        ],
        InfoModal::Rules => &[
            "• All content is for educational purposes only. Do not use for commercial gain.",
            "• Respect the intellectual work; if you share this, please credit HKP HUB.",
            "• Learning is a community effort. Help your fellow students whenever possible.",
            "• No piracy of copyrighted software is encouraged here; we focus on open-source logic.",
        ],
        InfoModal::Docs => &[
            "SYSTEM NOTE",
            "HKP HUB is an AI-based learning platform. We utilize advanced AI technologies to \
             simplify complex topics specifically for student understanding.",
            "This site is running on AI-driven logic, which means our data is updated day-by-day \
             to ensure accuracy and relevance.",
            "We believe in constant evolution. We will keep going, making constant changes and \
             improvements to provide you with the best education experience.",
        ],
    }
}

pub fn draw(frame: &mut Frame, area: Rect, modal: InfoModal, theme: &Theme) {
    let rect = centered_rect(70, 70, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(theme.accent_secondary))
        .style(theme.surface());
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let [title_area, body_area, button_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(modal.title().to_uppercase(), theme.heading()))
            .alignment(Alignment::Center),
        title_area,
    );

    let mut lines = Vec::new();
    for (i, paragraph) in paragraphs(modal).iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        let style = if modal == InfoModal::Docs && i == 0 {
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_primary)
        };
        lines.push(Line::from(Span::styled(*paragraph, style)));
    }
    let body_area = Rect { x: body_area.x + 2, width: body_area.width.saturating_sub(4), ..body_area };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body_area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            " [Enter] I UNDERSTAND ",
            Style::default().fg(theme.bg_primary).bg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        button_area,
    );
}
