//! UI rendering components

pub mod header;
pub mod home;
pub mod info_modal;
pub mod layout;
pub mod lesson_modal;
pub mod section;
pub mod status_line;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin},
    widgets::Block,
};

use crate::app::state::AppState;
use crate::app::view::{BaseView, select_view};
use crate::theme::Theme;

/// Main draw function
///
/// Draws the base page, then the lesson overlay, then the info overlay, as
/// chosen by [`select_view`].
pub fn draw(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.page()), area);

    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    // Split borrows: the view borrows the catalog while grids and scroll update
    let AppState {
        navigator,
        home: home_grid,
        section: section_grid,
        lesson,
        command_line,
        syntax_highlighting,
        ..
    } = state;
    let snapshot = navigator.snapshot();
    let view = select_view(navigator.catalog(), &snapshot);

    header::draw(frame, header_area, navigator.catalog(), &snapshot, theme);

    let page_area = body_area.inner(Margin::new(2, 1));
    match view.base {
        BaseView::Home => home::draw(frame, page_area, navigator.catalog(), home_grid, theme),
        BaseView::Section(s) => section::draw(frame, page_area, s, section_grid, theme),
        BaseView::Missing(id) => section::draw_missing(frame, page_area, id, theme),
    }

    if let Some(current) = &view.lesson {
        lesson_modal::draw(frame, area, current, lesson, theme, *syntax_highlighting);
    }

    if let Some(modal) = view.info {
        info_modal::draw(frame, area, modal, theme);
    }

    status_line::draw(frame, status_area, command_line, view.topmost(), theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::InfoModal;
    use crate::catalog::{Catalog, Section, SectionId};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(state: &mut AppState, width: u16, height: u16) -> String {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, state, &theme)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn state() -> AppState {
        AppState::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn home_shows_every_section_card() {
        let mut state = state();
        let screen = render(&mut state, 140, 50);

        assert!(screen.contains("HKP HUB"));
        for section in state.navigator.catalog().sections() {
            assert!(screen.contains(&section.title), "missing {}", section.title);
        }
        assert_eq!(state.home.columns, 3);
    }

    #[test]
    fn section_page_shows_category_headings() {
        let mut state = state();
        state.navigator.select_section(SectionId::Css);
        let screen = render(&mut state, 140, 60);

        assert!(screen.contains("HKP | CSS"));
        assert!(screen.contains("CSS Notes"));
        assert!(screen.contains("BASICS"));
        assert!(screen.contains("1. What is CSS?"));
    }

    #[test]
    fn lesson_modal_shows_title_and_eyebrow() {
        let mut state = state();
        state.navigator.select_section(SectionId::Html);
        state.navigator.open_topic(2).unwrap();
        let screen = render(&mut state, 120, 40);

        assert!(screen.contains("ELEMENTS • LESSON 3"));
        assert!(screen.contains("3. Tags & Elements"));
        assert!(screen.contains("NEXT TOPIC"));
        assert!(state.lesson.visible_height > 0);
    }

    #[test]
    fn info_modal_renders_above_lesson() {
        let mut state = state();
        state.navigator.select_section(SectionId::Linux);
        state.navigator.open_topic(0).unwrap();
        state.navigator.open_info(InfoModal::Privacy);
        let screen = render(&mut state, 120, 40);

        assert!(screen.contains("PRIVACY POLICY"));
        assert!(screen.contains("I UNDERSTAND"));
        assert!(screen.contains("Enter I understand"));
    }

    #[test]
    fn missing_section_renders_empty_page() {
        let catalog = Catalog::new(vec![Section::new(SectionId::Html, "HTML")]).unwrap();
        let mut state = AppState::new(catalog);
        state.navigator.select_section(SectionId::Java);
        let screen = render(&mut state, 80, 24);

        assert!(screen.contains("HKP | JAVA"));
        assert!(screen.contains("Nothing here yet."));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut state = state();
        state.navigator.select_section(SectionId::Os);
        state.navigator.open_topic(3).unwrap();
        render(&mut state, 20, 6);
    }
}
