//! Key dispatch
//!
//! Each key press is mapped to an [`Action`] and applied to the topmost
//! visible layer: info overlay, then lesson overlay, then the page beneath.
//! `Esc` always closes every overlay.

use crossterm::event::{KeyCode, KeyEvent};

use super::command::{Command, ParseResult, parse_command};
use super::input::{Action, key_to_action};
use super::state::{AppState, GridState, Step};
use super::view::{BaseView, Layer, select_view};
use crate::catalog::SectionId;
use crate::clipboard::Clipboard;

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl AppState {
    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent, clipboard: &mut dyn Clipboard) -> Flow {
        if self.command_line.is_input_mode() {
            return self.handle_command_key(key, clipboard);
        }

        match key_to_action(key.code, key.modifiers, self.vim_mode) {
            Some(action) => self.apply(action, clipboard),
            None => Flow::Continue,
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent, clipboard: &mut dyn Clipboard) -> Flow {
        match key.code {
            KeyCode::Esc => {
                self.command_line.exit_input_mode();
                self.navigator.handle_escape();
            }
            KeyCode::Enter => {
                let input = self.command_line.input.clone();
                self.command_line.exit_input_mode();
                return self.run_command(&input, clipboard);
            }
            KeyCode::Backspace => {
                if self.command_line.input.is_empty() {
                    self.command_line.exit_input_mode();
                } else {
                    self.command_line.delete_char();
                }
            }
            KeyCode::Left => self.command_line.move_left(),
            KeyCode::Right => self.command_line.move_right(),
            KeyCode::Char(c) => self.command_line.insert_char(c),
            _ => {}
        }
        Flow::Continue
    }

    /// Parse and execute a command line entry
    pub fn run_command(&mut self, input: &str, clipboard: &mut dyn Clipboard) -> Flow {
        let command = match parse_command(input) {
            ParseResult::Ok(command) => command,
            ParseResult::UnknownCommand(cmd) => {
                self.command_line.set_error(format!("Unknown command: {}", cmd));
                return Flow::Continue;
            }
            ParseResult::MissingArgument(cmd) => {
                self.command_line.set_error(format!("Missing argument for :{}", cmd));
                return Flow::Continue;
            }
            ParseResult::InvalidArgument(msg) => {
                self.command_line.set_error(msg);
                return Flow::Continue;
            }
        };

        tracing::debug!("Running command {:?}", command);
        match command {
            Command::Home => self.select_section(SectionId::Home),
            Command::Section(id) => self.select_section(id),
            Command::Topic(number) => self.open_lesson(number - 1),
            Command::Next => self.step_lesson(Step::Next),
            Command::Prev => self.step_lesson(Step::Previous),
            Command::Info(modal) => self.navigator.open_info(modal),
            Command::Copy => self.copy_snippet(clipboard),
            Command::Close => self.navigator.close_topic(),
            Command::Quit => return Flow::Quit,
            Command::Nop => self.command_line.clear_message(),
        }
        Flow::Continue
    }

    /// Apply an action to the topmost layer
    pub fn apply(&mut self, action: Action, clipboard: &mut dyn Clipboard) -> Flow {
        match action {
            Action::Quit => return Flow::Quit,
            Action::Escape => {
                self.navigator.handle_escape();
                return Flow::Continue;
            }
            _ => {}
        }

        let snapshot = self.navigator.snapshot();
        let layer = select_view(self.navigator.catalog(), &snapshot).topmost();

        match layer {
            Layer::Info => self.apply_info(action),
            Layer::Lesson => self.apply_lesson(action, clipboard),
            Layer::Base => self.apply_base(action),
        }
        Flow::Continue
    }

    fn apply_info(&mut self, action: Action) {
        match action {
            Action::Select | Action::Back => self.navigator.close_info(),
            Action::OpenInfo(modal) => self.navigator.open_info(modal),
            _ => {}
        }
    }

    fn apply_lesson(&mut self, action: Action, clipboard: &mut dyn Clipboard) {
        match action {
            Action::Left | Action::PrevLesson => self.step_lesson(Step::Previous),
            Action::Right | Action::NextLesson => self.step_lesson(Step::Next),
            Action::Down => self.lesson.scroll_by(1),
            Action::Up => self.lesson.scroll_by(-1),
            Action::PageDown => self.lesson.scroll_by(self.lesson.page()),
            Action::PageUp => self.lesson.scroll_by(-self.lesson.page()),
            Action::Top => self.lesson.scroll_offset = 0,
            Action::Bottom => self.lesson.scroll_offset = self.lesson.max_scroll(),
            Action::CopySnippet => self.copy_snippet(clipboard),
            Action::Back => self.navigator.close_topic(),
            _ => self.apply_global(action),
        }
    }

    fn apply_base(&mut self, action: Action) {
        let snapshot = self.navigator.snapshot();
        let base = select_view(self.navigator.catalog(), &snapshot).base;

        match base {
            BaseView::Home => {
                let len = self.navigator.catalog().len();
                match action {
                    Action::Select => {
                        let target =
                            self.navigator.catalog().sections().get(self.home.selected).map(|s| s.id);
                        if let Some(id) = target {
                            self.select_section(id);
                        }
                    }
                    _ if Self::move_grid(&mut self.home, action, len) => {}
                    _ => self.apply_global(action),
                }
            }
            BaseView::Section(section) => {
                let order = section.display_order();
                match action {
                    Action::Select => {
                        if let Some(&index) = order.get(self.section.selected) {
                            self.open_lesson(index);
                        }
                    }
                    Action::Back => self.select_section(SectionId::Home),
                    _ if Self::move_grid(&mut self.section, action, order.len()) => {}
                    _ => self.apply_global(action),
                }
            }
            BaseView::Missing(_) => match action {
                Action::Back => self.select_section(SectionId::Home),
                _ => self.apply_global(action),
            },
        }
    }

    /// Move a grid cursor, returning whether the action was a movement
    fn move_grid(grid: &mut GridState, action: Action, len: usize) -> bool {
        match action {
            Action::Left => grid.move_left(),
            Action::Right => grid.move_right(len),
            Action::Up => grid.move_up(),
            Action::Down => grid.move_down(len),
            Action::Top | Action::PageUp => grid.move_first(),
            Action::Bottom | Action::PageDown => grid.move_last(len),
            _ => return false,
        }
        true
    }

    /// Actions available beneath the info overlay
    fn apply_global(&mut self, action: Action) {
        match action {
            Action::Home => self.select_section(SectionId::Home),
            Action::NextSection => self.cycle_section(1),
            Action::PrevSection => self.cycle_section(-1),
            Action::JumpSection(n) => {
                let target = self.navigator.catalog().sections().get(n).map(|s| s.id);
                if let Some(id) = target {
                    self.select_section(id);
                }
            }
            Action::OpenInfo(modal) => self.navigator.open_info(modal),
            Action::CommandMode => self.command_line.enter_command_mode(),
            _ => {}
        }
    }

    /// Move through the header navigation: Home followed by every section
    fn cycle_section(&mut self, delta: isize) {
        let catalog = self.navigator.catalog();
        let mut tabs = vec![SectionId::Home];
        tabs.extend(catalog.sections().iter().map(|s| s.id));

        let current = self.navigator.snapshot().current_section();
        let position = tabs.iter().position(|&id| id == current).unwrap_or(0) as isize;
        let next = (position + delta).rem_euclid(tabs.len() as isize) as usize;
        self.select_section(tabs[next]);
    }

    fn select_section(&mut self, id: SectionId) {
        self.navigator.select_section(id);
        self.section.reset();
        self.lesson = Default::default();
        if let Some(position) = self.navigator.catalog().position(id) {
            self.home.selected = position;
        }
    }

    fn open_lesson(&mut self, index: usize) {
        match self.navigator.open_topic(index) {
            Ok(()) => self.lesson = Default::default(),
            Err(e) => self.command_line.set_error(e.to_string()),
        }
    }

    fn step_lesson(&mut self, step: Step) {
        match self.navigator.step_topic(step) {
            Ok(index) => {
                self.lesson = Default::default();
                self.sync_section_cursor(index);
            }
            Err(e) => tracing::debug!("Ignored lesson step: {}", e),
        }
    }

    /// Keep the section grid cursor on the lesson being read
    fn sync_section_cursor(&mut self, index: usize) {
        if let Some(section) = self.navigator.current_section() {
            if let Some(position) = section.display_order().iter().position(|&i| i == index) {
                self.section.selected = position;
            }
        }
    }

    fn copy_snippet(&mut self, clipboard: &mut dyn Clipboard) {
        let snapshot = self.navigator.snapshot();
        let view = select_view(self.navigator.catalog(), &snapshot);

        let Some(lesson) = view.lesson else {
            self.command_line.set_error("Open a lesson to copy its code");
            return;
        };
        let Some(snippet) = lesson.topic.snippet() else {
            self.command_line.set_message("This lesson has no code example");
            return;
        };

        match clipboard.copy_text(snippet) {
            Ok(()) => self.command_line.set_message("Copied to clipboard!"),
            Err(e) => {
                tracing::warn!("Copy failed: {}", e);
                self.command_line.set_error(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::app::state::InfoModal;
    use crate::catalog::{Catalog, Section};
    use crate::clipboard::RecordingClipboard;

    fn state() -> AppState {
        AppState::new(Catalog::builtin().unwrap())
    }

    fn press(state: &mut AppState, clipboard: &mut RecordingClipboard, code: KeyCode) -> Flow {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE), clipboard)
    }

    fn type_command(state: &mut AppState, clipboard: &mut RecordingClipboard, cmd: &str) -> Flow {
        press(state, clipboard, KeyCode::Char(':'));
        for c in cmd.chars() {
            press(state, clipboard, KeyCode::Char(c));
        }
        press(state, clipboard, KeyCode::Enter)
    }

    #[test]
    fn enter_on_home_opens_selected_section() {
        let mut state = state();
        let mut clipboard = RecordingClipboard::default();

        press(&mut state, &mut clipboard, KeyCode::Right);
        press(&mut state, &mut clipboard, KeyCode::Enter);

        assert_eq!(state.navigator.snapshot().current_section(), SectionId::Css);
    }

    #[test]
    fn enter_on_section_opens_lesson_in_display_order() {
        let mut state = state();
        let mut clipboard = RecordingClipboard::default();
        state.apply(Action::JumpSection(0), &mut clipboard);

        press(&mut state, &mut clipboard, KeyCode::Right);
        press(&mut state, &mut clipboard, KeyCode::Right);
        press(&mut state, &mut clipboard, KeyCode::Enter);

        assert_eq!(state.navigator.snapshot().active_topic(), Some(2));
    }

    #[test]
    fn lesson_arrows_step_and_stop_at_first() {
        let mut state = state();
        let mut clipboard = RecordingClipboard::default();
        state.apply(Action::JumpSection(0), &mut clipboard);
        type_command(&mut state, &mut clipboard, "topic 3");

        press(&mut state, &mut clipboard, KeyCode::Left);
        press(&mut state, &mut clipboard, KeyCode::Left);
        press(&mut state, &mut clipboard, KeyCode::Left);

        assert_eq!(state.navigator.snapshot().active_topic(), Some(0));
        assert_eq!(state.section.selected, 0);
    }

    #[test]
    fn escape_closes_lesson_and_info() {
        let mut state = state();
        let mut clipboard = RecordingClipboard::default();
        state.apply(Action::JumpSection(1), &mut clipboard);
        press(&mut state, &mut clipboard, KeyCode::Enter);
        press(&mut state, &mut clipboard, KeyCode::Char('R'));

        assert_eq!(state.navigator.snapshot().active_info(), Some(InfoModal::Rules));
        press(&mut state, &mut clipboard, KeyCode::Esc);

        let snapshot = state.navigator.snapshot();
        assert_eq!(snapshot.active_topic(), None);
        assert_eq!(snapshot.active_info(), None);
        assert_eq!(snapshot.current_section(), SectionId::Css);
    }

    #[test]
    fn info_overlay_swallows_navigation() {
        let mut state = state();
        let mut clipboard = RecordingClipboard::default();
        state.apply(Action::JumpSection(0), &mut clipboard);
        press(&mut state, &mut clipboard, KeyCode::Enter);
        press(&mut state, &mut clipboard, KeyCode::Char('P'));

        press(&mut state, &mut clipboard, KeyCode::Right);
        press(&mut state, &mut clipboard, KeyCode::Tab);
        assert_eq!(state.navigator.snapshot().active_topic(), Some(0));
        assert_eq!(state.navigator.snapshot().current_section(), SectionId::Html);

        // "I Understand" closes only the info page
        press(&mut state, &mut clipboard, KeyCode::Enter);
        assert_eq!(state.navigator.snapshot().active_info(), None);
        assert_eq!(state.navigator.snapshot().active_topic(), Some(0));
    }

    #[test]
    fn tab_cycles_through_home() {
        let mut state = state();
        let mut clipboard = RecordingClipboard::default();

        press(&mut state, &mut clipboard, KeyCode::BackTab);
        assert_eq!(state.navigator.snapshot().current_section(), SectionId::Linux);
        press(&mut state, &mut clipboard, KeyCode::Tab);
        assert_eq!(state.navigator.snapshot().current_section(), SectionId::Home);
    }

    #[test]
    fn section_switch_from_lesson_clears_it() {
        let mut state = state();
        let mut clipboard = RecordingClipboard::default();
        type_command(&mut state, &mut clipboard, "section css");
        type_command(&mut state, &mut clipboard, "topic 6");
        assert_eq!(state.navigator.snapshot().active_topic(), Some(5));

        type_command(&mut state, &mut clipboard, "s os");
        assert_eq!(state.navigator.snapshot().current_section(), SectionId::Os);
        assert_eq!(state.navigator.snapshot().active_topic(), None);
        assert_eq!(state.section.selected, 0);
    }

    #[test]
    fn out_of_range_topic_command_reports_error() {
        let mut state = state();
        let mut clipboard = RecordingClipboard::default();
        type_command(&mut state, &mut clipboard, "section python");
        type_command(&mut state, &mut clipboard, "topic 9");

        assert_eq!(state.navigator.snapshot().active_topic(), None);
        assert!(state.command_line.is_error);
        assert_eq!(
            state.command_line.message.as_deref(),
            Some("Lesson 9 does not exist in 'python' (2 lessons)")
        );
    }

    #[test]
    fn copy_uses_injected_clipboard() {
        let mut state = state();
        let mut clipboard = RecordingClipboard::default();
        type_command(&mut state, &mut clipboard, "section linux");
        type_command(&mut state, &mut clipboard, "topic 1");
        press(&mut state, &mut clipboard, KeyCode::Char('y'));

        assert_eq!(clipboard.copied, vec!["ls -l /home".to_string()]);
        assert_eq!(state.command_line.message.as_deref(), Some("Copied to clipboard!"));
    }

    #[test]
    fn copy_failure_leaves_navigation_alone() {
        let mut state = state();
        let mut clipboard = RecordingClipboard { broken: true, ..Default::default() };
        type_command(&mut state, &mut clipboard, "section linux");
        type_command(&mut state, &mut clipboard, "topic 2");
        press(&mut state, &mut clipboard, KeyCode::Char('y'));

        assert!(state.command_line.is_error);
        assert_eq!(state.navigator.snapshot().active_topic(), Some(1));
    }

    #[test]
    fn copy_without_snippet_is_reported() {
        let mut state = state();
        let mut clipboard = RecordingClipboard::default();
        type_command(&mut state, &mut clipboard, "section os");
        type_command(&mut state, &mut clipboard, "topic 1");
        press(&mut state, &mut clipboard, KeyCode::Char('y'));

        assert!(clipboard.copied.is_empty());
        assert_eq!(state.command_line.message.as_deref(), Some("This lesson has no code example"));
    }

    #[test]
    fn escape_cancels_command_line() {
        let mut state = state();
        let mut clipboard = RecordingClipboard::default();
        press(&mut state, &mut clipboard, KeyCode::Char(':'));
        press(&mut state, &mut clipboard, KeyCode::Char('q'));
        assert_eq!(press(&mut state, &mut clipboard, KeyCode::Esc), Flow::Continue);
        assert!(!state.command_line.is_input_mode());
    }

    #[test]
    fn quit_command_and_key() {
        let mut state = state();
        let mut clipboard = RecordingClipboard::default();
        assert_eq!(type_command(&mut state, &mut clipboard, "q"), Flow::Quit);
        assert_eq!(press(&mut state, &mut clipboard, KeyCode::Char('q')), Flow::Quit);
    }

    #[test]
    fn unknown_command_sets_error() {
        let mut state = state();
        let mut clipboard = RecordingClipboard::default();
        type_command(&mut state, &mut clipboard, "frobnicate");
        assert_eq!(state.command_line.message.as_deref(), Some("Unknown command: frobnicate"));
    }

    #[test]
    fn backspace_from_missing_section_goes_home() {
        let catalog = Catalog::new(vec![Section::new(SectionId::Html, "HTML")]).unwrap();
        let mut state = AppState::new(catalog);
        let mut clipboard = RecordingClipboard::default();
        type_command(&mut state, &mut clipboard, "section java");
        press(&mut state, &mut clipboard, KeyCode::Backspace);
        assert_eq!(state.navigator.snapshot().current_section(), SectionId::Home);
    }
}
