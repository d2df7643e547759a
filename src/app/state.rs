//! Application state definitions
//!
//! Navigation (which section, lesson and info overlay are visible) lives in
//! [`Navigator`], which only exposes the enumerated transitions. Everything
//! else here is UI-local: grid cursors, lesson scrolling and the command line.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::catalog::{Catalog, Section, SectionId};

/// Static informational overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoModal {
    Privacy,
    Rules,
    Docs,
}

impl InfoModal {
    pub const ALL: [InfoModal; 3] = [InfoModal::Privacy, InfoModal::Rules, InfoModal::Docs];

    /// Overlay heading
    pub fn title(self) -> &'static str {
        match self {
            InfoModal::Privacy => "Privacy Policy",
            InfoModal::Rules => "Platform Rules",
            InfoModal::Docs => "Platform Documentation",
        }
    }

    /// Short label used in the footer
    pub fn label(self) -> &'static str {
        match self {
            InfoModal::Privacy => "Privacy",
            InfoModal::Rules => "Rules",
            InfoModal::Docs => "Docs",
        }
    }
}

impl fmt::Display for InfoModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for InfoModal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "privacy" => Ok(InfoModal::Privacy),
            "rules" => Ok(InfoModal::Rules),
            "docs" | "documentation" => Ok(InfoModal::Docs),
            other => Err(format!("Unknown info page '{}'", other)),
        }
    }
}

/// Direction for lesson stepping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::Previous => "previous",
            Step::Next => "next",
        })
    }
}

/// Snapshot of the navigation fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    current_section: SectionId,
    active_topic: Option<usize>,
    active_info: Option<InfoModal>,
}

impl NavState {
    /// Section (or landing view) currently selected
    pub fn current_section(&self) -> SectionId {
        self.current_section
    }

    /// Index of the open lesson, if any
    pub fn active_topic(&self) -> Option<usize> {
        self.active_topic
    }

    /// Open info overlay, if any
    pub fn active_info(&self) -> Option<InfoModal> {
        self.active_info
    }
}

/// Rejected navigation requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavError {
    /// The requested lesson does not exist in the current section
    #[error("Lesson {} does not exist in '{section}' ({len} lessons)", .index.saturating_add(1))]
    TopicOutOfRange {
        section: SectionId,
        index: usize,
        len: usize,
    },

    /// The open lesson is the first or last one
    #[error("There is no {0} lesson")]
    AtBoundary(Step),

    /// Stepping requires an open lesson
    #[error("No lesson is open")]
    NoActiveTopic,
}

/// Owner of the navigation state
///
/// Every mutation goes through one of the transition methods below; readers
/// take a [`NavState`] snapshot.
#[derive(Debug, Clone)]
pub struct Navigator {
    catalog: Catalog,
    state: NavState,
}

impl Navigator {
    /// Start on the landing view with nothing open
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, state: NavState::default() }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Copy of the current navigation fields
    pub fn snapshot(&self) -> NavState {
        self.state
    }

    /// The selected section, if the catalog defines it
    pub fn current_section(&self) -> Option<&Section> {
        self.catalog.find_section(self.state.current_section)
    }

    fn topic_len(&self) -> usize {
        self.catalog.topic_count(self.state.current_section)
    }

    /// Switch sections. Always closes the lesson; leaves the info overlay alone.
    pub fn select_section(&mut self, id: SectionId) {
        if !id.is_home() && self.catalog.find_section(id).is_none() {
            tracing::warn!("Selected section '{}' is not in the catalog", id);
        }
        tracing::debug!("select_section {} -> {}", self.state.current_section, id);
        self.state.current_section = id;
        self.state.active_topic = None;
    }

    /// Open a lesson of the current section
    pub fn open_topic(&mut self, index: usize) -> Result<(), NavError> {
        let len = self.topic_len();
        if index >= len {
            tracing::warn!("Rejected lesson {} of '{}'", index, self.state.current_section);
            return Err(NavError::TopicOutOfRange {
                section: self.state.current_section,
                index,
                len,
            });
        }
        tracing::debug!("open_topic {}", index);
        self.state.active_topic = Some(index);
        Ok(())
    }

    pub fn close_topic(&mut self) {
        self.state.active_topic = None;
    }

    /// Move to the neighbouring lesson, returning the new index.
    ///
    /// Stepping past either end is rejected and leaves the state unchanged.
    pub fn step_topic(&mut self, step: Step) -> Result<usize, NavError> {
        let current = self.state.active_topic.ok_or(NavError::NoActiveTopic)?;
        let len = self.topic_len();
        let target = match step {
            Step::Previous => current.checked_sub(1),
            Step::Next => Some(current + 1).filter(|&i| i < len),
        };
        let Some(target) = target else {
            return Err(NavError::AtBoundary(step));
        };
        self.open_topic(target)?;
        Ok(target)
    }

    pub fn open_info(&mut self, modal: InfoModal) {
        tracing::debug!("open_info {:?}", modal);
        self.state.active_info = Some(modal);
    }

    pub fn close_info(&mut self) {
        self.state.active_info = None;
    }

    /// Close every overlay
    pub fn handle_escape(&mut self) {
        self.state.active_topic = None;
        self.state.active_info = None;
    }
}

/// Cursor over a grid of cards laid out row-major
#[derive(Debug, Clone, Default)]
pub struct GridState {
    /// Selected position in display order
    pub selected: usize,
    /// Cards per row (updated on render)
    pub columns: usize,
    /// First visible line (updated on render)
    pub scroll_offset: usize,
}

impl GridState {
    fn columns(&self) -> usize {
        self.columns.max(1)
    }

    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_right(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.columns());
    }

    pub fn move_down(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + self.columns()).min(len - 1);
        }
    }

    pub fn move_first(&mut self) {
        self.selected = 0;
    }

    pub fn move_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Back to the first card and the top of the page
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Keep the cursor inside `len` items
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

/// Scroll state of the lesson body
#[derive(Debug, Clone, Default)]
pub struct LessonState {
    /// Current scroll position (lines from top)
    pub scroll_offset: usize,
    /// Total rendered lines (updated on render)
    pub total_lines: usize,
    /// Visible height in lines (updated on render)
    pub visible_height: usize,
}

impl LessonState {
    /// Get the maximum allowed scroll offset
    pub fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_height)
    }

    /// Clamp scroll offset to valid range
    pub fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        if self.scroll_offset > max {
            self.scroll_offset = max;
        }
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.clamp_scroll();
    }

    pub fn page(&self) -> isize {
        self.visible_height.max(1) as isize
    }
}

/// Command line mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandMode {
    /// Command line shows status or hints
    #[default]
    Normal,
    /// Accepting : commands
    Command,
}

/// State for the command line input
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    pub mode: CommandMode,
    pub input: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Status/error message to display (when not in input mode)
    pub message: Option<String>,
    pub is_error: bool,
}

impl CommandLineState {
    pub fn enter_command_mode(&mut self) {
        self.mode = CommandMode::Command;
        self.input.clear();
        self.cursor = 0;
        self.message = None;
    }

    pub fn exit_input_mode(&mut self) {
        self.mode = CommandMode::Normal;
        self.input.clear();
        self.cursor = 0;
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.input.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.input.len())
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.input.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn is_input_mode(&self) -> bool {
        self.mode == CommandMode::Command
    }
}

/// Full application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub navigator: Navigator,

    /// Cursor over the home grid (catalog order)
    pub home: GridState,

    /// Cursor over the section grid (grouped display order)
    pub section: GridState,

    pub lesson: LessonState,

    pub command_line: CommandLineState,

    /// Map h/j/k/l to movement
    pub vim_mode: bool,

    /// Highlight code snippets
    pub syntax_highlighting: bool,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            navigator: Navigator::new(catalog),
            home: GridState::default(),
            section: GridState::default(),
            lesson: LessonState::default(),
            command_line: CommandLineState::default(),
            vim_mode: true,
            syntax_highlighting: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Topic;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn navigator() -> Navigator {
        Navigator::new(Catalog::builtin().unwrap())
    }

    fn small_catalog() -> Catalog {
        let mut html = Section::new(SectionId::Html, "HTML");
        html.topics = vec![Topic::new("1. A", "a"), Topic::new("2. B", "b"), Topic::new("3. C", "c")];
        Catalog::new(vec![html, Section::new(SectionId::Css, "CSS")]).unwrap()
    }

    #[test]
    fn initial_state_is_home_with_nothing_open() {
        let nav = navigator();
        let state = nav.snapshot();
        assert_eq!(state.current_section(), SectionId::Home);
        assert_eq!(state.active_topic(), None);
        assert_eq!(state.active_info(), None);
    }

    #[test]
    fn html_walkthrough() {
        let mut nav = navigator();
        nav.select_section(SectionId::Html);
        nav.open_topic(2).unwrap();

        let section = nav.current_section().unwrap();
        assert_eq!(section.topics[nav.snapshot().active_topic().unwrap()].title, "3. Tags & Elements");

        assert_eq!(nav.step_topic(Step::Previous), Ok(1));
        assert_eq!(nav.step_topic(Step::Previous), Ok(0));
        assert_eq!(nav.snapshot().active_topic(), Some(0));
    }

    #[test]
    fn section_change_clears_stale_lesson() {
        let mut nav = navigator();
        nav.select_section(SectionId::Css);
        nav.open_topic(5).unwrap();
        nav.select_section(SectionId::Os);
        assert_eq!(nav.snapshot().active_topic(), None);
    }

    #[test]
    fn reselecting_current_section_clears_lesson() {
        let mut nav = navigator();
        nav.select_section(SectionId::Html);
        nav.open_topic(4).unwrap();
        nav.select_section(SectionId::Html);
        assert_eq!(nav.snapshot().active_topic(), None);
    }

    #[test]
    fn section_change_keeps_info_overlay() {
        let mut nav = navigator();
        nav.open_info(InfoModal::Docs);
        nav.select_section(SectionId::Java);
        assert_eq!(nav.snapshot().active_info(), Some(InfoModal::Docs));
    }

    #[test]
    fn selecting_missing_section_is_allowed() {
        let mut nav = Navigator::new(small_catalog());
        nav.select_section(SectionId::Linux);
        assert_eq!(nav.snapshot().current_section(), SectionId::Linux);
        assert!(nav.current_section().is_none());
        assert!(nav.open_topic(0).is_err());
    }

    #[test]
    fn out_of_range_lesson_is_rejected() {
        let mut nav = Navigator::new(small_catalog());
        nav.select_section(SectionId::Html);
        nav.open_topic(1).unwrap();

        let err = nav.open_topic(3).unwrap_err();
        assert_eq!(err, NavError::TopicOutOfRange { section: SectionId::Html, index: 3, len: 3 });
        assert_eq!(nav.snapshot().active_topic(), Some(1));
    }

    #[test]
    fn lessons_cannot_open_on_home() {
        let mut nav = navigator();
        assert!(matches!(nav.open_topic(0), Err(NavError::TopicOutOfRange { len: 0, .. })));
    }

    #[test]
    fn stepping_stops_at_boundaries() {
        let mut nav = Navigator::new(small_catalog());
        nav.select_section(SectionId::Html);

        assert_eq!(nav.step_topic(Step::Next), Err(NavError::NoActiveTopic));

        nav.open_topic(0).unwrap();
        assert_eq!(nav.step_topic(Step::Previous), Err(NavError::AtBoundary(Step::Previous)));
        assert_eq!(nav.snapshot().active_topic(), Some(0));

        nav.open_topic(2).unwrap();
        assert_eq!(nav.step_topic(Step::Next), Err(NavError::AtBoundary(Step::Next)));
        assert_eq!(nav.snapshot().active_topic(), Some(2));
    }

    #[test]
    fn escape_closes_info_overlay() {
        let mut nav = navigator();
        nav.open_info(InfoModal::Rules);
        nav.handle_escape();
        assert_eq!(nav.snapshot().active_info(), None);
    }

    #[test]
    fn escape_keeps_section() {
        let mut nav = navigator();
        nav.select_section(SectionId::Linux);
        nav.open_topic(1).unwrap();
        nav.open_info(InfoModal::Privacy);
        nav.handle_escape();
        assert_eq!(nav.snapshot().current_section(), SectionId::Linux);
        assert_eq!(nav.snapshot().active_topic(), None);
        assert_eq!(nav.snapshot().active_info(), None);
    }

    #[test]
    fn info_modal_parses_names() {
        assert_eq!("privacy".parse::<InfoModal>(), Ok(InfoModal::Privacy));
        assert_eq!("Documentation".parse::<InfoModal>(), Ok(InfoModal::Docs));
        assert!("terms".parse::<InfoModal>().is_err());
    }

    #[test]
    fn grid_moves_by_rows() {
        let mut grid = GridState { columns: 3, ..Default::default() };
        grid.move_down(8);
        assert_eq!(grid.selected, 3);
        grid.move_down(8);
        assert_eq!(grid.selected, 6);
        grid.move_down(8);
        assert_eq!(grid.selected, 7);
        grid.move_up();
        assert_eq!(grid.selected, 4);
        grid.move_right(8);
        grid.move_right(8);
        grid.move_right(8);
        grid.move_right(8);
        assert_eq!(grid.selected, 7);
    }

    #[test]
    fn grid_without_layout_moves_one_at_a_time() {
        let mut grid = GridState::default();
        grid.move_down(5);
        assert_eq!(grid.selected, 1);
    }

    #[test]
    fn lesson_scroll_is_clamped() {
        let mut lesson = LessonState { total_lines: 30, visible_height: 10, ..Default::default() };
        lesson.scroll_by(50);
        assert_eq!(lesson.scroll_offset, 20);
        lesson.scroll_by(-100);
        assert_eq!(lesson.scroll_offset, 0);
    }

    #[test]
    fn command_line_edits_multibyte_input() {
        let mut cl = CommandLineState::default();
        cl.enter_command_mode();
        for c in "sé".chars() {
            cl.insert_char(c);
        }
        cl.move_left();
        cl.insert_char('x');
        assert_eq!(cl.input, "sxé");
        cl.move_right();
        cl.delete_char();
        assert_eq!(cl.input, "sx");
    }

    fn arbitrary_op() -> impl Strategy<Value = u8> {
        0u8..7
    }

    proptest! {
        #[test]
        fn escape_always_closes_everything(ops in prop::collection::vec((arbitrary_op(), 0usize..16), 0..30)) {
            let mut nav = navigator();
            for (op, arg) in ops {
                match op {
                    0 => nav.select_section(SectionId::ALL[arg % SectionId::ALL.len()]),
                    1 => { let _ = nav.open_topic(arg); }
                    2 => nav.close_topic(),
                    3 => { let _ = nav.step_topic(if arg % 2 == 0 { Step::Previous } else { Step::Next }); }
                    4 => nav.open_info(InfoModal::ALL[arg % InfoModal::ALL.len()]),
                    5 => nav.close_info(),
                    _ => nav.handle_escape(),
                }
                // Open lessons always index into the current section
                if let Some(i) = nav.snapshot().active_topic() {
                    prop_assert!(i < nav.catalog().topic_count(nav.snapshot().current_section()));
                }
            }

            let section = nav.snapshot().current_section();
            nav.handle_escape();
            let once = nav.snapshot();
            nav.handle_escape();
            prop_assert_eq!(once, nav.snapshot());
            prop_assert_eq!(once.active_topic(), None);
            prop_assert_eq!(once.active_info(), None);
            prop_assert_eq!(once.current_section(), section);
        }

        #[test]
        fn section_switch_always_clears_lesson(start in 0usize..9, index in 0usize..14, target in 0usize..9) {
            let mut nav = navigator();
            nav.select_section(SectionId::ALL[start]);
            let _ = nav.open_topic(index);
            nav.select_section(SectionId::ALL[target]);
            prop_assert_eq!(nav.snapshot().active_topic(), None);
        }
    }
}
