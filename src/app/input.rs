//! Key mapping

use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::state::InfoModal;

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Movement
    Up,
    Down,
    Left,
    Right,
    Top,
    Bottom,
    PageUp,
    PageDown,

    // Selection
    Select,
    Back,
    /// Close every overlay
    Escape,

    // Sections
    Home,
    NextSection,
    PrevSection,
    /// Jump to the N-th catalog section (0-based)
    JumpSection(usize),

    // Lessons
    NextLesson,
    PrevLesson,
    CopySnippet,

    OpenInfo(InfoModal),
    CommandMode,
    Quit,
}

/// Map a key press to an action.
///
/// `h`/`j`/`k`/`l` only move when `vim_mode` is set; arrows always do.
pub fn key_to_action(key: KeyCode, modifiers: KeyModifiers, vim_mode: bool) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match key {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('d') | KeyCode::Char('f') => Some(Action::PageDown),
            KeyCode::Char('u') | KeyCode::Char('b') => Some(Action::PageUp),
            _ => None,
        };
    }

    if vim_mode {
        match key {
            KeyCode::Char('j') => return Some(Action::Down),
            KeyCode::Char('k') => return Some(Action::Up),
            KeyCode::Char('h') => return Some(Action::Left),
            KeyCode::Char('l') => return Some(Action::Right),
            KeyCode::Char('g') => return Some(Action::Top),
            KeyCode::Char('G') => return Some(Action::Bottom),
            _ => {}
        }
    }

    match key {
        KeyCode::Down => Some(Action::Down),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::Home => Some(Action::Top),
        KeyCode::End => Some(Action::Bottom),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Backspace => Some(Action::Back),
        KeyCode::Esc => Some(Action::Escape),
        KeyCode::Tab => Some(Action::NextSection),
        KeyCode::BackTab => Some(Action::PrevSection),
        KeyCode::Char('0') | KeyCode::Char('H') => Some(Action::Home),
        KeyCode::Char(c @ '1'..='9') => Some(Action::JumpSection(c as usize - '1' as usize)),
        KeyCode::Char('n') => Some(Action::NextLesson),
        KeyCode::Char('p') => Some(Action::PrevLesson),
        KeyCode::Char('y') => Some(Action::CopySnippet),
        KeyCode::Char('P') => Some(Action::OpenInfo(InfoModal::Privacy)),
        KeyCode::Char('R') => Some(Action::OpenInfo(InfoModal::Rules)),
        KeyCode::Char('D') => Some(Action::OpenInfo(InfoModal::Docs)),
        KeyCode::Char(':') => Some(Action::CommandMode),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(key: KeyCode) -> Option<Action> {
        key_to_action(key, KeyModifiers::NONE, true)
    }

    #[test]
    fn vim_j_maps_to_down() {
        assert_eq!(plain(KeyCode::Char('j')), Some(Action::Down));
    }

    #[test]
    fn vim_keys_disabled_without_vim_mode() {
        assert_eq!(key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, false), None);
        assert_eq!(key_to_action(KeyCode::Down, KeyModifiers::NONE, false), Some(Action::Down));
    }

    #[test]
    fn escape_maps_to_escape() {
        assert_eq!(plain(KeyCode::Esc), Some(Action::Escape));
        assert_eq!(key_to_action(KeyCode::Esc, KeyModifiers::NONE, false), Some(Action::Escape));
    }

    #[test]
    fn digits_jump_to_sections() {
        assert_eq!(plain(KeyCode::Char('1')), Some(Action::JumpSection(0)));
        assert_eq!(plain(KeyCode::Char('8')), Some(Action::JumpSection(7)));
        assert_eq!(plain(KeyCode::Char('0')), Some(Action::Home));
    }

    #[test]
    fn capitals_open_info_pages() {
        assert_eq!(plain(KeyCode::Char('P')), Some(Action::OpenInfo(InfoModal::Privacy)));
        assert_eq!(plain(KeyCode::Char('R')), Some(Action::OpenInfo(InfoModal::Rules)));
        assert_eq!(plain(KeyCode::Char('D')), Some(Action::OpenInfo(InfoModal::Docs)));
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            key_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL, true),
            Some(Action::Quit)
        );
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(plain(KeyCode::Char('x')), None);
    }
}
