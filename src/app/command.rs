//! Command parsing for the command line

use crate::app::state::InfoModal;
use crate::catalog::SectionId;

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Return to the landing grid: :home
    Home,
    /// Open a section: :section <id>
    Section(SectionId),
    /// Open a lesson by its 1-based number: :topic <n>
    Topic(usize),
    /// Step to the next lesson: :next
    Next,
    /// Step to the previous lesson: :prev
    Prev,
    /// Show an info page: :privacy, :rules, :docs
    Info(InfoModal),
    /// Copy the open lesson's snippet: :copy
    Copy,
    /// Close the open lesson: :close
    Close,
    /// Quit the application: :q or :quit
    Quit,
    /// Empty command
    Nop,
}

/// Result of parsing a command
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    Ok(Command),
    UnknownCommand(String),
    MissingArgument(String),
    InvalidArgument(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim()).unwrap_or("");

    match cmd.to_lowercase().as_str() {
        "home" => ParseResult::Ok(Command::Home),
        "section" | "s" | "open" | "o" => {
            if args.is_empty() {
                return ParseResult::MissingArgument("section".to_string());
            }
            match args.parse::<SectionId>() {
                Ok(id) => ParseResult::Ok(Command::Section(id)),
                Err(e) => ParseResult::InvalidArgument(e.to_string()),
            }
        }
        "topic" | "t" | "lesson" => {
            if args.is_empty() {
                return ParseResult::MissingArgument("topic".to_string());
            }
            match args.parse::<usize>() {
                Ok(n) if n > 0 => ParseResult::Ok(Command::Topic(n)),
                _ => ParseResult::InvalidArgument(format!(
                    "Lesson number must be a positive integer, got '{}'",
                    args
                )),
            }
        }
        "next" | "n" => ParseResult::Ok(Command::Next),
        "prev" | "previous" | "p" => ParseResult::Ok(Command::Prev),
        "copy" | "y" => ParseResult::Ok(Command::Copy),
        "close" | "c" => ParseResult::Ok(Command::Close),
        "quit" | "q" => ParseResult::Ok(Command::Quit),
        other => match other.parse::<InfoModal>() {
            Ok(modal) => ParseResult::Ok(Command::Info(modal)),
            Err(_) => ParseResult::UnknownCommand(cmd.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_command() {
        assert_eq!(parse_command("q"), ParseResult::Ok(Command::Quit));
        assert_eq!(parse_command("quit"), ParseResult::Ok(Command::Quit));
        assert_eq!(parse_command("Q"), ParseResult::Ok(Command::Quit));
    }

    #[test]
    fn parse_section_command() {
        assert_eq!(parse_command("section css"), ParseResult::Ok(Command::Section(SectionId::Css)));
        assert_eq!(parse_command("s C++"), ParseResult::Ok(Command::Section(SectionId::Cpp)));
        assert_eq!(parse_command("open home"), ParseResult::Ok(Command::Section(SectionId::Home)));
    }

    #[test]
    fn parse_section_missing_arg() {
        assert!(matches!(parse_command("section"), ParseResult::MissingArgument(_)));
    }

    #[test]
    fn parse_section_unknown_id() {
        assert!(matches!(parse_command("section rust"), ParseResult::InvalidArgument(_)));
    }

    #[test]
    fn parse_topic_command() {
        assert_eq!(parse_command("topic 3"), ParseResult::Ok(Command::Topic(3)));
        assert_eq!(parse_command("t 12"), ParseResult::Ok(Command::Topic(12)));
    }

    #[test]
    fn parse_topic_rejects_zero_and_text() {
        assert!(matches!(parse_command("topic 0"), ParseResult::InvalidArgument(_)));
        assert!(matches!(parse_command("topic three"), ParseResult::InvalidArgument(_)));
        assert!(matches!(parse_command("topic"), ParseResult::MissingArgument(_)));
    }

    #[test]
    fn parse_info_pages() {
        assert_eq!(parse_command("privacy"), ParseResult::Ok(Command::Info(InfoModal::Privacy)));
        assert_eq!(parse_command("rules"), ParseResult::Ok(Command::Info(InfoModal::Rules)));
        assert_eq!(parse_command("documentation"), ParseResult::Ok(Command::Info(InfoModal::Docs)));
    }

    #[test]
    fn parse_unknown_command() {
        assert!(matches!(parse_command("unknown"), ParseResult::UnknownCommand(_)));
    }

    #[test]
    fn parse_empty_is_nop() {
        assert_eq!(parse_command(""), ParseResult::Ok(Command::Nop));
        assert_eq!(parse_command("   "), ParseResult::Ok(Command::Nop));
    }
}
