//! Syntax highlighting using syntect
//!
//! Lesson code examples are highlighted as a whole so that multi-line
//! constructs (HTML comments, C block comments) keep their state across lines.

use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::theme::Theme;

/// Global syntax set with all default syntaxes
static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

const SYNTECT_THEME: &str = "base16-ocean.dark";

/// Map section language tokens to syntect lookup tokens
fn normalize_language(lang: &str) -> &str {
    match lang.trim().to_lowercase().as_str() {
        "py" | "python" | "python3" => "py",
        "c++" | "cpp" | "cxx" => "cpp",
        "sh" | "bash" | "shell" | "linux" => "sh",
        "htm" | "html" => "html",
        "css" => "css",
        "c" => "c",
        "java" => "java",
        _ => lang,
    }
}

fn find_syntax(language: Option<&str>) -> Option<&'static SyntaxReference> {
    let lang = normalize_language(language?);
    SYNTAX_SET.find_syntax_by_token(lang).or_else(|| SYNTAX_SET.find_syntax_by_extension(lang))
}

/// Check if a language is supported
pub fn is_language_supported(language: &str) -> bool {
    find_syntax(Some(language)).is_some()
}

/// Convert a syntect color to a ratatui color
fn syntect_to_ratatui_color(color: syntect::highlighting::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Highlight a code example into one styled line per source line
pub fn highlight_snippet(code: &str, language: Option<&str>, theme: &Theme) -> Vec<Line<'static>> {
    if let Some(syntax) = find_syntax(language) {
        match highlight_with_syntect(code, syntax, theme) {
            Some(lines) => return lines,
            None => tracing::debug!("syntect failed for {:?}, using fallback", language),
        }
    }
    code.lines().map(|line| Line::from(highlight_basic(line, language, theme))).collect()
}

/// Unhighlighted code example
pub fn plain_snippet(code: &str, theme: &Theme) -> Vec<Line<'static>> {
    let style = Style::default().fg(theme.code_fg).bg(theme.code_bg);
    code.lines().map(|line| Line::from(Span::styled(line.to_string(), style))).collect()
}

fn highlight_with_syntect(
    code: &str,
    syntax: &SyntaxReference,
    theme: &Theme,
) -> Option<Vec<Line<'static>>> {
    let syntect_theme = THEME_SET.themes.get(SYNTECT_THEME)?;
    let mut highlighter = HighlightLines::new(syntax, syntect_theme);

    let mut lines = Vec::new();
    for line in LinesWithEndings::from(code) {
        let ranges = highlighter.highlight_line(line, &SYNTAX_SET).ok()?;
        let spans: Vec<Span<'static>> = ranges
            .into_iter()
            .filter_map(|(style, text)| {
                let text = text.trim_end_matches(['\n', '\r']);
                if text.is_empty() {
                    return None;
                }

                let mut ratatui_style =
                    Style::default().fg(syntect_to_ratatui_color(style.foreground)).bg(theme.code_bg);
                if style.font_style.contains(FontStyle::BOLD) {
                    ratatui_style = ratatui_style.add_modifier(Modifier::BOLD);
                }
                if style.font_style.contains(FontStyle::ITALIC) {
                    ratatui_style = ratatui_style.add_modifier(Modifier::ITALIC);
                }
                if style.font_style.contains(FontStyle::UNDERLINE) {
                    ratatui_style = ratatui_style.add_modifier(Modifier::UNDERLINED);
                }
                Some(Span::styled(text.to_string(), ratatui_style))
            })
            .collect();
        lines.push(Line::from(spans));
    }
    Some(lines)
}

fn keywords_for(language: Option<&str>) -> &'static [&'static str] {
    match language.map(normalize_language) {
        Some("py") => &[
            "def", "class", "if", "elif", "else", "for", "while", "import", "from", "return",
            "print", "in", "and", "or", "not", "None", "True", "False",
        ],
        Some("c") | Some("cpp") | Some("java") => &[
            "int", "char", "float", "double", "void", "return", "if", "else", "for", "while",
            "include", "using", "namespace", "class", "public", "static", "std", "cout", "printf",
            "String",
        ],
        Some("sh") => &["ls", "cd", "pwd", "mkdir", "touch", "cp", "mv", "rm", "sudo", "cat"],
        Some("css") => &["display", "position", "color", "margin", "padding", "flex", "grid"],
        _ => &[],
    }
}

/// Keyword, string and comment highlighting with the app theme
fn highlight_basic(line: &str, language: Option<&str>, theme: &Theme) -> Vec<Span<'static>> {
    let base_style = Style::default().fg(theme.code_fg).bg(theme.code_bg);
    let comment_style = Style::default().fg(theme.syntax_comment).bg(theme.code_bg);

    let trimmed = line.trim_start();
    let hash_comments = matches!(language.map(normalize_language), Some("py") | Some("sh"));
    if ["//", "/*", "<!--"].iter().any(|p| trimmed.starts_with(p))
        || (hash_comments && trimmed.starts_with('#'))
    {
        return vec![Span::styled(line.to_string(), comment_style)];
    }

    let keywords = keywords_for(language);
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();

    let flush = |current: &mut String, spans: &mut Vec<Span<'static>>| {
        if current.is_empty() {
            return;
        }
        let style = if keywords.contains(&current.as_str()) {
            Style::default().fg(theme.syntax_keyword).bg(theme.code_bg).add_modifier(Modifier::BOLD)
        } else {
            base_style
        };
        spans.push(Span::styled(std::mem::take(current), style));
    };

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' => {
                flush(&mut current, &mut spans);
                let mut literal = String::from(c);
                for ch in chars.by_ref() {
                    literal.push(ch);
                    if ch == c {
                        break;
                    }
                }
                spans.push(Span::styled(
                    literal,
                    Style::default().fg(theme.syntax_string).bg(theme.code_bg),
                ));
            }
            '<' | '>' | '{' | '}' | '(' | ')' | ';' | ':' | '=' => {
                flush(&mut current, &mut spans);
                let color =
                    if matches!(c, '<' | '>') { theme.syntax_tag } else { theme.syntax_operator };
                spans.push(Span::styled(c.to_string(), Style::default().fg(color).bg(theme.code_bg)));
            }
            c if c.is_ascii_digit() && current.is_empty() => {
                let mut number = String::from(c);
                while let Some(&d) = chars.peek() {
                    if !(d.is_ascii_alphanumeric() || d == '.') {
                        break;
                    }
                    number.push(d);
                    chars.next();
                }
                spans.push(Span::styled(
                    number,
                    Style::default().fg(theme.syntax_number).bg(theme.code_bg),
                ));
            }
            c if c.is_alphanumeric() || c == '_' || c == '#' => current.push(c),
            _ => {
                flush(&mut current, &mut spans);
                spans.push(Span::styled(c.to_string(), base_style));
            }
        }
    }
    flush(&mut current, &mut spans);

    spans
}
