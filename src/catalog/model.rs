//! Content model for the lesson catalog
//!
//! A catalog is an ordered list of sections, each owning an ordered list of
//! topics. Topic order is the only source of truth for lesson numbering and
//! prev/next navigation. Category grouping is computed on demand and never
//! reorders or duplicates topics.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use super::CatalogError;

/// Group label for topics without a category
pub const GENERAL_CATEGORY: &str = "General";

/// Identifier of a top-level subject area
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Landing view; never has topics
    #[default]
    Home,
    Html,
    Css,
    Python,
    C,
    Cpp,
    Java,
    Os,
    Linux,
}

impl SectionId {
    /// Every section id, landing view first
    pub const ALL: [SectionId; 9] = [
        SectionId::Home,
        SectionId::Html,
        SectionId::Css,
        SectionId::Python,
        SectionId::C,
        SectionId::Cpp,
        SectionId::Java,
        SectionId::Os,
        SectionId::Linux,
    ];

    /// Lowercase name used in catalog files and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Html => "html",
            SectionId::Css => "css",
            SectionId::Python => "python",
            SectionId::C => "c",
            SectionId::Cpp => "cpp",
            SectionId::Java => "java",
            SectionId::Os => "os",
            SectionId::Linux => "linux",
        }
    }

    /// Whether this is the landing pseudo-section
    pub fn is_home(self) -> bool {
        self == SectionId::Home
    }

    /// Language token used to highlight this section's code snippets
    pub fn snippet_language(self) -> Option<&'static str> {
        match self {
            SectionId::Html => Some("html"),
            SectionId::Css => Some("css"),
            SectionId::Python => Some("py"),
            SectionId::C => Some("c"),
            SectionId::Cpp => Some("cpp"),
            SectionId::Java => Some("java"),
            SectionId::Linux => Some("sh"),
            SectionId::Os | SectionId::Home => None,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if name == "c++" {
            return Ok(SectionId::Cpp);
        }
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == name)
            .ok_or_else(|| CatalogError::UnknownSection(s.trim().to_string()))
    }
}

/// A single lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Lesson title, usually prefixed with its number ("3. Tags & Elements")
    pub title: String,
    /// Lesson body; newlines are significant
    pub content: String,
    /// Optional practical example
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    /// Optional sub-grouping label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Topic {
    /// Create an uncategorized topic without a code snippet
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { title: title.into(), content: content.into(), code_snippet: None, category: None }
    }

    /// Set the category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the code snippet
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.code_snippet = Some(snippet.into());
        self
    }

    /// The explicit category, ignoring empty labels
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// The group this topic belongs to
    pub fn category_label(&self) -> &str {
        self.category().unwrap_or(GENERAL_CATEGORY)
    }

    /// The code snippet, ignoring empty ones
    pub fn snippet(&self) -> Option<&str> {
        self.code_snippet.as_deref().filter(|s| !s.is_empty())
    }
}

/// A topic together with its position in the section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicRef<'a> {
    /// Index into `Section::topics`
    pub index: usize,
    pub topic: &'a Topic,
}

/// Topics sharing a category label, in their original order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub label: &'a str,
    pub entries: Vec<TopicRef<'a>>,
}

impl CategoryGroup<'_> {
    /// Whether this is the catch-all group for uncategorized topics
    pub fn is_general(&self) -> bool {
        self.label == GENERAL_CATEGORY
    }
}

/// A subject area and its lessons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    /// One-line description shown on the home grid
    pub short_desc: String,
    /// Short glyph shown on cards
    #[serde(default)]
    pub icon: String,
    /// Card and modal accent, as `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Lessons in display order
    pub topics: Vec<Topic>,
}

impl Section {
    /// Create an empty section
    pub fn new(id: SectionId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            short_desc: String::new(),
            icon: String::new(),
            accent: None,
            topics: Vec::new(),
        }
    }

    /// Get a topic by index
    pub fn topic(&self, index: usize) -> Option<&Topic> {
        self.topics.get(index)
    }

    /// Index of the last topic, if any
    pub fn last_index(&self) -> Option<usize> {
        self.topics.len().checked_sub(1)
    }

    /// Whether any topic carries an explicit category
    pub fn has_categories(&self) -> bool {
        self.topics.iter().any(|t| t.category().is_some())
    }

    /// Parsed accent colour
    pub fn accent_color(&self) -> Option<Color> {
        self.accent.as_deref().and_then(|a| Color::from_str(a).ok())
    }

    /// Partition topics by category.
    ///
    /// Groups appear in the order their label is first seen; entries keep
    /// their original relative order. Uncategorized topics land in
    /// [`GENERAL_CATEGORY`].
    pub fn group_by_category(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();

        for (index, topic) in self.topics.iter().enumerate() {
            let entry = TopicRef { index, topic };
            let label = topic.category_label();
            match groups.iter_mut().find(|g| g.label == label) {
                Some(group) => group.entries.push(entry),
                None => groups.push(CategoryGroup { label, entries: vec![entry] }),
            }
        }

        groups
    }

    /// Topic indices in grouped display order
    pub fn display_order(&self) -> Vec<usize> {
        self.group_by_category()
            .iter()
            .flat_map(|g| g.entries.iter().map(|e| e.index))
            .collect()
    }
}

/// On-disk shape of a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    sections: Vec<Section>,
}

/// Validated, immutable collection of sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    /// Build a catalog, rejecting reserved or duplicate ids and malformed topics
    pub fn new(sections: Vec<Section>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();

        for section in &sections {
            if section.id.is_home() {
                return Err(CatalogError::ReservedSection);
            }
            if !seen.insert(section.id) {
                return Err(CatalogError::DuplicateSection(section.id));
            }
            if let Some(accent) = &section.accent {
                if Color::from_str(accent).is_err() {
                    return Err(CatalogError::InvalidAccent {
                        section: section.id,
                        value: accent.clone(),
                    });
                }
            }
            if let Some(index) = section.topics.iter().position(|t| t.title.trim().is_empty()) {
                return Err(CatalogError::EmptyTopicTitle { section: section.id, index });
            }
        }

        Ok(Self { sections })
    }

    /// Parse and validate a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.sections)
    }

    /// Sections in display order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of sections (the landing view is not counted)
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the catalog has no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Look up a section by id
    pub fn find_section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Position of a section in display order
    pub fn position(&self, id: SectionId) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Number of topics in a section, zero when absent
    pub fn topic_count(&self, id: SectionId) -> usize {
        self.find_section(id).map_or(0, |s| s.topics.len())
    }
}
