//! Derived view selection
//!
//! A pure function of the catalog and a navigation snapshot decides which
//! views are stacked on screen. Rendering and input routing both read it.

use crate::app::state::{InfoModal, NavState};
use crate::catalog::{Catalog, Section, SectionId, Topic};

/// The page underneath any overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseView<'a> {
    /// Landing grid of every section
    Home,
    /// Topic grid of one section
    Section(&'a Section),
    /// Selected id has no catalog entry; rendered as an empty page
    Missing(SectionId),
}

/// Everything the lesson overlay needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonView<'a> {
    pub section: &'a Section,
    pub index: usize,
    pub topic: &'a Topic,
    /// "Previous" is enabled
    pub has_previous: bool,
    /// "Next Topic" is enabled
    pub has_next: bool,
}

impl LessonView<'_> {
    /// 1-based lesson number
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Small label above the title, e.g. "Basics • Lesson 3"
    pub fn eyebrow(&self) -> String {
        match self.topic.category() {
            Some(category) => format!("{} • Lesson {}", category, self.number()),
            None => format!("Lesson {}", self.number()),
        }
    }
}

/// Which layer receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Base,
    Lesson,
    Info,
}

/// Views visible for one navigation snapshot, bottom to top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStack<'a> {
    pub base: BaseView<'a>,
    pub lesson: Option<LessonView<'a>>,
    pub info: Option<InfoModal>,
}

impl ViewStack<'_> {
    /// The topmost visible layer
    pub fn topmost(&self) -> Layer {
        if self.info.is_some() {
            Layer::Info
        } else if self.lesson.is_some() {
            Layer::Lesson
        } else {
            Layer::Base
        }
    }
}

/// Compute the visible views.
///
/// The lesson overlay is shown only when a topic is active, the current
/// section is not the landing view, and both section and topic resolve. The
/// info overlay is shown whenever one is active, above everything else.
pub fn select_view<'a>(catalog: &'a Catalog, state: &NavState) -> ViewStack<'a> {
    let id = state.current_section();

    let base = if id.is_home() {
        BaseView::Home
    } else {
        match catalog.find_section(id) {
            Some(section) => BaseView::Section(section),
            None => BaseView::Missing(id),
        }
    };

    let lesson = match (base, state.active_topic()) {
        (BaseView::Section(section), Some(index)) => {
            section.topic(index).map(|topic| LessonView {
                section,
                index,
                topic,
                has_previous: index > 0,
                has_next: index + 1 < section.topics.len(),
            })
        }
        _ => None,
    };

    ViewStack { base, lesson, info: state.active_info() }
}
