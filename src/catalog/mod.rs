//! Lesson catalog
//!
//! The catalog is loaded once at startup and never changes during a session.

mod builtin;
mod error;
mod model;

pub use error::CatalogError;
pub use model::{Catalog, CategoryGroup, GENERAL_CATEGORY, Section, SectionId, Topic, TopicRef};
