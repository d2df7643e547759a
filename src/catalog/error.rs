//! Error types for catalog loading and validation

use std::path::PathBuf;

use thiserror::Error;

use super::SectionId;

/// Errors that can occur while loading or validating a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file is not valid JSON or does not match the schema
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog file could not be read
    #[error("Failed to read catalog from {path:?}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// `home` is the landing view and cannot carry topics
    #[error("'home' is reserved and cannot be defined as a catalog section")]
    ReservedSection,

    /// Two sections share the same id
    #[error("Section '{0}' appears more than once")]
    DuplicateSection(SectionId),

    /// A topic has no title
    #[error("Topic {index} in section '{section}' has an empty title")]
    EmptyTopicTitle {
        /// Section containing the topic
        section: SectionId,
        /// Zero-based topic index
        index: usize,
    },

    /// The accent is not a colour ratatui understands
    #[error("Section '{section}' has an invalid accent color '{value}'")]
    InvalidAccent {
        /// Section carrying the accent
        section: SectionId,
        /// Raw accent value
        value: String,
    },

    /// A section name did not match any known section
    #[error("Unknown section '{0}'. Expected one of: home, html, css, python, c, cpp, java, os, linux")]
    UnknownSection(String),
}
