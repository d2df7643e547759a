//! Clipboard access for copying code snippets
//!
//! Copying is fire-and-forget: callers report failures to the user but never
//! depend on success.

use thiserror::Error;

/// Errors that can occur when copying text
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (headless session, missing permissions)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard rejected the text
    #[error("Failed to copy to clipboard: {0}")]
    Write(String),
}

/// Something that can receive copied text
pub trait Clipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`, opened on first use
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ClipboardError::Unavailable("not initialised".to_string()));
        };

        clipboard.set_text(text).map_err(|e| ClipboardError::Write(e.to_string()))?;
        tracing::debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}

/// In-memory clipboard that records what was copied
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub copied: Vec<String>,
    /// Fail every copy
    pub broken: bool,
}

#[cfg(test)]
impl Clipboard for RecordingClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.broken {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}
