//! Configuration for highlight sessions.

use crate::annotation_types::AnnotationColor;
use crate::error::{Error, Result};
use serde::Deserialize;

/// Default upload limit: 20 MiB.
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 20 * 1024 * 1024;

/// Highlight session configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Color of every highlight annotation.
    pub highlight_color: AnnotationColor,

    /// Largest document the store accepts, in bytes.
    pub max_document_bytes: usize,

    /// Separator between terms in the raw term field.
    pub term_separator: char,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            highlight_color: AnnotationColor::yellow(),
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
            term_separator: ',',
        }
    }

    /// Load configuration from JSON; missing keys keep their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlighter::config::HighlightConfig;
    ///
    /// let config = HighlightConfig::from_json_str(r#"{"term_separator": ";"}"#).unwrap();
    /// assert_eq!(config.term_separator, ';');
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no session could run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_document_bytes == 0 {
            return Err(Error::Config("max_document_bytes must be non-zero".to_string()));
        }
        if self.term_separator.is_whitespace() {
            return Err(Error::Config("term_separator must not be whitespace".to_string()));
        }
        self.highlight_color.validate()
    }

    /// Set the highlight color.
    pub fn with_highlight_color(mut self, color: AnnotationColor) -> Self {
        self.highlight_color = color;
        self
    }

    /// Set the document size limit.
    pub fn with_max_document_bytes(mut self, limit: usize) -> Self {
        self.max_document_bytes = limit;
        self
    }

    /// Set the term separator.
    pub fn with_term_separator(mut self, separator: char) -> Self {
        self.term_separator = separator;
        self
    }
}
