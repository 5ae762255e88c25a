//! Error types for the highlighter.
//!
//! Matching itself is total; the variants here cover the one precondition the
//! matcher enforces, input validation, and failures reported by collaborators
//! (the PDF engine and the document store).

/// Result type alias for highlighter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while searching and highlighting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The matcher was handed an empty normalized term
    #[error("Search term is empty after normalization")]
    EmptySearchTerm,

    /// The raw term input contained no usable term
    #[error("No search terms provided")]
    NoSearchTerms,

    /// Page index outside the document
    #[error("Page {page} out of range (document has {page_count} pages)")]
    PageOutOfRange {
        /// Requested page (0-indexed)
        page: usize,
        /// Number of pages in the document
        page_count: usize,
    },

    /// Document exceeds the configured size limit
    #[error("Document too large: {size} bytes (limit: {limit} bytes)")]
    DocumentTooLarge {
        /// Size of the rejected document
        size: usize,
        /// Configured limit
        limit: usize,
    },

    /// No stored document for the given handle
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Handle that cannot name a stored document
    #[error("Invalid document handle: {0}")]
    InvalidHandle(String),

    /// Failure reported by the PDF engine
    #[error("PDF engine error: {0}")]
    Engine(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
