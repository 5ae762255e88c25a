//! # PDF Highlighter
//!
//! Find search terms in PDF page text and highlight every occurrence, even
//! when the extracted text splits a term with spaces or line breaks.
//!
//! ## Core Features
//!
//! - **Whitespace-insensitive matching**: "Inv oice" and "Invo\nice" both match "invoice"
//! - **Case-insensitive matching**: terms and page text are case-folded
//! - **Exact offsets**: every match maps back to a character span of the original page text
//! - **Overlapping occurrences**: "aa" is found twice in "aaa"
//! - **First match wins**: a term found on one page is not searched on later pages
//!
//! ## Architecture
//!
//! - [`text`]: page text and its normalized index (normalized chars + offset map)
//! - [`search`]: term parsing and the matcher
//! - [`highlight`]: the per-document scan and its result
//! - [`document`]: the PDF engine boundary ([`DocumentSource`]) and a text-backed engine
//! - [`storage`]: upload/download document stores
//!
//! ## Quick Start
//!
//! ```
//! use pdf_highlighter::{HighlightScanner, SearchTerms, TextDocument};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = TextDocument::from_pages(["Inv oice #123", "Total: 42"]);
//! let terms = SearchTerms::parse("invoice, 42", ',')?;
//!
//! let result = HighlightScanner::default().scan(&mut doc, &terms)?;
//! assert_eq!(result.total_match_count, 2);
//! assert_eq!(result.occurrences[0].literal_text, "Inv oice");
//! assert_eq!(doc.highlights().len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Geometry and annotations
/// Highlight annotation types
pub mod annotation_types;
pub mod geometry;

// Text normalization
pub mod text;

// Term search
pub mod search;

// PDF engine boundary
pub mod document;

// Document scan
pub mod highlight;

// Upload/download storage
pub mod storage;

// Re-exports
pub use annotation_types::{AnnotationColor, HighlightAnnotation};
pub use config::HighlightConfig;
pub use document::{DocumentSource, TextDocument};
pub use error::{Error, Result};
pub use highlight::{HighlightScanner, ScanOutcome, SessionResult};
pub use search::{Occurrence, SearchTerms};
pub use storage::{DirectoryStore, DocumentHandle, DocumentStore, MemoryStore};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
