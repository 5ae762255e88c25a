//! Term search over page text.
//!
//! This module provides whitespace- and case-insensitive literal search that
//! reports matches as spans of the original page text. Supports:
//! - Terms split by arbitrary whitespace or line breaks in the page text
//! - Overlapping occurrences
//! - Comma-separated term input with trimming and deduplication
//!
//! ## Example
//!
//! ```
//! use pdf_highlighter::search::{find_occurrences, SearchTerms};
//! use pdf_highlighter::text::{normalize_term_for_search, RawText};
//!
//! let terms = SearchTerms::parse("invoice, 123", ',').unwrap();
//! let raw = RawText::new("Inv oice #1 23");
//! let index = raw.normalize();
//!
//! for term in terms.iter() {
//!     let normalized = normalize_term_for_search(term);
//!     for occ in find_occurrences(1, &raw, &index, term, &normalized).unwrap() {
//!         println!("'{}' on page {} as {:?}", occ.term, occ.page_number, occ.literal_text);
//!     }
//! }
//! ```

mod matcher;
mod terms;

pub use matcher::{find_all, find_occurrences, Occurrence};
pub use terms::SearchTerms;
