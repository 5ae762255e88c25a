//! Whole-document search and highlighting.
//!
//! ## Example
//!
//! ```
//! use pdf_highlighter::document::TextDocument;
//! use pdf_highlighter::highlight::{HighlightScanner, ScanOutcome};
//! use pdf_highlighter::search::SearchTerms;
//!
//! let mut doc = TextDocument::from_pages(["Order 42 shipped", "Invoice 99 paid"]);
//! let terms = SearchTerms::parse("42, zzz", ',').unwrap();
//!
//! let result = HighlightScanner::default().scan(&mut doc, &terms).unwrap();
//! assert_eq!(result.total_match_count, 1);
//! assert_eq!(result.not_found_sorted(), vec!["zzz"]);
//! assert_eq!(ScanOutcome::from_result(&result).to_string(), "1 total matches found!");
//! ```

mod outcome;
mod result;
mod scanner;

pub use outcome::ScanOutcome;
pub use result::{PageScanResult, SessionResult, TermMatch};
pub use scanner::{find_page_occurrences, HighlightScanner};
