//! Per-page and per-document scan results.

use crate::search::{Occurrence, SearchTerms};
use indexmap::IndexSet;
use serde::Serialize;
use std::collections::BTreeSet;

/// A term and the page it was first found on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermMatch {
    /// The search term
    pub term: String,
    /// Page number (1-indexed)
    pub page_number: usize,
}

/// Occurrences found on a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageScanResult {
    /// Page number (1-indexed)
    pub page_number: usize,
    /// Occurrences grouped by term, in term order
    pub occurrences: Vec<Occurrence>,
    /// Highlight rectangles drawn for these occurrences
    pub highlights_added: usize,
}

impl PageScanResult {
    /// Terms with at least one occurrence on this page, in scan order.
    pub fn matched_terms(&self) -> IndexSet<&str> {
        self.occurrences.iter().map(|o| o.term.as_str()).collect()
    }
}

/// Aggregate result of scanning a whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionResult {
    /// Terms found on at least one page, in discovery order
    pub matched_terms: IndexSet<String>,
    /// Terms never found, kept sorted
    pub not_found_terms: BTreeSet<String>,
    /// Occurrences across all pages and terms
    pub total_match_count: usize,
    /// One entry per (term, page) where the term was first found
    pub matches: Vec<TermMatch>,
    /// Every occurrence, page-ascending
    pub occurrences: Vec<Occurrence>,
    /// Pages visited
    pub pages_scanned: usize,
    /// Pages with non-blank text
    pub pages_with_text: usize,
    /// Highlight rectangles drawn
    pub highlights_added: usize,
}

impl SessionResult {
    /// Start a session where every term is still unmatched.
    pub fn new(terms: &SearchTerms) -> Self {
        Self {
            not_found_terms: terms.iter().map(str::to_string).collect(),
            ..Default::default()
        }
    }

    /// Whether `term` has already been found on some page.
    pub fn is_matched(&self, term: &str) -> bool {
        self.matched_terms.contains(term)
    }

    /// Fold one page's occurrences into the session.
    pub fn record_page(&mut self, page: PageScanResult) {
        for term in page.matched_terms() {
            if self.matched_terms.insert(term.to_string()) {
                self.not_found_terms.remove(term);
                self.matches.push(TermMatch {
                    term: term.to_string(),
                    page_number: page.page_number,
                });
            }
        }
        self.total_match_count += page.occurrences.len();
        self.highlights_added += page.highlights_added;
        self.occurrences.extend(page.occurrences);
    }

    /// True when no page had any extractable text (including zero pages).
    pub fn no_extractable_text(&self) -> bool {
        self.pages_with_text == 0
    }

    /// True when there was text but no term matched anywhere.
    pub fn no_matches(&self) -> bool {
        !self.no_extractable_text() && self.matched_terms.is_empty()
    }

    /// Unmatched terms in sorted order.
    pub fn not_found_sorted(&self) -> Vec<&str> {
        self.not_found_terms.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrence(term: &str, page_number: usize) -> Occurrence {
        Occurrence {
            term: term.to_string(),
            page_number,
            original_span: 0..term.len(),
            literal_text: term.to_string(),
        }
    }

    #[test]
    fn test_new_session_has_all_terms_unmatched() {
        let terms = SearchTerms::from_terms(["zeta", "alpha"]);
        let session = SessionResult::new(&terms);
        assert_eq!(session.not_found_sorted(), vec!["alpha", "zeta"]);
        assert!(session.matched_terms.is_empty());
        assert!(session.no_extractable_text());
        assert!(!session.no_matches());
    }

    #[test]
    fn test_record_page() {
        let terms = SearchTerms::from_terms(["a", "b", "c"]);
        let mut session = SessionResult::new(&terms);
        session.pages_with_text = 1;
        session.record_page(PageScanResult {
            page_number: 2,
            occurrences: vec![occurrence("b", 2), occurrence("b", 2), occurrence("a", 2)],
            highlights_added: 4,
        });

        assert_eq!(session.total_match_count, 3);
        assert_eq!(session.highlights_added, 4);
        assert_eq!(session.not_found_sorted(), vec!["c"]);
        assert_eq!(
            session.matches,
            vec![
                TermMatch {
                    term: "b".to_string(),
                    page_number: 2
                },
                TermMatch {
                    term: "a".to_string(),
                    page_number: 2
                },
            ]
        );
        assert!(session.is_matched("a"));
        assert!(!session.no_matches());
    }

    #[test]
    fn test_no_matches_flag() {
        let terms = SearchTerms::from_terms(["x"]);
        let mut session = SessionResult::new(&terms);
        session.pages_with_text = 2;
        session.record_page(PageScanResult::default());
        assert!(session.no_matches());
        assert!(!session.no_extractable_text());
    }
}
