//! Search term parsing and deduplication.

use crate::error::{Error, Result};
use crate::text::is_space;
use indexmap::IndexSet;

/// Deduplicated, trimmed, non-empty search terms in first-seen order.
///
/// Terms are processed in this order during a scan, which keeps per-page
/// discovery order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerms {
    terms: IndexSet<String>,
}

impl SearchTerms {
    /// Build from individual terms, trimming and dropping empty ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlighter::search::SearchTerms;
    ///
    /// let terms = SearchTerms::from_terms(["42", " 42 ", "", "zzz"]);
    /// assert_eq!(terms.iter().collect::<Vec<_>>(), vec!["42", "zzz"]);
    /// ```
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim_matches(is_space).to_string())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// Parse a raw separated term field (e.g. `"42, INV-7 ,42"`).
    ///
    /// Fails with [`Error::NoSearchTerms`] when no term survives trimming.
    pub fn parse(raw: &str, separator: char) -> Result<Self> {
        let terms = Self::from_terms(raw.split(separator));
        if terms.is_empty() {
            return Err(Error::NoSearchTerms);
        }
        Ok(terms)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether there are no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether `term` (already trimmed) is one of the terms.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}
