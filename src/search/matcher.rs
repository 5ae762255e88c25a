//! Literal matching over normalized page text.
//!
//! The matcher works on the normalized index of a page and reports spans in
//! the page's original character offsets. Overlapping occurrences are all
//! reported: after a match at normalized position `idx` the scan resumes at
//! `idx + 1`, so "aa" is found twice in "aaa".

use crate::error::{Error, Result};
use crate::text::{NormalizedIndex, RawText};
use serde::Serialize;
use std::ops::Range;

/// One located match of a term on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// The search term as the user entered it (trimmed)
    pub term: String,
    /// Page number (1-indexed)
    pub page_number: usize,
    /// Half-open character span into the page text
    pub original_span: Range<usize>,
    /// Page text covered by the span, whitespace and casing preserved
    pub literal_text: String,
}

/// Find the next occurrence of `needle` in `haystack` at or after `from`.
fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

/// Find every occurrence of a normalized term in a page's normalized text.
///
/// Returns original-text character spans in ascending order of their start.
/// An empty term is rejected with [`Error::EmptySearchTerm`].
///
/// # Examples
///
/// ```
/// use pdf_highlighter::search::find_all;
/// use pdf_highlighter::text::normalize;
///
/// let index = normalize("Inv oice #123");
/// let spans = find_all(&index, "invoice").unwrap();
/// assert_eq!(spans, vec![0..8]);
/// ```
pub fn find_all(index: &NormalizedIndex, normalized_term: &str) -> Result<Vec<Range<usize>>> {
    let needle: Vec<char> = normalized_term.chars().collect();
    if needle.is_empty() {
        return Err(Error::EmptySearchTerm);
    }

    let haystack = index.normalized();
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some(idx) = find_from(haystack, &needle, cursor) {
        // In bounds: the window [idx, idx + len) was just matched
        if let Some(span) = index.original_span(idx..idx + needle.len()) {
            spans.push(span);
        }
        cursor = idx + 1;
    }

    Ok(spans)
}

/// Find every occurrence of `term` on a page and resolve its literal text.
///
/// `normalized_term` must be the normalized form of `term`; `index` must be
/// the normalized index of `raw`.
pub fn find_occurrences(
    page_number: usize,
    raw: &RawText,
    index: &NormalizedIndex,
    term: &str,
    normalized_term: &str,
) -> Result<Vec<Occurrence>> {
    let spans = find_all(index, normalized_term)?;

    Ok(spans
        .into_iter()
        .filter_map(|span| {
            let literal_text = raw.slice(span.clone())?.to_string();
            Some(Occurrence {
                term: term.to_string(),
                page_number,
                original_span: span,
                literal_text,
            })
        })
        .collect())
}
