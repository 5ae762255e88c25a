//! Document traversal: find terms page by page and highlight them.
//!
//! Pages are visited in order. A term found on a page is highlighted at every
//! occurrence on that page and then dropped from the search for later pages.

use super::result::{PageScanResult, SessionResult};
use crate::config::HighlightConfig;
use crate::document::DocumentSource;
use crate::error::Result;
use crate::search::{find_occurrences, Occurrence, SearchTerms};
use crate::text::{normalize_term_for_search, NormalizedIndex, RawText};

/// Find the occurrences of every still-unmatched term on one page.
///
/// Terms in `already_matched` are skipped. Occurrences come back grouped by
/// term in `terms` order. No engine calls are made.
pub fn find_page_occurrences(
    page_number: usize,
    raw: &RawText,
    index: &NormalizedIndex,
    terms: &SearchTerms,
    already_matched: impl Fn(&str) -> bool,
) -> Result<Vec<Occurrence>> {
    let mut occurrences = Vec::new();

    for term in terms.iter().filter(|term| !already_matched(*term)) {
        let normalized_term = normalize_term_for_search(term);
        if normalized_term.is_empty() {
            log::warn!("Skipping term {:?}: nothing left after normalization", term);
            continue;
        }

        let found = find_occurrences(page_number, raw, index, term, &normalized_term)?;
        if !found.is_empty() {
            log::debug!("Term {:?}: {} occurrence(s) on page {}", term, found.len(), page_number);
        }
        occurrences.extend(found);
    }

    Ok(occurrences)
}

/// Scans documents for search terms and highlights the matches.
#[derive(Debug, Clone, Default)]
pub struct HighlightScanner {
    config: HighlightConfig,
}

impl HighlightScanner {
    /// Create a scanner with the given configuration.
    pub fn new(config: HighlightConfig) -> Self {
        Self { config }
    }

    /// The scanner's configuration.
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Scan every page of `doc` for `terms`, highlighting each occurrence.
    ///
    /// Pages with blank text are skipped. Engine failures abort the scan.
    pub fn scan<D>(&self, doc: &mut D, terms: &SearchTerms) -> Result<SessionResult>
    where
        D: DocumentSource + ?Sized,
    {
        let page_count = doc.page_count()?;
        let mut result = SessionResult::new(terms);

        for page_index in 0..page_count {
            let page_number = page_index + 1;
            result.pages_scanned += 1;

            let raw = RawText::new(doc.extract_text(page_index)?);
            if raw.is_blank() {
                log::debug!("Page {} has no extractable text, skipping", page_number);
                continue;
            }
            result.pages_with_text += 1;

            if result.matched_terms.len() == terms.len() {
                continue;
            }

            let page = self.scan_page(doc, page_index, &raw, terms, &result)?;
            result.record_page(page);
        }

        log::info!(
            "Scanned {} page(s): {} match(es), {} of {} term(s) found, {} highlight(s)",
            result.pages_scanned,
            result.total_match_count,
            result.matched_terms.len(),
            terms.len(),
            result.highlights_added
        );

        Ok(result)
    }

    fn scan_page<D>(
        &self,
        doc: &mut D,
        page_index: usize,
        raw: &RawText,
        terms: &SearchTerms,
        session: &SessionResult,
    ) -> Result<PageScanResult>
    where
        D: DocumentSource + ?Sized,
    {
        let page_number = page_index + 1;
        let index = raw.normalize();
        let occurrences =
            find_page_occurrences(page_number, raw, &index, terms, |t| session.is_matched(t))?;

        let mut highlights_added = 0;
        for occurrence in &occurrences {
            let rects = doc.search_for_rects(page_index, &occurrence.literal_text)?;
            if rects.is_empty() {
                log::warn!(
                    "No on-page region for {:?} on page {}",
                    occurrence.literal_text,
                    page_number
                );
            }
            for rect in rects {
                doc.add_highlight(page_index, rect, &self.config.highlight_color)?;
                highlights_added += 1;
            }
        }

        Ok(PageScanResult {
            page_number,
            occurrences,
            highlights_added,
        })
    }
}
