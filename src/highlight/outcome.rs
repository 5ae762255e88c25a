//! Classification of a finished session for the presentation layer.

use super::result::SessionResult;
use serde::Serialize;
use std::fmt;

/// What the user should be told about a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// No page had extractable text; the document likely needs OCR
    NoText,
    /// Text was present but no term matched
    NoMatches {
        /// Terms searched for, sorted
        not_found: Vec<String>,
    },
    /// At least one term matched
    Matched {
        /// Total occurrences found
        total: usize,
        /// Terms never found, sorted
        not_found: Vec<String>,
    },
}

impl ScanOutcome {
    /// Classify a session result.
    pub fn from_result(result: &SessionResult) -> Self {
        let not_found = || -> Vec<String> { result.not_found_terms.iter().cloned().collect() };
        if result.no_extractable_text() {
            Self::NoText
        } else if result.no_matches() {
            Self::NoMatches {
                not_found: not_found(),
            }
        } else {
            Self::Matched {
                total: result.total_match_count,
                not_found: not_found(),
            }
        }
    }

    /// Whether the outcome should be shown as an error.
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Matched { .. })
    }
}

impl fmt::Display for ScanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoText => write!(
                f,
                "PDF has no extractable text. Scanned PDFs need OCR before they can be searched."
            ),
            Self::NoMatches { .. } => write!(f, "No exact matches found."),
            Self::Matched { total, .. } => write!(f, "{} total matches found!", total),
        }
    }
}
