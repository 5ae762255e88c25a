//! Tests for the matcher and search term handling.

use pdf_highlighter::search::{find_all, find_occurrences, SearchTerms};
use pdf_highlighter::text::{normalize, normalize_term_for_search, RawText};
use pdf_highlighter::Error;

/// Occurrences of `term` on a single page, as (span, literal) pairs.
fn occurrences_of(page: &str, term: &str) -> Vec<(std::ops::Range<usize>, String)> {
    let raw = RawText::new(page);
    let index = raw.normalize();
    let normalized = normalize_term_for_search(term);
    find_occurrences(1, &raw, &index, term, &normalized)
        .expect("search failed")
        .into_iter()
        .map(|o| (o.original_span, o.literal_text))
        .collect()
}

mod matcher {
    use super::*;

    #[test]
    fn test_overlap_enumeration() {
        let index = normalize("aaa");
        let spans = find_all(&index, "aa").unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans, vec![0..2, 1..3]);
    }

    #[test]
    fn test_no_match() {
        let index = normalize("hello world");
        assert!(find_all(&index, "xyz").unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_split_match() {
        let found = occurrences_of("Inv oice #123", "invoice");
        assert_eq!(found, vec![(0..8, "Inv oice".to_string())]);
    }

    #[test]
    fn test_term_with_internal_whitespace() {
        let found = occurrences_of("Account No: 12345678", "No : 1234 5678");
        assert_eq!(found, vec![(8..20, "No: 12345678".to_string())]);
    }

    #[test]
    fn test_match_across_line_wrap_keeps_newline() {
        let found = occurrences_of("Amount due\nby 31 Dec", "due by");
        assert_eq!(found, vec![(7..13, "due\nby".to_string())]);
    }

    #[test]
    fn test_case_insensitive() {
        let found = occurrences_of("TOTAL total ToTaL", "Total");
        let literals: Vec<_> = found.into_iter().map(|(_, l)| l).collect();
        assert_eq!(literals, vec!["TOTAL", "total", "ToTaL"]);
    }

    #[test]
    fn test_spans_are_in_bounds_and_non_empty() {
        let page = "ab ab\nab";
        let raw = RawText::new(page);
        for span in find_all(&raw.normalize(), "ba").unwrap() {
            assert!(span.start < span.end);
            assert!(span.end <= raw.len());
        }
    }

    #[test]
    fn test_empty_term_precondition() {
        let index = normalize("text");
        assert!(matches!(find_all(&index, ""), Err(Error::EmptySearchTerm)));
    }
}

mod search_terms {
    use super::*;

    #[test]
    fn test_parse_from_form_field() {
        let terms = SearchTerms::parse("42, zzz ,42,", ',').unwrap();
        assert_eq!(terms.len(), 2);
        assert!(terms.contains("42"));
        assert!(terms.contains("zzz"));
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let terms = SearchTerms::from_terms(["zeta", "alpha", "zeta", "mid"]);
        assert_eq!(terms.iter().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_blank_input_is_rejected() {
        assert!(matches!(SearchTerms::parse("  ,  ", ','), Err(Error::NoSearchTerms)));
    }
}
