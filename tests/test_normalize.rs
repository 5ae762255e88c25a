//! Tests for page text normalization and offset mapping.

use pdf_highlighter::text::{normalize, normalize_term_for_search, RawText};

mod normalized_index {
    use super::*;

    #[test]
    fn test_strips_every_whitespace_class() {
        let index = normalize("a b\tc\nd\r\ne\u{2003}f\u{00A0}g");
        assert_eq!(index.normalized_string(), "abcdefg");
        assert_eq!(index.len(), index.offsets().len());
    }

    #[test]
    fn test_offsets_point_at_source_chars() {
        let text = "  Hello,\n  World ";
        let index = normalize(text);
        let chars: Vec<char> = text.chars().collect();

        for (n, &offset) in index.normalized().iter().zip(index.offsets()) {
            assert_eq!(chars[offset].to_lowercase().next(), Some(*n));
        }
        assert_eq!(index.offsets().first(), Some(&2));
        assert_eq!(index.offsets().last(), Some(&15));
    }

    #[test]
    fn test_offsets_strictly_increasing() {
        let index = normalize("x  y \n z\t\tw");
        assert!(index.offsets().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_normalize_is_pure() {
        let text = "Order 42\nshipped";
        assert_eq!(normalize(text), normalize(text));
    }

    #[test]
    fn test_hyphen_is_kept() {
        // Hyphenation is not undone, only whitespace is removed
        assert_eq!(normalize("INV-\n7").normalized_string(), "inv-7");
    }
}

mod term_normalization {
    use super::*;

    #[test]
    fn test_term_normalization() {
        assert_eq!(normalize_term_for_search("  INV 007 "), "inv007");
        assert_eq!(normalize_term_for_search(""), "");
        assert_eq!(normalize_term_for_search(" \n "), "");
    }

    #[test]
    fn test_term_and_page_paths_agree() {
        let inputs = ["Invoice #123", "ÉCOLE  Normale", "a\u{2009}b", "ΣΊΣΥΦΟΣ"];
        for input in inputs {
            assert_eq!(
                normalize_term_for_search(input),
                normalize(input).normalized_string(),
                "paths disagree for {input:?}"
            );
        }
    }
}

mod raw_text {
    use super::*;

    #[test]
    fn test_slice_multibyte() {
        let raw = RawText::new("Straße 12, Zürich");
        assert_eq!(raw.len(), 17);
        assert_eq!(raw.slice(0..6), Some("Straße"));
        assert_eq!(raw.slice(11..17), Some("Zürich"));
    }

    #[test]
    fn test_slice_out_of_bounds() {
        let raw = RawText::new("abc");
        assert_eq!(raw.slice(0..4), None);
        assert_eq!(raw.slice(4..4), None);
    }

    #[test]
    fn test_normalize_via_raw_text() {
        let raw = RawText::new("Inv oice");
        assert_eq!(raw.normalize(), normalize("Inv oice"));
        assert_eq!(raw.as_str(), "Inv oice");
    }
}
