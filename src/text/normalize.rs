//! Whitespace-stripping, case-folding normalization with offset tracking.
//!
//! PDF text extraction inserts spaces and line breaks wherever the layout
//! suggests them, so "Invoice" may come back as "Inv oice" or "Invo\nice".
//! Removing whitespace on both sides of the comparison makes those runs
//! comparable; the offset table maps each normalized character back to the
//! character that produced it.

use std::ops::Range;

/// Fold a single character for comparison.
///
/// Characters go through their uppercase form first so that case variants
/// with no distinct uppercase ('ς', 'ı', 'ſ', 'µ') land on the same char as
/// their siblings. Uppercase forms that expand (e.g. 'ß' -> "SS") are not
/// followed, and lowercase forms that expand (e.g. 'İ') keep their first
/// char, so the normalized text stays one char per source char.
#[inline]
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    let base = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    base.to_lowercase().next().unwrap_or(base)
}

/// Whitespace as PDF text extractors emit it.
///
/// Unicode `White_Space`, plus the ASCII information separators
/// U+001C..=U+001F that some extractors use as line and paragraph breaks.
#[inline]
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Literal text extracted from one page.
///
/// Offsets into a `RawText` are character offsets, not byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText {
    content: String,
    /// Byte offset of each char, plus `content.len()` as a sentinel.
    char_starts: Vec<usize>,
}

impl RawText {
    /// Wrap extracted page text.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let mut char_starts: Vec<usize> = content.char_indices().map(|(i, _)| i).collect();
        char_starts.push(content.len());
        Self {
            content,
            char_starts,
        }
    }

    /// The text as extracted.
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.char_starts.len() - 1
    }

    /// Whether the text has no characters at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the text has nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.content.chars().all(is_space)
    }

    /// Substring for a half-open character span.
    ///
    /// Returns `None` when the span is reversed or runs past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlighter::text::RawText;
    ///
    /// let raw = RawText::new("Grüße aus Köln");
    /// assert_eq!(raw.slice(10..14), Some("Köln"));
    /// assert_eq!(raw.slice(10..15), None);
    /// ```
    pub fn slice(&self, span: Range<usize>) -> Option<&str> {
        if span.start > span.end {
            return None;
        }
        let start = *self.char_starts.get(span.start)?;
        let end = *self.char_starts.get(span.end)?;
        self.content.get(start..end)
    }

    /// Build the normalized index for this text.
    pub fn normalize(&self) -> NormalizedIndex {
        normalize(&self.content)
    }
}

/// Normalized text paired with its offset map.
///
/// Invariants: `normalized.len() == offsets.len()`, `offsets` strictly
/// increasing, and no normalized char is whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedIndex {
    normalized: Vec<char>,
    offsets: Vec<usize>,
}

impl NormalizedIndex {
    /// Case-folded, whitespace-free characters.
    pub fn normalized(&self) -> &[char] {
        &self.normalized
    }

    /// Original char offset of every normalized char.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of normalized characters.
    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    /// Whether the source had no non-whitespace characters.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Normalized characters collected into a string.
    pub fn normalized_string(&self) -> String {
        self.normalized.iter().collect()
    }

    /// Map a normalized span `[start, end)` to the original char span.
    ///
    /// The original span runs from the first matched char to one past the
    /// last, so whitespace between them is included.
    pub fn original_span(&self, normalized: Range<usize>) -> Option<Range<usize>> {
        if normalized.start >= normalized.end {
            return None;
        }
        let start = *self.offsets.get(normalized.start)?;
        let last = *self.offsets.get(normalized.end - 1)?;
        Some(start..last + 1)
    }
}

/// Normalize text, tracking where each normalized char came from.
///
/// # Examples
///
/// ```
/// use pdf_highlighter::text::normalize;
///
/// let index = normalize("Inv oice");
/// assert_eq!(index.normalized_string(), "invoice");
/// assert_eq!(index.offsets(), &[0, 1, 2, 4, 5, 6, 7]);
/// ```
pub fn normalize(text: &str) -> NormalizedIndex {
    let mut normalized = Vec::with_capacity(text.len());
    let mut offsets = Vec::with_capacity(text.len());

    for (i, c) in text.chars().enumerate() {
        if is_space(c) {
            continue;
        }
        normalized.push(fold_char(c));
        offsets.push(i);
    }

    NormalizedIndex {
        normalized,
        offsets,
    }
}

/// Normalize a search term. Same rules as [`normalize`], without offsets.
pub fn normalize_term_for_search(term: &str) -> String {
    term.chars()
        .filter(|&c| !is_space(c))
        .map(fold_char)
        .collect()
}
