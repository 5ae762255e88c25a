//! The PDF engine boundary.
//!
//! [`DocumentSource`] is everything the scanner needs from a PDF engine:
//! page iteration, literal text extraction, locating a literal substring on a
//! page, and drawing highlights. Pages are 0-indexed at this boundary.
//!
//! [`TextDocument`] is an engine backed by plain page text. Each page is laid
//! out on a fixed character grid (one line per `\n`), which is enough to
//! produce rectangles for literal substrings, including ones that wrap across
//! lines.

use crate::annotation_types::{AnnotationColor, HighlightAnnotation};
use crate::error::{Error, Result};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Page separator used by `pdftotext` dumps.
pub const FORM_FEED: char = '\u{000C}';

/// A document the scanner can read text from and annotate.
pub trait DocumentSource {
    /// Number of pages.
    fn page_count(&mut self) -> Result<usize>;

    /// Literal text of a page, with the engine's whitespace conventions.
    fn extract_text(&mut self, page_index: usize) -> Result<String>;

    /// Bounding boxes of every place `literal` appears on the page.
    ///
    /// May be empty even when the normalized text matched, if the literal
    /// does not correspond to a contiguous region the engine can locate.
    fn search_for_rects(&mut self, page_index: usize, literal: &str) -> Result<Vec<Rect>>;

    /// Draw a highlight annotation over `rect`.
    fn add_highlight(
        &mut self,
        page_index: usize,
        rect: Rect,
        color: &AnnotationColor,
    ) -> Result<()>;
}

/// Fixed-pitch layout used to place characters of a [`TextDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Left margin
    pub origin_x: f32,
    /// Top margin
    pub origin_y: f32,
    /// Advance of one character
    pub char_width: f32,
    /// Distance between lines
    pub line_height: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            origin_x: 72.0,
            origin_y: 72.0,
            char_width: 6.0,
            line_height: 12.0,
        }
    }
}

impl GridLayout {
    fn cell_run(&self, line: usize, first_col: usize, end_col: usize) -> Rect {
        Rect::new(
            self.origin_x + first_col as f32 * self.char_width,
            self.origin_y + line as f32 * self.line_height,
            (end_col - first_col) as f32 * self.char_width,
            self.line_height,
        )
    }
}

/// A text-backed document that records its highlights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextDocument {
    pages: Vec<String>,
    #[serde(default)]
    layout: GridLayout,
    #[serde(default)]
    highlights: Vec<HighlightAnnotation>,
}

impl TextDocument {
    /// Create a document with one entry per page.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
            layout: GridLayout::default(),
            highlights: Vec::new(),
        }
    }

    /// Split a text dump into pages on form feeds.
    ///
    /// A trailing form feed ends the last page rather than opening a new one.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlighter::document::TextDocument;
    ///
    /// let doc = TextDocument::from_form_feed_text("page one\u{c}page two\u{c}");
    /// assert_eq!(doc.pages().len(), 2);
    /// ```
    pub fn from_form_feed_text(text: &str) -> Self {
        let body = text.strip_suffix(FORM_FEED).unwrap_or(text);
        Self::from_pages(body.split(FORM_FEED))
    }

    /// Replace the grid layout.
    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Page texts.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// All highlights drawn so far, in drawing order.
    pub fn highlights(&self) -> &[HighlightAnnotation] {
        &self.highlights
    }

    /// Highlights on one page.
    pub fn highlights_on(&self, page_index: usize) -> impl Iterator<Item = &HighlightAnnotation> {
        self.highlights.iter().filter(move |h| h.page == page_index)
    }

    /// Serialize the document, highlights included.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Load a document previously written by [`TextDocument::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn page(&self, page_index: usize) -> Result<&str> {
        self.pages
            .get(page_index)
            .map(String::as_str)
            .ok_or(Error::PageOutOfRange {
                page: page_index,
                page_count: self.pages.len(),
            })
    }

    /// Rectangles covering `text[byte_start..byte_end]`, one per line touched.
    fn rects_for_range(&self, text: &str, byte_start: usize, byte_end: usize) -> Vec<Rect> {
        let before = &text[..byte_start];
        let mut line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let mut col = before[line_start..].chars().count();

        let mut rects = Vec::new();
        let mut run_start: Option<usize> = None;

        for c in text[byte_start..byte_end].chars() {
            if c == '\n' {
                if let Some(first) = run_start.take() {
                    rects.push(self.layout.cell_run(line, first, col));
                }
                line += 1;
                col = 0;
                continue;
            }
            run_start.get_or_insert(col);
            col += 1;
        }
        if let Some(first) = run_start {
            rects.push(self.layout.cell_run(line, first, col));
        }

        rects
    }
}

impl DocumentSource for TextDocument {
    fn page_count(&mut self) -> Result<usize> {
        Ok(self.pages.len())
    }

    fn extract_text(&mut self, page_index: usize) -> Result<String> {
        self.page(page_index).map(str::to_string)
    }

    fn search_for_rects(&mut self, page_index: usize, literal: &str) -> Result<Vec<Rect>> {
        let text = self.page(page_index)?;
        if literal.is_empty() {
            return Ok(Vec::new());
        }

        Ok(text
            .match_indices(literal)
            .flat_map(|(start, m)| self.rects_for_range(text, start, start + m.len()))
            .collect())
    }

    fn add_highlight(
        &mut self,
        page_index: usize,
        rect: Rect,
        color: &AnnotationColor,
    ) -> Result<()> {
        self.page(page_index)?;
        self.highlights
            .push(HighlightAnnotation::from_rect(page_index, rect, color.clone()));
        Ok(())
    }
}
