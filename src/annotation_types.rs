//! Highlight annotation types.
//!
//! A highlight is a text markup annotation (PDF spec Section 12.5.6.10): a
//! bounding rectangle, one quadrilateral per marked region, and a color.

use crate::error::{Error, Result};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Annotation color representation.
///
/// Colors are specified as values in the range 0.0 to 1.0. Serialized as the
/// PDF color array (`[]`, `[g]`, `[r, g, b]` or `[c, m, y, k]`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<f32>", into = "Vec<f32>")]
pub enum AnnotationColor {
    /// No color (transparent)
    #[default]
    None,
    /// Grayscale (1 component)
    Gray(f32),
    /// RGB color (3 components)
    Rgb(f32, f32, f32),
    /// CMYK color (4 components)
    Cmyk(f32, f32, f32, f32),
}

impl AnnotationColor {
    /// Create yellow color, the highlight default.
    pub fn yellow() -> Self {
        Self::Rgb(1.0, 1.0, 0.0)
    }

    /// Convert to PDF array representation.
    pub fn to_array(&self) -> Option<Vec<f32>> {
        match self {
            Self::None => None,
            Self::Gray(g) => Some(vec![*g]),
            Self::Rgb(r, g, b) => Some(vec![*r, *g, *b]),
            Self::Cmyk(c, m, y, k) => Some(vec![*c, *m, *y, *k]),
        }
    }

    /// Parse from PDF array.
    pub fn from_array(arr: &[f32]) -> Self {
        match arr.len() {
            0 => Self::None,
            1 => Self::Gray(arr[0]),
            3 => Self::Rgb(arr[0], arr[1], arr[2]),
            4 => Self::Cmyk(arr[0], arr[1], arr[2], arr[3]),
            _ => Self::None,
        }
    }

    /// Check that every component lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let components = self.to_array().unwrap_or_default();
        match components.iter().find(|c| !(0.0..=1.0).contains(*c)) {
            Some(bad) => Err(Error::Config(format!(
                "color component {} outside [0, 1]",
                bad
            ))),
            None => Ok(()),
        }
    }
}

impl From<Vec<f32>> for AnnotationColor {
    fn from(arr: Vec<f32>) -> Self {
        Self::from_array(&arr)
    }
}

impl From<AnnotationColor> for Vec<f32> {
    fn from(color: AnnotationColor) -> Self {
        color.to_array().unwrap_or_default()
    }
}

/// A highlight annotation placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightAnnotation {
    /// Page the annotation lives on (0-indexed, engine convention)
    pub page: usize,
    /// Bounding rectangle
    pub rect: Rect,
    /// QuadPoints covering the highlighted text
    pub quad_points: Vec<[f64; 8]>,
    /// Highlight color
    pub color: AnnotationColor,
}

impl HighlightAnnotation {
    /// Create a highlight covering a single rectangle.
    pub fn from_rect(page: usize, rect: Rect, color: AnnotationColor) -> Self {
        Self {
            page,
            rect,
            quad_points: vec![rect.to_quad_points()],
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yellow_is_default_highlight() {
        assert_eq!(AnnotationColor::yellow().to_array(), Some(vec![1.0, 1.0, 0.0]));
    }

    #[test]
    fn test_from_array() {
        assert_eq!(AnnotationColor::from_array(&[]), AnnotationColor::None);
        assert_eq!(AnnotationColor::from_array(&[0.5]), AnnotationColor::Gray(0.5));
        assert_eq!(
            AnnotationColor::from_array(&[0.0, 1.0, 0.0]),
            AnnotationColor::Rgb(0.0, 1.0, 0.0)
        );
        assert_eq!(AnnotationColor::from_array(&[1.0, 2.0]), AnnotationColor::None);
    }

    #[test]
    fn test_validate() {
        assert!(AnnotationColor::yellow().validate().is_ok());
        assert!(AnnotationColor::None.validate().is_ok());
        assert!(AnnotationColor::Rgb(1.5, 0.0, 0.0).validate().is_err());
    }

    #[test]
    fn test_color_serde_as_array() {
        let json = serde_json::to_string(&AnnotationColor::yellow()).unwrap();
        assert_eq!(json, "[1.0,1.0,0.0]");

        let parsed: AnnotationColor = serde_json::from_str("[0.0,0.5,1.0]").unwrap();
        assert_eq!(parsed, AnnotationColor::Rgb(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_highlight_from_rect() {
        let rect = Rect::new(10.0, 20.0, 30.0, 12.0);
        let annot = HighlightAnnotation::from_rect(2, rect, AnnotationColor::yellow());
        assert_eq!(annot.page, 2);
        assert_eq!(annot.quad_points.len(), 1);
        assert_eq!(annot.quad_points[0][2], 40.0);
    }
}
