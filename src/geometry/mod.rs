//! Geometric primitives for on-page highlight regions.
//!
//! Rectangles use PDF user space units with the origin at the top-left of the
//! page and y growing downward, matching how the text engine reports glyph
//! boxes.

use serde::{Deserialize, Serialize};

/// A rectangle in page space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of top-left corner
    pub x: f32,
    /// Y coordinate of top-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlighter::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// QuadPoints for this rectangle, counter-clockwise from the top-left
    /// corner: x1,y1, x2,y2, x3,y3, x4,y4.
    pub fn to_quad_points(&self) -> [f64; 8] {
        let (x0, y0) = (self.x as f64, self.y as f64);
        let (x1, y1) = (self.right() as f64, self.bottom() as f64);
        [x0, y0, x1, y0, x1, y1, x0, y1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn test_quad_points() {
        let quad = Rect::new(72.0, 720.0, 100.0, 12.0).to_quad_points();
        assert_eq!(quad, [72.0, 720.0, 172.0, 720.0, 172.0, 732.0, 72.0, 732.0]);
    }
}
