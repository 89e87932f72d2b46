//! Text measurement service
//!
//! The viewer sizes nodes from the rendered extent of their labels. How text
//! is rendered (font, zoom, canvas) belongs to the embedding viewer, so the
//! node model only sees the [`TextMeasure`] trait. [`MonospaceMeasure`] is
//! the built-in implementation for fixed-pitch fonts and terminals.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Rendered extent of a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Horizontal extent (pixels)
    pub width: f64,
    /// Vertical extent (pixels)
    pub height: f64,
}

impl BoundingBox {
    /// Create a bounding box
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Measures the rendered bounding box of a string under the current font
pub trait TextMeasure {
    /// Bounding box of `text`
    fn measure(&self, text: &str) -> BoundingBox;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure(&self, text: &str) -> BoundingBox {
        (**self).measure(text)
    }
}

/// Fixed-pitch measurer
///
/// Width is the widest line's display column count times `char_width`;
/// East Asian wide characters take two columns and zero-width marks none.
/// Height is the line count times `line_height`, with at least one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    char_width: f64,
    line_height: f64,
    padding: f64,
}

impl MonospaceMeasure {
    /// Create a measurer from column width and line height
    pub fn new(char_width: f64, line_height: f64) -> Self {
        Self {
            char_width,
            line_height,
            padding: 0.0,
        }
    }

    /// Add `padding` to both dimensions of every measurement
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Display columns of the widest line
    pub fn columns(text: &str) -> usize {
        text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0)
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        crate::core::config::MeasureConfig::default().measurer()
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str) -> BoundingBox {
        let lines = text.lines().count().max(1);
        BoundingBox {
            width: Self::columns(text) as f64 * self.char_width + self.padding,
            height: lines as f64 * self.line_height + self.padding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_measurement() {
        let m = MonospaceMeasure::new(7.0, 16.0);
        assert_eq!(m.measure("5 Add(1,2)"), BoundingBox::new(70.0, 16.0));
    }

    #[test]
    fn test_empty_text_has_one_line() {
        let m = MonospaceMeasure::new(7.0, 16.0);
        assert_eq!(m.measure(""), BoundingBox::new(0.0, 16.0));
    }

    #[test]
    fn test_multiline_uses_widest_line() {
        let m = MonospaceMeasure::new(2.0, 10.0);
        let bbox = m.measure("ab\nabcd\na");
        assert_eq!(bbox, BoundingBox::new(8.0, 30.0));
    }

    #[test]
    fn test_wide_characters() {
        // CJK ideographs occupy two columns, combining marks none
        assert_eq!(MonospaceMeasure::columns("\u{4e2d}\u{6587}"), 4);
        assert_eq!(MonospaceMeasure::columns("e\u{0301}"), 1);
    }

    #[test]
    fn test_bounding_box_serde_round_trip() {
        let bbox = BoundingBox::new(70.0, 16.5);
        let json = serde_json::to_string(&bbox).unwrap();
        assert_eq!(json, r#"{"width":70.0,"height":16.5}"#);
        assert_eq!(serde_json::from_str::<BoundingBox>(&json).unwrap(), bbox);
    }

    #[test]
    fn test_padding() {
        let m = MonospaceMeasure::new(1.0, 1.0).with_padding(4.0);
        assert_eq!(m.measure("abc"), BoundingBox::new(7.0, 5.0));
    }

    #[test]
    fn test_measure_through_reference() {
        fn width_of(m: impl TextMeasure, s: &str) -> f64 {
            m.measure(s).width
        }
        let m = MonospaceMeasure::default();
        assert_eq!(width_of(&m, "ab"), 14.0);
    }
}
