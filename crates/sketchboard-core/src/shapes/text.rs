//! Text shape and the text measurement service.

use super::ElementId;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Font size text labels are laid out with.
pub const TEXT_FONT_SIZE: f64 = 40.0;
/// Fixed height of a text label's box.
pub const TEXT_LINE_HEIGHT: f64 = 40.0;

/// Measures rendered text width for a label.
///
/// Implemented by whoever owns the fonts (the renderer in a real shell). The
/// engine only calls through this trait and never reaches for a global canvas.
pub trait TextMeasure: Debug {
    /// Width in world units of `content` laid out on a single line.
    fn measure_width(&self, content: &str) -> f64;
}

/// Fallback measurement: every character takes half an em.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateMeasure {
    pub font_size: f64,
}

impl Default for ApproximateMeasure {
    fn default() -> Self {
        Self {
            font_size: TEXT_FONT_SIZE,
        }
    }
}

impl TextMeasure for ApproximateMeasure {
    fn measure_width(&self, content: &str) -> f64 {
        content.chars().count() as f64 * self.font_size * 0.5
    }
}

/// A text label.
///
/// `position` is the top-left anchor (x1, y1). `end` (x2, y2) is derived from
/// the measured extent and is only meaningful after [`Text::measured`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ElementId,
    /// Top-left anchor.
    pub position: Point,
    /// Bottom-right corner of the measured box.
    pub end: Point,
    /// The text content.
    pub content: String,
}

impl Text {
    /// Create an empty, unmeasured label at `position`.
    pub fn new(id: ElementId, position: Point) -> Self {
        Self {
            id,
            position,
            end: position,
            content: String::new(),
        }
    }

    /// Create a label whose box is sized by `measure`.
    pub fn measured(
        id: ElementId,
        position: Point,
        content: &str,
        measure: &dyn TextMeasure,
    ) -> Self {
        let width = measure.measure_width(content);
        Self {
            id,
            position,
            end: Point::new(position.x + width, position.y + TEXT_LINE_HEIGHT),
            content: content.to_string(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.position, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FixedWidth(f64);

    impl TextMeasure for FixedWidth {
        fn measure_width(&self, _content: &str) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_new_text_is_unmeasured() {
        let text = Text::new(0, Point::new(10.0, 20.0));
        assert!(text.content.is_empty());
        assert_eq!(text.end, text.position);
    }

    #[test]
    fn test_measured_extent() {
        let text = Text::measured(4, Point::new(10.0, 20.0), "hello", &FixedWidth(75.0));
        assert_eq!(text.id(), 4);
        assert_eq!(text.content, "hello");
        assert!((text.end.x - 85.0).abs() < f64::EPSILON);
        assert!((text.end.y - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_approximate_measure_counts_chars() {
        let measure = ApproximateMeasure::default();
        assert!((measure.measure_width("abcd") - 80.0).abs() < f64::EPSILON);
        assert!((measure.measure_width("héé") - 60.0).abs() < f64::EPSILON);
        assert!(measure.measure_width("").abs() < f64::EPSILON);
    }
}
