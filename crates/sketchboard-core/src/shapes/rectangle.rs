//! Rectangle shape.

use super::ElementId;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by two opposite corners.
///
/// `start` is the corner the drag began from and `end` the opposite one, so
/// the corners are not min/max ordered until [`Rectangle::normalized`] runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ElementId,
    /// First corner (x1, y1).
    pub start: Point,
    /// Opposite corner (x2, y2).
    pub end: Point,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(id: ElementId, start: Point, end: Point) -> Self {
        Self { id, start, end }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn width(&self) -> f64 {
        self.end.x - self.start.x
    }

    pub fn height(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// Return the rectangle with `start` at the min corner and `end` at the max corner.
    pub fn normalized(&self) -> Self {
        Self::new(
            self.id,
            Point::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y)),
            Point::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y)),
        )
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }
}
