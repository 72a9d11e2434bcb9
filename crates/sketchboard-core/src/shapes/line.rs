//! Line shape.

use super::ElementId;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A straight line segment.
///
/// While the user drags an endpoint the two points may be in any order;
/// [`Line::normalized`] restores the canonical orientation once the gesture ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ElementId,
    /// Start point (x1, y1).
    pub start: Point,
    /// End point (x2, y2).
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(id: ElementId, start: Point, end: Point) -> Self {
        Self { id, start, end }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        crate::geometry::distance(self.start, self.end)
    }

    /// Whether the endpoints are already ordered left-to-right, then top-to-bottom.
    pub fn is_canonical(&self) -> bool {
        self.start.x < self.end.x || (self.start.x == self.end.x && self.start.y < self.end.y)
    }

    /// Return the line with its endpoints in canonical order.
    pub fn normalized(&self) -> Self {
        if self.is_canonical() {
            self.clone()
        } else {
            Self::new(self.id, self.end, self.start)
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }
}
