//! Freehand drawing shape.

use super::ElementId;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A freehand stroke (ordered series of points).
///
/// Points are only appended while drawing. Moving the stroke replaces the
/// whole list at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    pub(crate) id: ElementId,
    /// Points in the stroke.
    pub points: Vec<Point>,
}

impl Freehand {
    /// Create a stroke seeded with its first point.
    pub fn new(id: ElementId, first: Point) -> Self {
        Self {
            id,
            points: vec![first],
        }
    }

    /// Create from existing points.
    pub fn from_points(id: ElementId, points: Vec<Point>) -> Self {
        Self { id, points }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Add a point to the stroke.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the stroke is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };
        self.points
            .iter()
            .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p))
    }
}
