//! Element definitions for the drawing surface.

mod freehand;
mod line;
mod rectangle;
mod text;

pub use freehand::Freehand;
pub use line::Line;
pub use rectangle::Rectangle;
pub use text::{ApproximateMeasure, TEXT_FONT_SIZE, TEXT_LINE_HEIGHT, Text, TextMeasure};

use crate::error::EditError;
use crate::selection::Handle;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an element: its index in the owning scene.
///
/// Elements are only ever appended, so an id never changes or gets reused.
pub type ElementId = usize;

/// Discriminant of [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Line,
    Rectangle,
    Freehand,
    Text,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Line => "line",
            ElementKind::Rectangle => "rectangle",
            ElementKind::Freehand => "freehand",
            ElementKind::Text => "text",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(ElementKind::Line),
            "rectangle" => Ok(ElementKind::Rectangle),
            "freehand" | "pencil" => Ok(ElementKind::Freehand),
            "text" => Ok(ElementKind::Text),
            other => Err(EditError::InvalidKind(other.to_string())),
        }
    }
}

/// A drawable element of the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Line(Line),
    Rectangle(Rectangle),
    Freehand(Freehand),
    Text(Text),
}

impl Element {
    /// Build a new element of `kind`.
    ///
    /// Freehand strokes are seeded with `start` and ignore `end`. Text starts
    /// empty with its box collapsed onto `start` until it is measured.
    pub fn create(id: ElementId, start: Point, end: Point, kind: ElementKind) -> Self {
        match kind {
            ElementKind::Line => Element::Line(Line::new(id, start, end)),
            ElementKind::Rectangle => Element::Rectangle(Rectangle::new(id, start, end)),
            ElementKind::Freehand => Element::Freehand(Freehand::new(id, start)),
            ElementKind::Text => Element::Text(Text::new(id, start)),
        }
    }

    pub fn id(&self) -> ElementId {
        match self {
            Element::Line(s) => s.id(),
            Element::Rectangle(s) => s.id(),
            Element::Freehand(s) => s.id(),
            Element::Text(s) => s.id(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Line(_) => ElementKind::Line,
            Element::Rectangle(_) => ElementKind::Rectangle,
            Element::Freehand(_) => ElementKind::Freehand,
            Element::Text(_) => ElementKind::Text,
        }
    }

    /// Axis-aligned bounding box in world coordinates.
    pub fn bounds(&self) -> Rect {
        match self {
            Element::Line(s) => s.bounds(),
            Element::Rectangle(s) => s.as_rect(),
            Element::Freehand(s) => s.bounds(),
            Element::Text(s) => s.bounds(),
        }
    }

    /// The (x1, y1) reference point; the first point for a freehand stroke.
    pub fn anchor(&self) -> Point {
        match self {
            Element::Line(s) => s.start,
            Element::Rectangle(s) => s.start,
            Element::Freehand(s) => s.points.first().copied().unwrap_or(Point::ZERO),
            Element::Text(s) => s.position,
        }
    }

    /// The (x1, y1)-(x2, y2) pair of elements that have one.
    pub fn corners(&self) -> Option<(Point, Point)> {
        match self {
            Element::Line(s) => Some((s.start, s.end)),
            Element::Rectangle(s) => Some((s.start, s.end)),
            Element::Text(s) => Some((s.position, s.end)),
            Element::Freehand(_) => None,
        }
    }

    /// Whether the element gets its coordinates normalized when a gesture ends.
    pub fn needs_normalize(&self) -> bool {
        matches!(self, Element::Line(_) | Element::Rectangle(_))
    }

    /// Canonical form: min/max corners for rectangles, left-to-right then
    /// top-to-bottom endpoints for lines. Identity for freehand and text.
    pub fn normalize(&self) -> Element {
        match self {
            Element::Line(s) => Element::Line(s.normalized()),
            Element::Rectangle(s) => Element::Rectangle(s.normalized()),
            Element::Freehand(_) | Element::Text(_) => self.clone(),
        }
    }
}

/// Move the coordinate pair owned by `handle` to `pointer`, keeping the
/// opposite corner or endpoint fixed. Returns the new `(start, end)`.
pub fn resize_from_handle(
    handle: Handle,
    pointer: Point,
    start: Point,
    end: Point,
) -> (Point, Point) {
    match handle {
        Handle::TopLeft | Handle::Start => (pointer, end),
        Handle::TopRight => (Point::new(start.x, pointer.y), Point::new(pointer.x, end.y)),
        Handle::BottomLeft => (Point::new(pointer.x, start.y), Point::new(end.x, pointer.y)),
        Handle::BottomRight | Handle::End => (start, pointer),
    }
}
