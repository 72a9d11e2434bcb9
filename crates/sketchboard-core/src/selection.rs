//! Hit testing, grab handles and move offsets.

use crate::error::EditError;
use crate::geometry::{FREEHAND_TOLERANCE, LINE_TOLERANCE, near_point, on_segment, point_in_rect};
use crate::scene::Scene;
use crate::shapes::{Element, Freehand, Line, Rectangle, Text};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named grab point on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    /// Line start point.
    #[serde(rename = "start")]
    Start,
    /// Line end point.
    #[serde(rename = "end")]
    End,
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "br")]
    BottomRight,
}

impl Handle {
    pub fn tag(self) -> &'static str {
        match self {
            Handle::Start => "start",
            Handle::End => "end",
            Handle::TopLeft => "tl",
            Handle::TopRight => "tr",
            Handle::BottomLeft => "bl",
            Handle::BottomRight => "br",
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Handle {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Handle::Start),
            "end" => Ok(Handle::End),
            "tl" => Ok(Handle::TopLeft),
            "tr" => Ok(Handle::TopRight),
            "bl" => Ok(Handle::BottomLeft),
            "br" => Ok(Handle::BottomRight),
            other => Err(EditError::InvalidKind(other.to_string())),
        }
    }
}

/// Which part of an element a point hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Handle(Handle),
    Inside,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Handle(handle) => write!(f, "{handle}"),
            Position::Inside => f.write_str("inside"),
        }
    }
}

impl FromStr for Position {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inside" => Ok(Position::Inside),
            other => other.parse().map(Position::Handle),
        }
    }
}

/// Pointer cursor the shell should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorHint {
    #[default]
    Default,
    /// Diagonal resize, north-west to south-east.
    ResizeNwSe,
    /// Diagonal resize, north-east to south-west.
    ResizeNeSw,
    Move,
    Grabbing,
}

/// Cursor for hovering or dragging at `position`.
pub fn handle_cursor(position: Position) -> CursorHint {
    match position {
        Position::Handle(Handle::TopLeft | Handle::BottomRight | Handle::Start | Handle::End) => {
            CursorHint::ResizeNwSe
        }
        Position::Handle(Handle::TopRight | Handle::BottomLeft) => CursorHint::ResizeNeSw,
        Position::Inside => CursorHint::Move,
    }
}

fn classify_line(point: Point, line: &Line) -> Option<Position> {
    near_point(point, line.start, Position::Handle(Handle::Start))
        .or_else(|| near_point(point, line.end, Position::Handle(Handle::End)))
        .or_else(|| {
            on_segment(line.start, line.end, point, LINE_TOLERANCE).then_some(Position::Inside)
        })
}

fn classify_rectangle(point: Point, rect: &Rectangle) -> Option<Position> {
    let (start, end) = (rect.start, rect.end);
    let (top_right, bottom_left) = (Point::new(end.x, start.y), Point::new(start.x, end.y));
    near_point(point, start, Position::Handle(Handle::TopLeft))
        .or_else(|| near_point(point, top_right, Position::Handle(Handle::TopRight)))
        .or_else(|| near_point(point, bottom_left, Position::Handle(Handle::BottomLeft)))
        .or_else(|| near_point(point, end, Position::Handle(Handle::BottomRight)))
        .or_else(|| point_in_rect(point, start, end).then_some(Position::Inside))
}

fn classify_freehand(point: Point, stroke: &Freehand) -> Option<Position> {
    stroke
        .points
        .windows(2)
        .any(|w| on_segment(w[0], w[1], point, FREEHAND_TOLERANCE))
        .then_some(Position::Inside)
}

fn classify_text(point: Point, text: &Text) -> Option<Position> {
    point_in_rect(point, text.position, text.end).then_some(Position::Inside)
}

/// Which part of `element`, if any, lies under the world-space `point`.
///
/// Handles take priority over the body. Freehand strokes and text have no
/// handles and can only be moved.
pub fn classify(point: Point, element: &Element) -> Option<Position> {
    match element {
        Element::Line(s) => classify_line(point, s),
        Element::Rectangle(s) => classify_rectangle(point, s),
        Element::Freehand(s) => classify_freehand(point, s),
        Element::Text(s) => classify_text(point, s),
    }
}

/// Topmost element under `point`. Later elements win over earlier ones.
pub fn pick(point: Point, scene: &Scene) -> Option<(&Element, Position)> {
    scene
        .iter()
        .rev()
        .find_map(|element| classify(point, element).map(|position| (element, position)))
}

/// Pointer-to-element offsets captured when an element is grabbed for moving.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOffsets {
    /// Offset from the (x1, y1) anchor plus the extent to carry along.
    Anchor { offset: Vec2, extent: Vec2 },
    /// Offset from every point of a freehand stroke.
    Points(Vec<Vec2>),
}

impl MoveOffsets {
    /// Capture offsets of `pointer` relative to `element`.
    pub fn capture(element: &Element, pointer: Point) -> Self {
        match element {
            Element::Freehand(s) => {
                MoveOffsets::Points(s.points.iter().map(|p| pointer - *p).collect())
            }
            _ => {
                let anchor = element.anchor();
                let (start, end) = element.corners().unwrap_or((anchor, anchor));
                MoveOffsets::Anchor {
                    offset: pointer - start,
                    extent: end - start,
                }
            }
        }
    }

    /// Place `element` so that the captured offsets hold for `pointer`.
    pub fn apply(&self, element: &Element, pointer: Point) -> Result<Element, EditError> {
        let id = element.id();
        let moved = match (self, element) {
            (MoveOffsets::Points(offsets), Element::Freehand(_)) => {
                let points = offsets.iter().map(|offset| pointer - *offset).collect();
                Element::Freehand(Freehand::from_points(id, points))
            }
            (MoveOffsets::Anchor { offset, extent }, _) => {
                let start = pointer - *offset;
                let end = start + *extent;
                match element {
                    Element::Line(_) => Element::Line(Line::new(id, start, end)),
                    Element::Rectangle(_) => Element::Rectangle(Rectangle::new(id, start, end)),
                    Element::Text(s) => Element::Text(Text {
                        id,
                        position: start,
                        end,
                        content: s.content.clone(),
                    }),
                    Element::Freehand(_) => {
                        return Err(EditError::KindMismatch {
                            id,
                            found: element.kind(),
                        });
                    }
                }
            }
            (MoveOffsets::Points(_), _) => {
                return Err(EditError::KindMismatch {
                    id,
                    found: element.kind(),
                });
            }
        };
        Ok(moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ElementKind;

    fn rect(id: usize, x1: f64, y1: f64, x2: f64, y2: f64) -> Element {
        Element::create(id, Point::new(x1, y1), Point::new(x2, y2), ElementKind::Rectangle)
    }

    fn line(id: usize, x1: f64, y1: f64, x2: f64, y2: f64) -> Element {
        Element::create(id, Point::new(x1, y1), Point::new(x2, y2), ElementKind::Line)
    }

    #[test]
    fn test_line_endpoints_win_over_body() {
        let l = line(0, 0.0, 0.0, 100.0, 0.0);
        assert_eq!(classify(Point::new(2.0, 0.0), &l), Some(Position::Handle(Handle::Start)));
        assert_eq!(classify(Point::new(98.0, 1.0), &l), Some(Position::Handle(Handle::End)));
        assert_eq!(classify(Point::new(50.0, 0.0), &l), Some(Position::Inside));
        assert_eq!(classify(Point::new(50.0, 20.0), &l), None);
    }

    #[test]
    fn test_rectangle_corners_and_inside() {
        let r = rect(0, 10.0, 10.0, 50.0, 40.0);
        let handle = |h| Some(Position::Handle(h));
        assert_eq!(classify(Point::new(11.0, 11.0), &r), handle(Handle::TopLeft));
        assert_eq!(classify(Point::new(49.0, 12.0), &r), handle(Handle::TopRight));
        assert_eq!(classify(Point::new(12.0, 39.0), &r), handle(Handle::BottomLeft));
        assert_eq!(classify(Point::new(50.0, 40.0), &r), handle(Handle::BottomRight));
        assert_eq!(classify(Point::new(30.0, 25.0), &r), Some(Position::Inside));
        assert_eq!(classify(Point::new(60.0, 25.0), &r), None);
    }

    #[test]
    fn test_rectangle_corner_outside_box_still_grabs() {
        let r = rect(0, 10.0, 10.0, 50.0, 40.0);
        assert_eq!(classify(Point::new(7.0, 7.0), &r), Some(Position::Handle(Handle::TopLeft)));
    }

    #[test]
    fn test_freehand_hits_segments_only() {
        let stroke = Element::Freehand(Freehand::from_points(
            0,
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
        ));
        assert_eq!(classify(Point::new(5.0, 0.0), &stroke), Some(Position::Inside));
        assert_eq!(classify(Point::new(5.0, 10.0), &stroke), None);
        // No handles even at the endpoints.
        assert_eq!(classify(Point::new(0.0, 0.0), &stroke), Some(Position::Inside));
    }

    #[test]
    fn test_single_point_freehand_never_hits() {
        let stroke = Element::create(0, Point::new(5.0, 5.0), Point::ZERO, ElementKind::Freehand);
        assert_eq!(classify(Point::new(5.0, 5.0), &stroke), None);
    }

    #[test]
    fn test_text_inside_box_only() {
        let text = Element::Text(Text {
            id: 0,
            position: Point::new(0.0, 0.0),
            end: Point::new(80.0, 40.0),
            content: "abcd".to_string(),
        });
        assert_eq!(classify(Point::new(1.0, 1.0), &text), Some(Position::Inside));
        assert_eq!(classify(Point::new(81.0, 1.0), &text), None);
    }

    #[test]
    fn test_pick_prefers_topmost() {
        let mut scene = Scene::new();
        scene.push(rect(0, 0.0, 0.0, 100.0, 100.0)).unwrap();
        scene.push(rect(1, 50.0, 50.0, 150.0, 150.0)).unwrap();

        let (hit, position) = pick(Point::new(75.0, 75.0), &scene).unwrap();
        assert_eq!(hit.id(), 1);
        assert_eq!(position, Position::Inside);

        let (hit, _) = pick(Point::new(25.0, 25.0), &scene).unwrap();
        assert_eq!(hit.id(), 0);

        assert!(pick(Point::new(500.0, 500.0), &scene).is_none());
    }

    #[test]
    fn test_handle_cursor() {
        assert_eq!(handle_cursor(Position::Handle(Handle::TopLeft)), CursorHint::ResizeNwSe);
        assert_eq!(handle_cursor(Position::Handle(Handle::End)), CursorHint::ResizeNwSe);
        assert_eq!(handle_cursor(Position::Handle(Handle::TopRight)), CursorHint::ResizeNeSw);
        assert_eq!(handle_cursor(Position::Handle(Handle::BottomLeft)), CursorHint::ResizeNeSw);
        assert_eq!(handle_cursor(Position::Inside), CursorHint::Move);
    }

    #[test]
    fn test_handle_tags() {
        assert_eq!("tr".parse::<Handle>(), Ok(Handle::TopRight));
        assert_eq!(Handle::BottomLeft.to_string(), "bl");
        assert!("middle".parse::<Handle>().is_err());
        assert_eq!("inside".parse::<Position>(), Ok(Position::Inside));
        assert_eq!("br".parse::<Position>(), Ok(Position::Handle(Handle::BottomRight)));
        assert_eq!(Position::Handle(Handle::Start).to_string(), "start");
    }

    #[test]
    fn test_move_offsets_keep_extent() {
        let r = rect(0, 10.0, 10.0, 50.0, 40.0);
        let offsets = MoveOffsets::capture(&r, Point::new(20.0, 20.0));
        let moved = offsets.apply(&r, Point::new(120.0, 220.0)).unwrap();
        assert_eq!(
            moved.corners(),
            Some((Point::new(110.0, 210.0), Point::new(150.0, 240.0)))
        );
    }

    #[test]
    fn test_move_offsets_freehand_points() {
        let stroke = Element::Freehand(Freehand::from_points(
            3,
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)],
        ));
        let offsets = MoveOffsets::capture(&stroke, Point::new(5.0, 0.0));
        let Element::Freehand(moved) = offsets.apply(&stroke, Point::new(6.0, 2.0)).unwrap() else {
            panic!("expected freehand");
        };
        assert_eq!(moved.id(), 3);
        assert_eq!(
            moved.points,
            vec![Point::new(1.0, 2.0), Point::new(11.0, 2.0), Point::new(11.0, 12.0)]
        );
    }

    #[test]
    fn test_move_offsets_text_keeps_content() {
        let text = Element::Text(Text {
            id: 0,
            position: Point::new(0.0, 0.0),
            end: Point::new(80.0, 40.0),
            content: "abcd".to_string(),
        });
        let offsets = MoveOffsets::capture(&text, Point::new(10.0, 10.0));
        let Element::Text(moved) = offsets.apply(&text, Point::new(20.0, 30.0)).unwrap() else {
            panic!("expected text");
        };
        assert_eq!(moved.content, "abcd");
        assert_eq!(moved.position, Point::new(10.0, 20.0));
        assert_eq!(moved.end, Point::new(90.0, 60.0));
    }

    #[test]
    fn test_move_offsets_kind_mismatch() {
        let r = rect(0, 0.0, 0.0, 10.0, 10.0);
        let stroke = Element::create(1, Point::ZERO, Point::ZERO, ElementKind::Freehand);
        let offsets = MoveOffsets::capture(&stroke, Point::ZERO);
        assert!(matches!(offsets.apply(&r, Point::ZERO), Err(EditError::KindMismatch { .. })));
    }
}
