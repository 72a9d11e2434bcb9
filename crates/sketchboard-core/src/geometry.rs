//! Geometric predicates used by hit testing.
//!
//! All tolerances are in world units and do not follow the viewport zoom.

use kurbo::Point;

/// Half-width of the square a handle can be grabbed from.
pub const HANDLE_TOLERANCE: f64 = 5.0;
/// Allowed triangle slack for a point to count as on a straight line.
pub const LINE_TOLERANCE: f64 = 1.0;
/// Allowed triangle slack for a point to count as on a freehand stroke.
pub const FREEHAND_TOLERANCE: f64 = 5.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Returns `tag` if `p` lies strictly within [`HANDLE_TOLERANCE`] of `q` on both axes.
pub fn near_point<T>(p: Point, q: Point, tag: T) -> Option<T> {
    if (p.x - q.x).abs() < HANDLE_TOLERANCE && (p.y - q.y).abs() < HANDLE_TOLERANCE {
        Some(tag)
    } else {
        None
    }
}

/// Collinearity-with-betweenness test for `p` against the segment `a`-`b`.
///
/// Compares the segment length with the detour through `p`. This is not a
/// perpendicular distance: the band is tight near the endpoints and widens
/// towards the middle of long segments.
pub fn on_segment(a: Point, b: Point, p: Point, max_offset: f64) -> bool {
    let offset = distance(a, b) - (distance(a, p) + distance(b, p));
    offset.abs() < max_offset
}

/// Inclusive containment of `p` in the box spanned by `min` and `max`.
///
/// The corners are taken as given; an inverted box contains nothing.
pub fn point_in_rect(p: Point, min: Point, max: Point) -> bool {
    p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
}
