//! Renderer abstraction and stroke outline helpers.

use crate::canvas::Canvas;
use crate::scene::Scene;
use crate::shapes::{Element, ElementId};
use kurbo::{Affine, BezPath, Point};
use serde::{Deserialize, Serialize};

/// Default outline width of freehand strokes.
pub const DEFAULT_OUTLINE_SIZE: f64 = 5.0;
/// Default smoothing passed to the outliner.
pub const DEFAULT_OUTLINE_SMOOTHING: f64 = 1.0;

/// Context for a single render frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// The scene to render.
    pub scene: &'a Scene,
    /// World to screen transform.
    pub transform: Affine,
    /// Element currently open in the text input (skipped in `build_scene`).
    pub editing: Option<ElementId>,
}

impl<'a> RenderContext<'a> {
    /// Create a render context for the current state of `canvas`.
    pub fn new(canvas: &'a Canvas) -> Self {
        Self {
            scene: canvas.scene(),
            transform: canvas.viewport().transform(),
            editing: canvas.editing_id(),
        }
    }

    /// Set the element being edited.
    pub fn with_editing(mut self, editing: Option<ElementId>) -> Self {
        self.editing = editing;
        self
    }

    /// Elements to draw, back to front.
    pub fn visible_elements(&self) -> impl Iterator<Item = &'a Element> + 'a {
        let (scene, editing): (&'a Scene, _) = (self.scene, self.editing);
        scene
            .iter()
            .filter(move |element| Some(element.id()) != editing)
    }
}

/// Trait for rendering backends.
///
/// Implementations turn elements into pixels (or anything else). They only
/// ever see shared references, so drawing cannot change the scene.
pub trait Renderer {
    /// Draw one element with the given world to screen transform.
    fn draw(&mut self, element: &Element, transform: Affine);

    /// Draw every visible element in z-order.
    fn build_scene(&mut self, ctx: &RenderContext) {
        for element in ctx.visible_elements() {
            self.draw(element, ctx.transform);
        }
    }
}

/// Options for [`StrokeOutliner::outline`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlineOptions {
    pub size: f64,
    pub smoothing: f64,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_OUTLINE_SIZE,
            smoothing: DEFAULT_OUTLINE_SMOOTHING,
        }
    }
}

/// Turns the centerline of a freehand stroke into a closed outline polygon.
pub trait StrokeOutliner {
    fn outline(&self, points: &[Point], options: &OutlineOptions) -> Vec<Point>;
}

/// Build a fillable closed path through an outline polygon.
///
/// Each vertex becomes the control point of a quadratic segment ending at
/// the midpoint between it and the next vertex (wrapping around).
pub fn outline_to_path(polygon: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some(&first) = polygon.first() else {
        return path;
    };
    path.move_to(first);
    for (i, &point) in polygon.iter().enumerate() {
        let next = polygon[(i + 1) % polygon.len()];
        path.quad_to(point, point.midpoint(next));
    }
    path.close_path();
    path
}
