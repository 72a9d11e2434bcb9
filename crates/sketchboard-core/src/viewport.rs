//! Viewport module for pan/zoom transforms.

use crate::shapes::{TEXT_FONT_SIZE, Text};
use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest allowed zoom scale.
pub const MIN_SCALE: f64 = 0.1;
/// Largest allowed zoom scale.
pub const MAX_SCALE: f64 = 20.0;
/// Zoom step of the toolbar +/- buttons.
pub const ZOOM_STEP: f64 = 0.1;
/// Multiplier turning a vertical wheel delta into a zoom delta.
pub const WHEEL_ZOOM_FACTOR: f64 = -0.01;

/// Vertical nudge applied to the text overlay so its baseline lines up with
/// the rendered label.
const TEXT_OVERLAY_NUDGE: f64 = 12.5;

/// Viewport manages the view transform for the canvas.
///
/// Zooming is centered on the canvas center: when `scale != 1` the scaled
/// canvas is shifted back by [`Viewport::scale_offset`]. Panning is stored
/// in world units and multiplied by the scale at conversion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Current translation (pan), in world units.
    pub pan_offset: Vec2,
    /// Current zoom level.
    pub scale: f64,
    /// Minimum allowed zoom level.
    pub min_scale: f64,
    /// Maximum allowed zoom level.
    pub max_scale: f64,
    /// Size of the drawing surface in screen pixels.
    pub canvas_size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan_offset: Vec2::ZERO,
            scale: 1.0,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            canvas_size: Size::ZERO,
        }
    }
}

/// Screen-space placement of the text input overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextEditorPlacement {
    pub left: f64,
    pub top: f64,
    pub font_size: f64,
}

impl Viewport {
    /// Create a viewport for a canvas of the given size.
    pub fn new(canvas_size: Size) -> Self {
        Self {
            canvas_size,
            ..Self::default()
        }
    }

    pub fn set_canvas_size(&mut self, canvas_size: Size) {
        self.canvas_size = canvas_size;
    }

    /// Centering correction: half the growth of the canvas under the
    /// current scale.
    pub fn scale_offset(&self) -> Vec2 {
        Vec2::new(
            (self.canvas_size.width * self.scale - self.canvas_size.width) / 2.0,
            (self.canvas_size.height * self.scale - self.canvas_size.height) / 2.0,
        )
    }

    /// Get the affine transform for rendering.
    ///
    /// This transform converts world coordinates to screen coordinates.
    pub fn transform(&self) -> Affine {
        let translation = self.pan_offset * self.scale - self.scale_offset();
        Affine::translate(translation) * Affine::scale(self.scale)
    }

    /// Convert a screen point to world coordinates.
    pub fn to_world(&self, screen: Point) -> Point {
        let offset = self.scale_offset();
        Point::new(
            (screen.x - self.pan_offset.x * self.scale + offset.x) / self.scale,
            (screen.y - self.pan_offset.y * self.scale + offset.y) / self.scale,
        )
    }

    /// Convert a world point to screen coordinates.
    pub fn to_screen(&self, world: Point) -> Point {
        let offset = self.scale_offset();
        Point::new(
            world.x * self.scale + self.pan_offset.x * self.scale - offset.x,
            world.y * self.scale + self.pan_offset.y * self.scale - offset.y,
        )
    }

    /// Change the scale by `delta`, clamped to the allowed range.
    pub fn zoom(&mut self, delta: f64) {
        self.scale = (self.scale + delta).clamp(self.min_scale, self.max_scale);
    }

    pub fn zoom_in(&mut self) {
        self.zoom(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom(-ZOOM_STEP);
    }

    /// Back to 100%. The pan offset is left alone.
    pub fn reset_zoom(&mut self) {
        self.scale = 1.0;
    }

    /// Pan by a delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan_offset += delta;
    }

    /// Pan in response to a scroll wheel: content follows the wheel.
    pub fn wheel_pan(&mut self, delta: Vec2) {
        self.pan_offset -= delta;
    }

    /// Scale as a whole percentage, as shown in the toolbar.
    pub fn zoom_percent(&self) -> i64 {
        (self.scale * 100.0).round() as i64
    }

    /// Where the text input overlay goes while `text` is being edited.
    pub fn text_editor_placement(&self, text: &Text) -> TextEditorPlacement {
        let offset = self.scale_offset();
        TextEditorPlacement {
            left: text.position.x * self.scale + self.pan_offset.x * self.scale - offset.x,
            top: (text.position.y - TEXT_OVERLAY_NUDGE) * self.scale
                + self.pan_offset.y * self.scale
                - offset.y,
            font_size: TEXT_FONT_SIZE * self.scale,
        }
    }
}
