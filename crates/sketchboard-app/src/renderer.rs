//! Logging renderer and a minimal stroke outliner.

use kurbo::{Affine, Point, Vec2};
use sketchboard_core::{Element, OutlineOptions, Renderer, StrokeOutliner, outline_to_path};

/// Outlines a stroke as a constant-width ribbon around its centerline.
///
/// `smoothing` is ignored; the ribbon follows the raw points.
#[derive(Debug, Clone, Copy, Default)]
pub struct RibbonOutliner;

impl StrokeOutliner for RibbonOutliner {
    fn outline(&self, points: &[Point], options: &OutlineOptions) -> Vec<Point> {
        let half = options.size / 2.0;
        match points {
            [] => Vec::new(),
            [p] => vec![
                *p + (-half, -half),
                *p + (half, -half),
                *p + (half, half),
                *p + (-half, half),
            ],
            _ => {
                let last = points.len() - 1;
                let mut left = Vec::with_capacity(points.len() * 2);
                let mut right = Vec::with_capacity(points.len());
                for (i, &p) in points.iter().enumerate() {
                    let direction = points[(i + 1).min(last)] - points[i.saturating_sub(1)];
                    let length = direction.hypot();
                    let normal = if length > 0.0 {
                        Vec2::new(-direction.y, direction.x) * (half / length)
                    } else {
                        Vec2::ZERO
                    };
                    left.push(p + normal);
                    right.push(p - normal);
                }
                left.extend(right.into_iter().rev());
                left
            }
        }
    }
}

/// A renderer that logs each draw call instead of producing pixels.
#[derive(Debug, Default)]
pub struct LogRenderer {
    outliner: RibbonOutliner,
    options: OutlineOptions,
    draw_calls: Vec<String>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// One line per drawn element, in draw order.
    pub fn draw_calls(&self) -> &[String] {
        &self.draw_calls
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, element: &Element, transform: Affine) {
        let bounds = transform.transform_rect_bbox(element.bounds());
        let mut call = format!(
            "{} #{} at ({:.1}, {:.1})-({:.1}, {:.1})",
            element.kind(),
            element.id(),
            bounds.x0,
            bounds.y0,
            bounds.x1,
            bounds.y1
        );
        match element {
            Element::Freehand(stroke) => {
                let screen: Vec<Point> = stroke.points.iter().map(|p| transform * *p).collect();
                let path = outline_to_path(&self.outliner.outline(&screen, &self.options));
                call.push_str(&format!(", outline of {} segments", path.elements().len()));
            }
            Element::Text(text) => {
                call.push_str(&format!(", {:?}", text.content));
            }
            Element::Line(_) | Element::Rectangle(_) => {}
        }
        log::debug!("draw {call}");
        self.draw_calls.push(call);
    }
}
