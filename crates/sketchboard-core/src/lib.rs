//! Sketchboard Core Library
//!
//! Platform-agnostic scene and editing engine for the Sketchboard drawing
//! surface: element model, hit testing, pan/zoom viewport, undo history and
//! the pointer interaction state machine.

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod history;
pub mod input;
pub mod render;
pub mod scene;
pub mod selection;
pub mod shapes;
pub mod tools;
pub mod viewport;

pub use canvas::Canvas;
pub use error::{EditError, EditResult};
pub use gesture::{Gesture, Mode};
pub use history::History;
pub use input::{InputEvent, InputState, MouseButton};
pub use render::{OutlineOptions, RenderContext, Renderer, StrokeOutliner, outline_to_path};
pub use scene::Scene;
pub use selection::{CursorHint, Handle, MoveOffsets, Position, classify, handle_cursor, pick};
pub use shapes::{ApproximateMeasure, Element, ElementId, ElementKind, TextMeasure};
pub use tools::ToolKind;
pub use viewport::{TextEditorPlacement, Viewport};
