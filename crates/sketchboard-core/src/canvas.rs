//! The editing engine: history, viewport, tool and gesture state.

use crate::error::{EditError, EditResult};
use crate::gesture::{Gesture, Mode};
use crate::history::History;
use crate::input::{InputEvent, InputState, MouseButton};
use crate::scene::Scene;
use crate::selection::{CursorHint, MoveOffsets, Position, handle_cursor, pick};
use crate::shapes::{
    ApproximateMeasure, Element, ElementId, ElementKind, Text, TextMeasure, resize_from_handle,
};
use crate::tools::ToolKind;
use crate::viewport::{TextEditorPlacement, Viewport, WHEEL_ZOOM_FACTOR};
use kurbo::{Point, Size, Vec2};
use std::sync::Arc;

/// The drawing surface.
///
/// Owns the undo history, the viewport and the interaction state. All input
/// arrives as explicit calls (or [`InputEvent`]s through
/// [`Canvas::handle_event`]) and is processed synchronously in arrival
/// order. Pointer positions are screen coordinates and are converted to world
/// coordinates with the viewport as it is at the time of each event.
#[derive(Debug, Clone)]
pub struct Canvas {
    history: History,
    viewport: Viewport,
    input: InputState,
    tool: ToolKind,
    gesture: Gesture,
    cursor: CursorHint,
    measure: Arc<dyn TextMeasure>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a new canvas with an empty scene.
    pub fn new() -> Self {
        Self::with_measure(Arc::new(ApproximateMeasure::default()))
    }

    /// Create a canvas that sizes text labels with `measure`.
    pub fn with_measure(measure: Arc<dyn TextMeasure>) -> Self {
        Self {
            history: History::default(),
            viewport: Viewport::new(Size::new(800.0, 600.0)),
            input: InputState::new(),
            tool: ToolKind::default(),
            gesture: Gesture::Idle,
            cursor: CursorHint::Default,
            measure,
        }
    }

    /// Set the size of the drawing surface in screen pixels.
    pub fn set_canvas_size(&mut self, size: Size) {
        self.viewport.set_canvas_size(size);
    }

    /// The current scene.
    pub fn scene(&self) -> &Scene {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn current_tool(&self) -> ToolKind {
        self.tool
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        log::debug!("Tool: {} -> {}", self.tool, tool);
        self.tool = tool;
        self.cursor = CursorHint::Default;
    }

    pub fn mode(&self) -> Mode {
        self.gesture.mode()
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// The element addressed by the active gesture.
    pub fn selected_id(&self) -> Option<ElementId> {
        self.gesture.selected_id()
    }

    /// The text element currently open in the text input, if any.
    pub fn editing_id(&self) -> Option<ElementId> {
        match self.gesture {
            Gesture::EditingText { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn cursor(&self) -> CursorHint {
        self.cursor
    }

    /// Where the shell should place the text input while editing text.
    pub fn text_editor_placement(&self) -> Option<TextEditorPlacement> {
        let id = self.editing_id()?;
        match self.scene().get(id)? {
            Element::Text(text) => Some(self.viewport.text_editor_placement(text)),
            _ => None,
        }
    }

    /// Step back one history entry. Refused while a gesture is active.
    pub fn undo(&mut self) -> bool {
        if !self.gesture.is_idle() {
            log::debug!("Undo ignored while {}", self.gesture.mode());
            return false;
        }
        self.history.undo()
    }

    /// Step forward one history entry. Refused while a gesture is active.
    pub fn redo(&mut self) -> bool {
        if !self.gesture.is_idle() {
            log::debug!("Redo ignored while {}", self.gesture.mode());
            return false;
        }
        self.history.redo()
    }

    pub fn zoom(&mut self, delta: f64) {
        self.viewport.zoom(delta);
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.reset_zoom();
    }

    /// Scroll wheel: zooms with Control/Meta held, pans otherwise.
    pub fn wheel(&mut self, delta: Vec2) {
        if self.input.is_zoom_modifier() {
            self.viewport.zoom(delta.y * WHEEL_ZOOM_FACTOR);
        } else {
            self.viewport.wheel_pan(delta);
        }
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Dispatch a single input intent.
    pub fn handle_event(&mut self, event: &InputEvent) -> EditResult<()> {
        match event {
            InputEvent::PointerDown { position, button } => self.pointer_down(*position, *button)?,
            InputEvent::PointerMove { position } => self.pointer_move(*position)?,
            InputEvent::PointerUp { position, button } => self.pointer_up(*position, *button)?,
            InputEvent::Wheel { delta } => self.wheel(*delta),
            InputEvent::KeyDown { key } => self.key_down(key),
            InputEvent::KeyUp { key } => self.key_up(key),
            InputEvent::TextCommitted { content } => self.finish_text(content)?,
            InputEvent::SetTool { tool } => self.set_tool(*tool),
            InputEvent::Undo => {
                self.undo();
            }
            InputEvent::Redo => {
                self.redo();
            }
            InputEvent::Zoom { delta } => self.zoom(*delta),
            InputEvent::ZoomIn => self.zoom_in(),
            InputEvent::ZoomOut => self.zoom_out(),
            InputEvent::ResetZoom => self.reset_zoom(),
        }
        Ok(())
    }

    /// Start a gesture at the screen point `position`.
    pub fn pointer_down(&mut self, position: Point, button: MouseButton) -> EditResult<()> {
        self.input.button_down(position, button);
        if !self.gesture.is_idle() {
            // Includes clicks while the text input has focus.
            log::trace!("Pointer down ignored while {}", self.gesture.mode());
            return Ok(());
        }

        let world = self.viewport.to_world(position);
        if button == MouseButton::Middle || self.input.is_pan_modifier() {
            self.cursor = CursorHint::Grabbing;
            self.set_gesture(Gesture::Panning { anchor: world });
            return Ok(());
        }
        if button == MouseButton::Right {
            return Ok(());
        }

        match self.tool.element_kind() {
            None => self.grab(world),
            Some(kind) => self.start_drawing(world, kind),
        }
    }

    /// Advance the active gesture, or update the hover cursor when idle.
    pub fn pointer_move(&mut self, position: Point) -> EditResult<()> {
        self.input.pointer_moved(position);
        let world = self.viewport.to_world(position);
        match self.gesture {
            Gesture::Idle => {
                self.update_hover(world);
                Ok(())
            }
            Gesture::Panning { anchor } => {
                self.viewport.pan_by(world - anchor);
                self.cursor = CursorHint::Grabbing;
                Ok(())
            }
            Gesture::Drawing { id } => self.drag_draw(id, world),
            Gesture::Moving { .. } => self.drag_move(world),
            Gesture::Resizing { .. } => self.drag_resize(world),
            Gesture::EditingText { .. } => Ok(()),
        }
    }

    /// End the active gesture. A release of a button that is not held is
    /// ignored.
    pub fn pointer_up(&mut self, position: Point, button: MouseButton) -> EditResult<()> {
        if !self.input.is_button_pressed(button) {
            log::trace!("Pointer up ignored: {button:?} is not held");
            self.input.pointer_moved(position);
            return Ok(());
        }
        self.input.button_up(position, button);
        let world = self.viewport.to_world(position);

        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => {}
            editing @ Gesture::EditingText { .. } => {
                self.gesture = editing;
                return Ok(());
            }
            Gesture::Panning { .. } => {
                log::debug!("Gesture: panning -> idle");
            }
            Gesture::Drawing { id } => {
                self.normalize_element(id)?;
                log::debug!("Gesture: drawing -> idle (element {id})");
            }
            Gesture::Resizing { id, checkpointed, .. } => {
                if checkpointed {
                    self.normalize_element(id)?;
                }
                log::debug!("Gesture: resizing -> idle (element {id})");
            }
            Gesture::Moving {
                id,
                grab,
                checkpointed,
                ..
            } => {
                let is_text = self.scene().require(id)?.kind() == ElementKind::Text;
                if is_text && world == grab {
                    self.set_gesture(Gesture::EditingText { id, checkpointed });
                    return Ok(());
                }
                log::debug!("Gesture: moving -> idle (element {id})");
            }
        }
        self.update_hover(world);
        Ok(())
    }

    /// Write `content` into the text element being edited and return to idle.
    pub fn finish_text(&mut self, content: &str) -> EditResult<()> {
        let Gesture::EditingText { id, checkpointed } = self.gesture else {
            log::debug!("Text committed with no text element open");
            return Ok(());
        };
        let position = match self.scene().require(id)? {
            Element::Text(text) => text.position,
            other => {
                return Err(EditError::KindMismatch {
                    id,
                    found: other.kind(),
                });
            }
        };
        let text = Element::Text(Text::measured(id, position, content, self.measure.as_ref()));
        if checkpointed {
            self.overwrite_element(text)?;
        } else {
            self.commit_element(text)?;
        }
        self.set_gesture(Gesture::Idle);
        Ok(())
    }

    fn set_gesture(&mut self, gesture: Gesture) {
        let (from, to) = (self.gesture.mode(), gesture.mode());
        if from != to {
            match gesture.selected_id() {
                Some(id) => log::debug!("Gesture: {from} -> {to} (element {id})"),
                None => log::debug!("Gesture: {from} -> {to}"),
            }
        }
        self.gesture = gesture;
    }

    /// Selection tool: grab whatever is under `world`.
    fn grab(&mut self, world: Point) -> EditResult<()> {
        let Some((element, position)) = pick(world, self.scene()) else {
            return Ok(());
        };
        let id = element.id();
        let gesture = match position {
            Position::Inside => Gesture::Moving {
                id,
                grab: world,
                offsets: MoveOffsets::capture(element, world),
                checkpointed: false,
            },
            Position::Handle(handle) => {
                let (start, end) = element.corners().ok_or(EditError::KindMismatch {
                    id,
                    found: element.kind(),
                })?;
                Gesture::Resizing {
                    id,
                    handle,
                    start,
                    end,
                    checkpointed: false,
                }
            }
        };
        self.cursor = handle_cursor(position);
        self.set_gesture(gesture);
        Ok(())
    }

    /// Drawing tools: append a zero-size element at `world`.
    fn start_drawing(&mut self, world: Point, kind: ElementKind) -> EditResult<()> {
        let id = self.scene().next_id();
        self.commit_element(Element::create(id, world, world, kind))?;
        let gesture = match kind {
            ElementKind::Text => Gesture::EditingText { id, checkpointed: true },
            _ => Gesture::Drawing { id },
        };
        self.set_gesture(gesture);
        Ok(())
    }

    fn drag_draw(&mut self, id: ElementId, world: Point) -> EditResult<()> {
        let updated = match self.scene().require(id)? {
            Element::Freehand(stroke) => {
                let mut stroke = stroke.clone();
                stroke.add_point(world);
                Element::Freehand(stroke)
            }
            element @ (Element::Line(_) | Element::Rectangle(_)) => {
                let start = element.anchor();
                Element::create(id, start, world, element.kind())
            }
            Element::Text(_) => {
                return Err(EditError::KindMismatch {
                    id,
                    found: ElementKind::Text,
                });
            }
        };
        self.overwrite_element(updated)
    }

    fn drag_move(&mut self, world: Point) -> EditResult<()> {
        let Gesture::Moving { id, ref offsets, .. } = self.gesture else {
            return Ok(());
        };
        let moved = offsets.apply(self.scene().require(id)?, world)?;
        self.checkpoint(moved)
    }

    fn drag_resize(&mut self, world: Point) -> EditResult<()> {
        let Gesture::Resizing {
            id,
            handle,
            start,
            end,
            ..
        } = self.gesture
        else {
            return Ok(());
        };
        let kind = self.scene().require(id)?.kind();
        if !matches!(kind, ElementKind::Line | ElementKind::Rectangle) {
            return Err(EditError::KindMismatch { id, found: kind });
        }
        let (start, end) = resize_from_handle(handle, world, start, end);
        self.checkpoint(Element::create(id, start, end, kind))
    }

    /// Write an update of the active selection gesture. The first update
    /// commits a new history entry; later ones overwrite it.
    fn checkpoint(&mut self, element: Element) -> EditResult<()> {
        let first = match &mut self.gesture {
            Gesture::Moving { checkpointed, .. }
            | Gesture::Resizing { checkpointed, .. }
            | Gesture::EditingText { checkpointed, .. } => !std::mem::replace(checkpointed, true),
            _ => false,
        };
        if first {
            self.commit_element(element)
        } else {
            self.overwrite_element(element)
        }
    }

    fn normalize_element(&mut self, id: ElementId) -> EditResult<()> {
        let element = self.scene().require(id)?;
        if !element.needs_normalize() {
            return Ok(());
        }
        let normalized = element.normalize();
        if &normalized != element {
            self.overwrite_element(normalized)?;
        }
        Ok(())
    }

    /// Append or replace `element` in a copy of the current scene and commit
    /// the copy as a new history entry.
    fn commit_element(&mut self, element: Element) -> EditResult<()> {
        let scene = self.scene_with(element)?;
        self.history.commit(scene);
        Ok(())
    }

    /// Replace `element` in the current history entry.
    fn overwrite_element(&mut self, element: Element) -> EditResult<()> {
        let scene = self.scene_with(element)?;
        self.history.overwrite(scene);
        Ok(())
    }

    fn scene_with(&self, element: Element) -> EditResult<Scene> {
        let mut scene = self.scene().clone();
        if element.id() == scene.next_id() {
            scene.push(element)?;
        } else {
            scene.replace(element.id(), element)?;
        }
        Ok(scene)
    }

    fn update_hover(&mut self, world: Point) {
        self.cursor = if self.tool == ToolKind::Selection && !self.input.is_pan_modifier() {
            pick(world, self.scene())
                .map(|(_, position)| handle_cursor(position))
                .unwrap_or_default()
        } else {
            CursorHint::Default
        };
    }
}
