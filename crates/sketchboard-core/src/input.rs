//! Input intents and keyboard/mouse state.

use crate::tools::ToolKind;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// An input intent delivered to the canvas.
///
/// Positions are screen coordinates. Key names follow the DOM `KeyboardEvent.key`
/// convention (`" "` for the space bar, `"Control"`, `"Meta"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
    PointerMove {
        position: Point,
    },
    PointerUp {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
    Wheel {
        delta: Vec2,
    },
    KeyDown {
        key: String,
    },
    KeyUp {
        key: String,
    },
    /// The external text input lost focus with this content.
    TextCommitted {
        content: String,
    },
    SetTool {
        tool: ToolKind,
    },
    Undo,
    Redo,
    Zoom {
        delta: f64,
    },
    /// Toolbar zoom buttons.
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

/// Tracks held keys and buttons between events.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Last known pointer position in screen coordinates.
    pub pointer_position: Point,
    pressed_buttons: HashSet<MouseButton>,
    pressed_keys: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.pressed_keys.insert(key.to_string());
    }

    pub fn key_up(&mut self, key: &str) {
        self.pressed_keys.remove(key);
    }

    pub fn button_down(&mut self, position: Point, button: MouseButton) {
        self.pointer_position = position;
        self.pressed_buttons.insert(button);
    }

    pub fn button_up(&mut self, position: Point, button: MouseButton) {
        self.pointer_position = position;
        self.pressed_buttons.remove(&button);
    }

    pub fn pointer_moved(&mut self, position: Point) {
        self.pointer_position = position;
    }

    /// Check if a key is currently pressed.
    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(key)
    }

    /// Check if a button is currently pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Space held: pointer drags pan the canvas.
    pub fn is_pan_modifier(&self) -> bool {
        self.is_key_pressed(" ") || self.is_key_pressed("Space")
    }

    /// Control or Meta held: the wheel zooms instead of panning.
    pub fn is_zoom_modifier(&self) -> bool {
        self.is_key_pressed("Control") || self.is_key_pressed("Meta")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_press() {
        let mut input = InputState::new();
        input.key_down("a");
        assert!(input.is_key_pressed("a"));
        input.key_up("a");
        assert!(!input.is_key_pressed("a"));
    }

    #[test]
    fn test_modifiers() {
        let mut input = InputState::new();
        assert!(!input.is_pan_modifier());
        assert!(!input.is_zoom_modifier());

        input.key_down(" ");
        assert!(input.is_pan_modifier());
        input.key_down("Meta");
        assert!(input.is_zoom_modifier());

        input.key_up(" ");
        input.key_up("Meta");
        input.key_down("Control");
        assert!(!input.is_pan_modifier());
        assert!(input.is_zoom_modifier());
    }

    #[test]
    fn test_button_tracking() {
        let mut input = InputState::new();
        input.button_down(Point::new(100.0, 100.0), MouseButton::Middle);
        assert!(input.is_button_pressed(MouseButton::Middle));
        assert!(!input.is_button_pressed(MouseButton::Left));

        input.pointer_moved(Point::new(150.0, 120.0));
        input.button_up(Point::new(150.0, 120.0), MouseButton::Middle);
        assert!(!input.is_button_pressed(MouseButton::Middle));
        assert_eq!(input.pointer_position, Point::new(150.0, 120.0));
    }

    #[test]
    fn test_event_json() {
        let events: Vec<InputEvent> = serde_json::from_str(
            r#"[
                {"event": "set_tool", "tool": "rectangle"},
                {"event": "pointer_down", "position": {"x": 10.0, "y": 10.0}},
                {"event": "pointer_up", "position": {"x": 50.0, "y": 40.0}, "button": "middle"},
                {"event": "key_down", "key": "Control"},
                {"event": "wheel", "delta": {"x": 0.0, "y": -100.0}},
                {"event": "undo"},
                {"event": "zoom_in"}
            ]"#,
        )
        .unwrap();

        assert_eq!(events[0], InputEvent::SetTool { tool: ToolKind::Rectangle });
        assert_eq!(
            events[1],
            InputEvent::PointerDown {
                position: Point::new(10.0, 10.0),
                button: MouseButton::Left,
            }
        );
        assert!(matches!(
            events[2],
            InputEvent::PointerUp {
                button: MouseButton::Middle,
                ..
            }
        ));
        assert_eq!(events[5], InputEvent::Undo);
        assert_eq!(events[6], InputEvent::ZoomIn);
    }
}
