//! The interaction mode and its transient selection.

use crate::selection::{Handle, MoveOffsets};
use crate::shapes::ElementId;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interaction mode tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Idle,
    Drawing,
    Moving,
    Resizing,
    EditingText,
    Panning,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Idle => "idle",
            Mode::Drawing => "drawing",
            Mode::Moving => "moving",
            Mode::Resizing => "resizing",
            Mode::EditingText => "editing-text",
            Mode::Panning => "panning",
        })
    }
}

/// An in-progress pointer gesture.
///
/// Each variant owns exactly the selection state its mode needs, so a move
/// can never observe resize state left over from an earlier gesture.
/// `checkpointed` records whether the gesture already committed its own
/// history entry; until then the gesture has not changed the scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// A freshly appended element follows the pointer.
    Drawing { id: ElementId },
    /// The grabbed element is dragged by its body.
    Moving {
        id: ElementId,
        /// World point where the element was grabbed.
        grab: Point,
        offsets: MoveOffsets,
        checkpointed: bool,
    },
    /// One handle of the grabbed element is dragged.
    Resizing {
        id: ElementId,
        handle: Handle,
        /// Element corners at grab time.
        start: Point,
        end: Point,
        checkpointed: bool,
    },
    /// The external text input owns the keyboard.
    EditingText { id: ElementId, checkpointed: bool },
    /// The view is dragged; `anchor` is the grabbed world point.
    Panning { anchor: Point },
}

impl Gesture {
    pub fn mode(&self) -> Mode {
        match self {
            Gesture::Idle => Mode::Idle,
            Gesture::Drawing { .. } => Mode::Drawing,
            Gesture::Moving { .. } => Mode::Moving,
            Gesture::Resizing { .. } => Mode::Resizing,
            Gesture::EditingText { .. } => Mode::EditingText,
            Gesture::Panning { .. } => Mode::Panning,
        }
    }

    /// The element the gesture addresses, if any.
    pub fn selected_id(&self) -> Option<ElementId> {
        match self {
            Gesture::Drawing { id }
            | Gesture::Moving { id, .. }
            | Gesture::Resizing { id, .. }
            | Gesture::EditingText { id, .. } => Some(*id),
            Gesture::Idle | Gesture::Panning { .. } => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }
}
