//! Tool system for the drawing surface.

use crate::error::EditError;
use crate::shapes::ElementKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// Grab, move and resize existing elements.
    Selection,
    /// Freehand strokes.
    #[default]
    Pencil,
    Line,
    Rectangle,
    Text,
}

impl ToolKind {
    /// All tools in toolbar order.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Selection,
        ToolKind::Pencil,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Text,
    ];

    /// The kind of element this tool draws, if any.
    pub fn element_kind(self) -> Option<ElementKind> {
        match self {
            ToolKind::Selection => None,
            ToolKind::Pencil => Some(ElementKind::Freehand),
            ToolKind::Line => Some(ElementKind::Line),
            ToolKind::Rectangle => Some(ElementKind::Rectangle),
            ToolKind::Text => Some(ElementKind::Text),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Selection => "selection",
            ToolKind::Pencil => "pencil",
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Text => "text",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| EditError::InvalidKind(s.to_string()))
    }
}
