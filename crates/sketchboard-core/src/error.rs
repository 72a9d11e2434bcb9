//! Engine error types.

use crate::shapes::{ElementId, ElementKind};
use thiserror::Error;

/// Internal-consistency failures of the editing engine.
///
/// None of these are user-facing conditions. Each one means a caller broke an
/// invariant of the scene or asked for a tag outside the known variant set.
/// Ordinary misses (nothing to undo, nothing under the pointer) are not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("Invalid kind: {0:?}")]
    InvalidKind(String),
    #[error("Element {id} is out of range (scene has {len} elements)")]
    UnknownElement { id: ElementId, len: usize },
    #[error("Element id {found} does not match its slot {expected}")]
    IdMismatch { expected: ElementId, found: ElementId },
    #[error("Element {id} ({found}) does not fit the active gesture")]
    KindMismatch { id: ElementId, found: ElementKind },
}

/// Result type for engine operations.
pub type EditResult<T> = Result<T, EditError>;
