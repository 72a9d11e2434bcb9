//! The ordered element list.

use crate::error::EditError;
use crate::shapes::{Element, ElementId};
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// An ordered sequence of elements.
///
/// Insertion order is z-order: later elements draw on top and win hit tests.
/// An element's id always equals its index. Elements are appended and
/// replaced in place, never inserted in the middle or removed, which is what
/// keeps ids stable. Supporting deletion would need stable handles (a slot
/// map) instead of positional ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Element>", try_from = "Vec<Element>")]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The id the next appended element must carry.
    pub fn next_id(&self) -> ElementId {
        self.elements.len()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Like [`Scene::get`] but an unknown id is an invariant violation.
    pub fn require(&self, id: ElementId) -> Result<&Element, EditError> {
        self.elements.get(id).ok_or(EditError::UnknownElement {
            id,
            len: self.elements.len(),
        })
    }

    /// Elements back to front.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Append an element on top. Its id must equal [`Scene::next_id`].
    pub fn push(&mut self, element: Element) -> Result<ElementId, EditError> {
        let expected = self.next_id();
        if element.id() != expected {
            return Err(EditError::IdMismatch {
                expected,
                found: element.id(),
            });
        }
        self.elements.push(element);
        self.debug_check_ids();
        Ok(expected)
    }

    /// Replace the element at `id` in place.
    pub fn replace(&mut self, id: ElementId, element: Element) -> Result<(), EditError> {
        let len = self.elements.len();
        let slot = self
            .elements
            .get_mut(id)
            .ok_or(EditError::UnknownElement { id, len })?;
        if element.id() != id {
            return Err(EditError::IdMismatch {
                expected: id,
                found: element.id(),
            });
        }
        *slot = element;
        self.debug_check_ids();
        Ok(())
    }

    /// Bounding box of all elements.
    pub fn bounds(&self) -> Option<Rect> {
        self.elements
            .iter()
            .map(Element::bounds)
            .reduce(|acc, bounds| acc.union(bounds))
    }

    fn debug_check_ids(&self) {
        debug_assert!(
            self.elements.iter().enumerate().all(|(index, e)| e.id() == index),
            "element ids must equal their index"
        );
    }
}

impl TryFrom<Vec<Element>> for Scene {
    type Error = EditError;

    /// Adopt a list of elements, checking that every id equals its index.
    fn try_from(elements: Vec<Element>) -> Result<Self, Self::Error> {
        if let Some((expected, element)) = elements
            .iter()
            .enumerate()
            .find(|(index, element)| element.id() != *index)
        {
            return Err(EditError::IdMismatch {
                expected,
                found: element.id(),
            });
        }
        Ok(Self { elements })
    }
}

impl From<Scene> for Vec<Element> {
    fn from(scene: Scene) -> Self {
        scene.elements
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
