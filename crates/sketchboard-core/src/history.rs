//! Linear undo/redo over scene snapshots.

use crate::scene::Scene;

/// A linear sequence of scene snapshots plus a cursor.
///
/// The scene at `index` is the current one. Snapshots behind the cursor are
/// never touched again; snapshots ahead of it are the redo tail and are
/// dropped by the next [`History::commit`].
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    snapshots: Vec<Scene>,
    index: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Scene::new())
    }
}

impl History {
    /// Start a history whose only snapshot is `initial`.
    pub fn new(initial: Scene) -> Self {
        Self {
            snapshots: vec![initial],
            index: 0,
        }
    }

    /// The current scene.
    pub fn current(&self) -> &Scene {
        // `index < snapshots.len()` holds for every reachable state.
        &self.snapshots[self.index]
    }

    /// Drop the redo tail, append `scene` and make it current.
    pub fn commit(&mut self, scene: Scene) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(scene);
        self.index += 1;
        log::debug!(
            "History commit: index {} of {} ({} elements)",
            self.index,
            self.snapshots.len(),
            self.current().len()
        );
    }

    /// Replace the current snapshot without moving the cursor or touching
    /// the redo tail.
    pub fn overwrite(&mut self, scene: Scene) {
        log::trace!("History overwrite at index {}", self.index);
        self.snapshots[self.index] = scene;
    }

    /// Step back one snapshot. Returns true if the cursor moved.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.index -= 1;
        log::debug!("Undo: index {} of {}", self.index, self.snapshots.len());
        true
    }

    /// Step forward one snapshot. Returns true if the cursor moved.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.index += 1;
        log::debug!("Redo: index {} of {}", self.index, self.snapshots.len());
        true
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Position of the current snapshot.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of stored snapshots, including the redo tail.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least its initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
