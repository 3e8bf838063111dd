//! Snapshot-based undo/redo history

use crate::{EditError, Result};
use story_model::Story;

/// Default maximum number of undo entries
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Bounded stacks of story snapshots.
///
/// Every committed mutation records the prior snapshot; recording clears the
/// redo stack, so redo is only reachable through a preceding undo. The undo
/// stack is bounded and evicts its oldest entry first.
pub struct History {
    /// Snapshots that can be restored by undo
    undo_stack: Vec<Story>,
    /// Snapshots that can be restored by redo
    redo_stack: Vec<Story>,
    /// Maximum number of undo entries
    capacity: usize,
}

impl History {
    /// Create a history with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a history with a custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            capacity,
        }
    }

    /// Record the snapshot that precedes a committed mutation
    pub fn record(&mut self, snapshot: Story) {
        self.redo_stack.clear();
        self.undo_stack.push(snapshot);
        while self.undo_stack.len() > self.capacity {
            self.undo_stack.remove(0);
        }
    }

    /// Restore the previous snapshot, moving `current` onto the redo stack
    pub fn undo(&mut self, current: Story) -> Result<Story> {
        let restored = self.undo_stack.pop().ok_or(EditError::UndoStackEmpty)?;
        self.redo_stack.push(current);
        Ok(restored)
    }

    /// Restore the next snapshot, moving `current` back onto the undo stack
    pub fn redo(&mut self, current: Story) -> Result<Story> {
        let restored = self.redo_stack.pop().ok_or(EditError::RedoStackEmpty)?;
        self.undo_stack.push(current);
        Ok(restored)
    }

    /// Returns true if there are snapshots that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are snapshots that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
