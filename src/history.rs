//! Undo/redo history over document snapshots.
//!
//! DESIGN
//! ======
//! History is a cursor into a sequence of checkpoints. Each checkpoint is an
//! `Arc` around a [`Snapshot`] whose elements live in a persistent vector, so
//! recording shares structure with the live state instead of deep-copying it.
//!
//! ```text
//! record(s3)        [s0, s1, s2, s3]   cursor = 3
//! undo() x2         [s0, s1, s2, s3]   cursor = 1
//! record(s4)        [s0, s1, s4]       cursor = 2   (s2, s3 discarded)
//! ```
//!
//! The checkpoint under the cursor always matches the visible document
//! content. Geometry adjustments that must not become their own undo step
//! replace that checkpoint in place via [`History::amend`].

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;
use std::sync::Arc;

use crate::state::Snapshot;

/// A recorded document state and the edit that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub snapshot: Snapshot,
    /// Short description of the producing edit, e.g. `"Bold"`.
    pub label: &'static str,
}

/// Label of the checkpoint every history starts from.
pub const INITIAL_LABEL: &str = "Open";

/// Linear undo/redo history.
#[derive(Debug, Clone)]
pub struct History {
    checkpoints: VecDeque<Arc<Checkpoint>>,
    cursor: usize,
    /// Maximum number of undo steps kept; `0` means unlimited.
    limit: usize,
}

impl History {
    /// Start a history whose only checkpoint is `initial`.
    #[must_use]
    pub fn new(initial: Snapshot) -> Self {
        Self::with_limit(initial, 0)
    }

    /// Start a history that keeps at most `limit` undo steps (`0` = unlimited).
    #[must_use]
    pub fn with_limit(initial: Snapshot, limit: usize) -> Self {
        let mut checkpoints = VecDeque::new();
        checkpoints.push_back(Arc::new(Checkpoint { snapshot: initial, label: INITIAL_LABEL }));
        Self { checkpoints, cursor: 0, limit }
    }

    /// Record a new checkpoint after the cursor, discarding any redo branch.
    pub fn record(&mut self, snapshot: Snapshot, label: &'static str) {
        self.checkpoints.truncate(self.cursor + 1);
        self.checkpoints.push_back(Arc::new(Checkpoint { snapshot, label }));
        self.cursor = self.checkpoints.len() - 1;
        self.enforce_limit();
        tracing::debug!(label, cursor = self.cursor, depth = self.checkpoints.len(), "checkpoint recorded");
    }

    /// Replace the checkpoint under the cursor, keeping its label.
    pub fn amend(&mut self, snapshot: Snapshot) {
        let Some(slot) = self.checkpoints.get_mut(self.cursor) else {
            return;
        };
        let label = slot.label;
        *slot = Arc::new(Checkpoint { snapshot, label });
        tracing::trace!(cursor = self.cursor, "checkpoint amended");
    }

    /// Step back. Returns the checkpoint now under the cursor, or `None` at
    /// the oldest checkpoint.
    pub fn undo(&mut self) -> Option<Arc<Checkpoint>> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.checkpoints.get(self.cursor).cloned()
    }

    /// Step forward. Returns the checkpoint now under the cursor, or `None`
    /// at the newest checkpoint.
    pub fn redo(&mut self) -> Option<Arc<Checkpoint>> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.checkpoints.get(self.cursor).cloned()
    }

    /// The checkpoint under the cursor.
    #[must_use]
    pub fn head(&self) -> Option<&Checkpoint> {
        self.checkpoints.get(self.cursor).map(Arc::as_ref)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.checkpoints.len()
    }

    /// Label of the edit an undo would revert.
    #[must_use]
    pub fn undo_label(&self) -> Option<&'static str> {
        if self.can_undo() { self.head().map(|c| c.label) } else { None }
    }

    /// Label of the edit a redo would reapply.
    #[must_use]
    pub fn redo_label(&self) -> Option<&'static str> {
        self.checkpoints.get(self.cursor + 1).map(|c| c.label)
    }

    /// Index of the checkpoint under the cursor.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of checkpoints, including the initial one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Always false: a history holds at least its initial checkpoint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Evict the oldest checkpoints beyond the configured limit.
    fn enforce_limit(&mut self) {
        if self.limit == 0 {
            return;
        }
        while self.checkpoints.len() > self.limit + 1 && self.cursor > 0 {
            self.checkpoints.pop_front();
            self.cursor -= 1;
        }
    }
}
