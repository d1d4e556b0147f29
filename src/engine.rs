//! Editor engine: owns the live document, its history, and the pending drag.
//!
//! DESIGN
//! ======
//! The engine is the only mutable cell. `dispatch` runs the pure reducer,
//! then decides from the reported [`Effect`] whether history changes, and
//! finally replaces the visible state as a whole. Dispatches are synchronous
//! and never fail.
//!
//! Drag gestures are tracked explicitly. The first `MoveElement` opens a
//! [`PendingDrag`]; later frames only touch the live state. `CommitMove`
//! records one checkpoint for the whole gesture. Any edit, undo or redo that
//! arrives mid-drag settles the drag first, so intermediate frames are never
//! undoable on their own and a drag is never lost. Host measurements that
//! arrive mid-drag are applied to the checkpoint under the cursor as well, so
//! the commit sees only what the drag changed.
//!
//! The engine holds no locks. A multi-threaded host must serialize dispatches
//! to one engine itself.

use std::sync::Arc;

use crate::action::Action;
use crate::config::EditorConfig;
use crate::element::{ElementId, TextElement};
use crate::geometry::Point;
use crate::history::{Checkpoint, History};
use crate::reducer::{Effect, ReduceOptions, Transition, reduce, settle};
use crate::state::DocumentState;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Label recorded for a settled drag.
const MOVE_LABEL: &str = "Move";
/// Fallback for a recording action without a label of its own.
const EDIT_LABEL: &str = "Edit";

/// An interactive drag that has moved the live state but not yet been
/// recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingDrag {
    /// Element the gesture started on.
    pub element_id: ElementId,
    /// Its position before the first frame.
    pub origin: Point,
    /// Number of frames applied so far.
    pub frames: usize,
}

/// One editor instance per open document.
#[derive(Debug)]
pub struct Engine {
    state: DocumentState,
    history: History,
    pending: Option<PendingDrag>,
    options: ReduceOptions,
    revision: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine over an empty document with default config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Engine over an empty document.
    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        tracing::info!(
            history_limit = config.history_limit,
            clamp_moves = config.clamp_moves,
            "editor engine created"
        );
        let state = DocumentState::new();
        let history = History::with_limit(state.snapshot(), config.history_limit);
        Self { state, history, pending: None, options: config.reduce_options(), revision: 0 }
    }

    // --- Dispatch ---

    /// Apply one action to completion.
    pub fn dispatch(&mut self, action: Action) {
        let Transition { state, effect } = reduce(&self.state, &action, &self.options);
        tracing::debug!(action = action.name(), ?effect, "dispatch");

        match effect {
            Effect::None => {}
            Effect::Transient => self.replace(state),
            Effect::DragFrame => self.drag_frame(&action, state),
            Effect::Relayout => {
                if self.pending.is_some() {
                    // The live elements include the drag, so lay out the
                    // checkpoint content on its own.
                    self.relayout_head(&action);
                    self.replace(state);
                } else {
                    self.replace(state);
                    self.history.amend(self.state.snapshot());
                }
            }
            Effect::Checkpoint => {
                self.settle_drag();
                self.replace(state);
                self.history.record(self.state.snapshot(), action.label().unwrap_or(EDIT_LABEL));
            }
            Effect::CommitMove => {
                if !self.settle_drag() {
                    tracing::debug!("commit without a pending drag");
                }
            }
            Effect::Undo => {
                self.settle_drag();
                let restored = self.history.undo();
                self.restore(restored);
            }
            Effect::Redo => {
                self.settle_drag();
                let restored = self.history.redo();
                self.restore(restored);
            }
        }
        self.sync_flags();
    }

    // --- Queries ---

    /// The externally visible state.
    #[must_use]
    pub fn current_state(&self) -> &DocumentState {
        &self.state
    }

    /// The currently selected element, if any.
    #[must_use]
    pub fn selected_element(&self) -> Option<&TextElement> {
        self.state.selected_element()
    }

    /// Drag awaiting `CommitMove`, if any.
    #[must_use]
    pub fn pending_drag(&self) -> Option<PendingDrag> {
        self.pending
    }

    /// Incremented on every visible state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Description of the edit `Undo` would revert.
    #[must_use]
    pub fn undo_label(&self) -> Option<&'static str> {
        self.history.undo_label()
    }

    /// Description of the edit `Redo` would reapply.
    #[must_use]
    pub fn redo_label(&self) -> Option<&'static str> {
        self.history.redo_label()
    }

    // --- Internals ---

    fn replace(&mut self, state: DocumentState) {
        self.state = state;
        self.revision += 1;
    }

    fn drag_frame(&mut self, action: &Action, state: DocumentState) {
        match self.pending.as_mut() {
            Some(pending) => pending.frames += 1,
            None => {
                if let Action::MoveElement { id, .. } = action {
                    let origin = self.state.element(id).map_or_else(Point::default, |e| e.position);
                    self.pending = Some(PendingDrag { element_id: *id, origin, frames: 1 });
                    tracing::debug!(%id, "drag started");
                }
            }
        }
        self.replace(state);
    }

    /// Record the pending drag, if any. Returns whether a drag was pending.
    fn settle_drag(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        let moved = self.history.head().is_none_or(|head| head.snapshot.elements != self.state.elements);
        if moved {
            self.history.record(self.state.snapshot(), MOVE_LABEL);
        } else {
            tracing::debug!(id = %pending.element_id, "drag ended at its origin");
        }
        true
    }

    /// Apply a host measurement to the checkpoint under the cursor while a
    /// drag is pending, so settling the drag compares against the same layout.
    fn relayout_head(&mut self, action: &Action) {
        let base = match self.history.head() {
            Some(head) => self.state.restored(&head.snapshot),
            None => return,
        };
        let Transition { state, effect } = reduce(&base, action, &self.options);
        if effect != Effect::Relayout {
            return;
        }
        if let Some(pending) = self.pending.as_mut() {
            if let Some(element) = state.element(&pending.element_id) {
                pending.origin = element.position;
            }
        }
        self.history.amend(state.snapshot());
    }

    /// Show a checkpoint returned by undo/redo, re-laid out for the current
    /// canvas. Layout differences are folded back into the checkpoint.
    fn restore(&mut self, checkpoint: Option<Arc<Checkpoint>>) {
        let Some(checkpoint) = checkpoint else {
            tracing::debug!("history bound reached");
            return;
        };
        let mut next = self.state.restored(&checkpoint.snapshot);
        let canvas = next.canvas_size;
        next.elements = next.elements.iter().map(|e| settle(e, canvas)).collect();
        if next.elements != checkpoint.snapshot.elements {
            self.history.amend(next.snapshot());
        }
        tracing::debug!(cursor = self.history.cursor(), label = checkpoint.label, "history restored");
        self.replace(next);
    }

    fn sync_flags(&mut self) {
        let can_undo = self.history.can_undo();
        let can_redo = self.history.can_redo();
        if self.state.can_undo != can_undo || self.state.can_redo != can_redo {
            self.state.can_undo = can_undo;
            self.state.can_redo = can_redo;
            self.revision += 1;
        }
    }
}
