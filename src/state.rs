//! Document state: the aggregate snapshot the presentation layer renders.
//!
//! `DocumentState` is what `Engine::current_state` hands out. `Snapshot` is
//! the slice of it that history stores and restores: the elements and the
//! selection. Canvas size, dialog flags and the undo/redo flags stay with the
//! live state and are never captured.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::element::{ElementId, TextElement};
use crate::geometry::Size;

/// Full externally visible editor state.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentState {
    /// Placed elements in z-order (first is bottom-most).
    pub elements: Vector<TextElement>,
    /// The selected element, always one present in `elements`.
    pub selected_id: Option<ElementId>,
    /// Canvas extent reported by the host; `(0, 0)` until the first report.
    pub canvas_size: Size,
    /// Whether the "add text" dialog is showing.
    pub is_add_dialog_open: bool,
    /// Whether the font-size entry dialog is showing.
    pub is_font_size_dialog_open: bool,
    /// Element whose text is being edited in the rename dialog.
    pub element_pending_rename: Option<ElementId>,
    /// Derived by history after every dispatch.
    pub can_undo: bool,
    /// Derived by history after every dispatch.
    pub can_redo: bool,
}

/// History-significant document content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub elements: Vector<TextElement>,
    pub selected_id: Option<ElementId>,
}

impl DocumentState {
    /// An empty document with no canvas size yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&TextElement> {
        self.elements.iter().find(|e| e.id == *id)
    }

    /// Index of an element in z-order.
    #[must_use]
    pub fn index_of(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == *id)
    }

    /// The currently selected element, if any.
    #[must_use]
    pub fn selected_element(&self) -> Option<&TextElement> {
        self.selected_id.as_ref().and_then(|id| self.element(id))
    }

    /// Capture the history-significant part of this state. Shares element
    /// storage with `self`.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { elements: self.elements.clone(), selected_id: self.selected_id }
    }

    /// Copy of this state with the content replaced by `snapshot`.
    ///
    /// Transient UI flags are kept, except that references to elements the
    /// snapshot does not contain are dropped.
    #[must_use]
    pub fn restored(&self, snapshot: &Snapshot) -> Self {
        let mut next = Self {
            elements: snapshot.elements.clone(),
            selected_id: snapshot.selected_id,
            ..self.clone()
        };
        if next.selected_id.is_some_and(|id| next.element(&id).is_none()) {
            next.selected_id = None;
        }
        if next.element_pending_rename.is_some_and(|id| next.element(&id).is_none()) {
            next.element_pending_rename = None;
        }
        next
    }

    /// Copy of this state with the element at `index` replaced.
    #[must_use]
    pub(crate) fn with_element_at(&self, index: usize, element: TextElement) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.elements.get_mut(index) {
            *slot = element;
        }
        next
    }
}
