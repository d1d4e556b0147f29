//! Reducer: `(state, action) → transition`.
//!
//! DESIGN
//! ======
//! `reduce` is a total, pure function. It never fails: blank input, unknown
//! ids and out-of-range sizes degrade to clamped values or no-ops. Besides
//! the next state it reports an [`Effect`] that tells the engine how the
//! transition relates to undo history. The reducer itself never touches
//! history, so `Undo`, `Redo` and `CommitMove` come back unchanged with the
//! matching effect for the engine to carry out.
//!
//! Geometry follows one rule: start-aligned elements keep their free x,
//! center/end-aligned elements take x from the alignment, and every position
//! is clamped once the canvas size is known. Re-deriving positions is part of
//! whichever transition caused it, never a step of its own.

#[cfg(test)]
#[path = "reducer_test.rs"]
mod reducer_test;

use crate::action::{Action, SelectedAction};
use crate::consts::DEFAULT_FONT_SIZE;
use crate::element::{ElementId, TextAlign, TextElement};
use crate::geometry::{Point, Size, alignment_offset_x, centered, clamp, estimate_extent, place};
use crate::state::DocumentState;

/// How a transition relates to undo history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed; the engine keeps its current state.
    None,
    /// UI or focus change. Not recorded.
    Transient,
    /// One frame of an interactive drag. Not recorded until committed.
    DragFrame,
    /// Host-driven geometry change, folded into the current checkpoint.
    Relayout,
    /// A document edit that creates a new undo checkpoint.
    Checkpoint,
    /// End of a drag; the engine records the pending drag, if any.
    CommitMove,
    /// Step back in history.
    Undo,
    /// Step forward in history.
    Redo,
}

impl Effect {
    /// Whether this effect can create an undo checkpoint.
    #[must_use]
    pub fn is_history_significant(self) -> bool {
        matches!(self, Self::Checkpoint | Self::CommitMove)
    }
}

/// Tunables for the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceOptions {
    /// Clamp `MoveElement` positions again instead of trusting the gesture
    /// layer.
    pub clamp_moves: bool,
}

impl Default for ReduceOptions {
    fn default() -> Self {
        Self { clamp_moves: true }
    }
}

/// Result of reducing one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: DocumentState,
    pub effect: Effect,
}

impl Transition {
    #[must_use]
    pub fn new(state: DocumentState, effect: Effect) -> Self {
        Self { state, effect }
    }

    fn unchanged(state: &DocumentState) -> Self {
        Self::new(state.clone(), Effect::None)
    }

    /// `Transient` when `next` differs from `prev`, otherwise `None`.
    fn transient(prev: &DocumentState, next: DocumentState) -> Self {
        if next == *prev { Self::unchanged(prev) } else { Self::new(next, Effect::Transient) }
    }
}

/// Compute the next state for `action`.
#[must_use]
pub fn reduce(state: &DocumentState, action: &Action, options: &ReduceOptions) -> Transition {
    match action {
        Action::AddText(text) => add_text(state, text),
        Action::UpdateText { id, text } => update_text(state, id, text),
        Action::SelectElement(id) => select_element(state, *id),
        Action::MoveElement { id, position } => move_element(state, id, *position, options),
        Action::CommitMove => Transition::new(state.clone(), Effect::CommitMove),
        Action::UpdateCanvasSize(size) => update_canvas_size(state, *size),
        Action::UpdateElementSize { id, size } => update_element_size(state, id, *size),
        Action::ShowAddDialog => Transition::transient(state, DocumentState { is_add_dialog_open: true, ..state.clone() }),
        Action::HideAddDialog => Transition::transient(state, DocumentState { is_add_dialog_open: false, ..state.clone() }),
        Action::OpenRenameDialog(id) => open_rename_dialog(state, id),
        Action::CloseRenameDialog => {
            Transition::transient(state, DocumentState { element_pending_rename: None, ..state.clone() })
        }
        Action::OpenFontSizeDialog => {
            Transition::transient(state, DocumentState { is_font_size_dialog_open: true, ..state.clone() })
        }
        Action::CloseFontSizeDialog => {
            Transition::transient(state, DocumentState { is_font_size_dialog_open: false, ..state.clone() })
        }
        Action::Undo => Transition::new(state.clone(), Effect::Undo),
        Action::Redo => Transition::new(state.clone(), Effect::Redo),
        Action::Selected(selected) => apply_to_selected(state, *selected),
    }
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// Re-derive an element's position from its extent, alignment and the
/// canvas. Leaves the element untouched while the canvas size is unknown.
#[must_use]
pub fn settle(element: &TextElement, canvas: Size) -> TextElement {
    if !canvas.is_known() {
        return element.clone();
    }
    let extent = element.extent();
    let mut position = element.position;
    if element.text_align != TextAlign::Start {
        position.x = alignment_offset_x(element.text_align, extent.width, canvas.width);
    }
    let position = clamp(position, extent, canvas);
    if position == element.position { element.clone() } else { element.with_position(position) }
}

/// Advance alignment one step and reposition.
fn realign(element: &TextElement, canvas: Size) -> TextElement {
    let align = element.text_align.next();
    let mut next = TextElement { text_align: align, ..element.clone() };
    if element.text_align == TextAlign::Start {
        next.start_x = Some(element.position.x);
    } else if align == TextAlign::Start {
        let extent = next.extent();
        next.position.x = next
            .start_x
            .take()
            .unwrap_or_else(|| alignment_offset_x(TextAlign::Start, extent.width, canvas.width));
    }
    settle(&next, canvas)
}

// =============================================================================
// DOCUMENT ACTIONS
// =============================================================================

fn add_text(state: &DocumentState, text: &str) -> Transition {
    if text.trim().is_empty() {
        tracing::debug!("add text rejected: blank input");
        return Transition::unchanged(state);
    }

    let canvas = state.canvas_size;
    let extent = estimate_extent(text, DEFAULT_FONT_SIZE);
    let position = place(centered(extent, canvas), extent, canvas);
    let element = TextElement::new(text, position);

    let mut next = state.clone();
    next.selected_id = Some(element.id);
    next.is_add_dialog_open = false;
    next.elements.push_back(element);
    Transition::new(next, Effect::Checkpoint)
}

fn update_text(state: &DocumentState, id: &ElementId, text: &str) -> Transition {
    let Some((index, element)) = find(state, id) else {
        tracing::debug!(%id, "update text ignored: unknown element");
        return Transition::unchanged(state);
    };
    if element.text == text {
        return Transition::unchanged(state);
    }
    let updated = settle(&element.with_text(text), state.canvas_size);
    Transition::new(state.with_element_at(index, updated), Effect::Checkpoint)
}

fn select_element(state: &DocumentState, id: Option<ElementId>) -> Transition {
    if let Some(id) = id {
        if state.element(&id).is_none() {
            tracing::debug!(%id, "select ignored: unknown element");
            return Transition::unchanged(state);
        }
    }
    Transition::transient(state, DocumentState { selected_id: id, ..state.clone() })
}

fn move_element(state: &DocumentState, id: &ElementId, position: Point, options: &ReduceOptions) -> Transition {
    if !position.is_finite() {
        tracing::debug!(%id, "move ignored: non-finite position");
        return Transition::unchanged(state);
    }
    let Some((index, element)) = find(state, id) else {
        tracing::debug!(%id, "move ignored: unknown element");
        return Transition::unchanged(state);
    };

    let position = if options.clamp_moves { place(position, element.extent(), state.canvas_size) } else { position };
    if position == element.position {
        return Transition::unchanged(state);
    }
    Transition::new(state.with_element_at(index, element.with_position(position)), Effect::DragFrame)
}

fn update_canvas_size(state: &DocumentState, size: Size) -> Transition {
    if size == state.canvas_size {
        return Transition::unchanged(state);
    }
    let next = DocumentState {
        canvas_size: size,
        elements: state.elements.iter().map(|e| settle(e, size)).collect(),
        ..state.clone()
    };
    Transition::new(next, Effect::Relayout)
}

fn update_element_size(state: &DocumentState, id: &ElementId, size: Size) -> Transition {
    if !(size.width.is_finite() && size.height.is_finite()) || size.width < 0.0 || size.height < 0.0 {
        tracing::debug!(%id, "element size ignored: invalid measurement");
        return Transition::unchanged(state);
    }
    let Some((index, element)) = find(state, id) else {
        return Transition::unchanged(state);
    };
    if element.measured_size == Some(size) {
        return Transition::unchanged(state);
    }
    let updated = settle(&element.with_measured_size(size), state.canvas_size);
    Transition::new(state.with_element_at(index, updated), Effect::Relayout)
}

fn open_rename_dialog(state: &DocumentState, id: &ElementId) -> Transition {
    if state.element(id).is_none() {
        tracing::debug!(%id, "rename ignored: unknown element");
        return Transition::unchanged(state);
    }
    Transition::transient(state, DocumentState { element_pending_rename: Some(*id), ..state.clone() })
}

// =============================================================================
// SELECTED-ELEMENT ACTIONS
// =============================================================================

fn apply_to_selected(state: &DocumentState, action: SelectedAction) -> Transition {
    let Some(id) = state.selected_id else {
        return Transition::unchanged(state);
    };
    let Some((index, element)) = find(state, &id) else {
        return Transition::unchanged(state);
    };

    let canvas = state.canvas_size;
    let updated = match action {
        SelectedAction::SetFontSize(size) => element.with_font_size(size),
        SelectedAction::IncreaseFontSize => element.with_larger_font(),
        SelectedAction::DecreaseFontSize => element.with_smaller_font(),
        SelectedAction::ToggleBold => element.with_bold_toggled(),
        SelectedAction::ToggleItalic => element.with_italic_toggled(),
        SelectedAction::ToggleUnderline => element.with_underline_toggled(),
        SelectedAction::ToggleAlignment => realign(element, canvas),
        SelectedAction::ChangeFontFamily(family) => element.with_font_family(family),
    };
    let updated = settle(&updated, canvas);

    if updated == *element {
        return Transition::unchanged(state);
    }
    Transition::new(state.with_element_at(index, updated), Effect::Checkpoint)
}

fn find<'a>(state: &'a DocumentState, id: &ElementId) -> Option<(usize, &'a TextElement)> {
    state.elements.iter().enumerate().find(|(_, e)| e.id == *id)
}
