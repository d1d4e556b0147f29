use super::*;
use crate::geometry::Point;

fn doc_with(texts: &[&str]) -> DocumentState {
    let mut state = DocumentState::new();
    for (i, text) in texts.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let offset = i as f64 * 10.0;
        state.elements.push_back(TextElement::new(*text, Point::new(offset, offset)));
    }
    state
}

// =============================================================
// Construction and lookup
// =============================================================

#[test]
fn new_state_is_empty() {
    let state = DocumentState::new();
    assert!(state.elements.is_empty());
    assert!(state.selected_id.is_none());
    assert!(!state.canvas_size.is_known());
    assert!(!state.is_add_dialog_open);
    assert!(!state.is_font_size_dialog_open);
    assert!(state.element_pending_rename.is_none());
    assert!(!state.can_undo);
    assert!(!state.can_redo);
}

#[test]
fn element_finds_by_id() {
    let state = doc_with(&["a", "b"]);
    let b = state.elements[1].clone();
    assert_eq!(state.element(&b.id), Some(&b));
    assert_eq!(state.index_of(&b.id), Some(1));
}

#[test]
fn element_unknown_id_is_none() {
    let state = doc_with(&["a"]);
    let stranger = TextElement::new("x", Point::default());
    assert!(state.element(&stranger.id).is_none());
    assert!(state.index_of(&stranger.id).is_none());
}

#[test]
fn selected_element_follows_selected_id() {
    let mut state = doc_with(&["a", "b"]);
    assert!(state.selected_element().is_none());
    state.selected_id = Some(state.elements[0].id);
    assert_eq!(state.selected_element().map(|e| e.text.as_str()), Some("a"));
}

// =============================================================
// Snapshots
// =============================================================

#[test]
fn snapshot_captures_content_only() {
    let mut state = doc_with(&["a"]);
    state.selected_id = Some(state.elements[0].id);
    state.is_add_dialog_open = true;
    state.canvas_size = Size::new(400.0, 800.0);

    let snap = state.snapshot();
    assert_eq!(snap.elements, state.elements);
    assert_eq!(snap.selected_id, state.selected_id);
}

#[test]
fn restored_keeps_canvas_and_dialogs() {
    let mut state = doc_with(&["a"]);
    let snap = DocumentState::new().snapshot();
    state.canvas_size = Size::new(400.0, 800.0);
    state.is_font_size_dialog_open = true;

    let restored = state.restored(&snap);
    assert!(restored.elements.is_empty());
    assert_eq!(restored.canvas_size, Size::new(400.0, 800.0));
    assert!(restored.is_font_size_dialog_open);
}

#[test]
fn restored_drops_stale_references() {
    let mut state = doc_with(&["a"]);
    let id = state.elements[0].id;
    state.selected_id = Some(id);
    state.element_pending_rename = Some(id);

    let mut snap = DocumentState::new().snapshot();
    snap.selected_id = Some(id);

    let restored = state.restored(&snap);
    assert!(restored.selected_id.is_none());
    assert!(restored.element_pending_rename.is_none());
}

#[test]
fn restored_keeps_live_references() {
    let mut state = doc_with(&["a", "b"]);
    let a = state.elements[0].id;
    let b = state.elements[1].id;
    state.element_pending_rename = Some(b);
    let mut snap = state.snapshot();
    snap.selected_id = Some(a);

    let restored = state.restored(&snap);
    assert_eq!(restored.selected_id, Some(a));
    assert_eq!(restored.element_pending_rename, Some(b));
}

#[test]
fn with_element_at_replaces_one_slot() {
    let state = doc_with(&["a", "b"]);
    let edited = state.elements[1].with_text("B");
    let next = state.with_element_at(1, edited.clone());

    assert_eq!(next.elements[0], state.elements[0]);
    assert_eq!(next.elements[1], edited);
    assert_eq!(state.elements[1].text, "b");
}

#[test]
fn with_element_at_out_of_range_is_unchanged() {
    let state = doc_with(&["a"]);
    let next = state.with_element_at(5, TextElement::new("z", Point::default()));
    assert_eq!(next, state);
}

#[test]
fn state_serde_roundtrip() {
    let mut state = doc_with(&["a", "b"]);
    state.selected_id = Some(state.elements[1].id);
    state.canvas_size = Size::new(400.0, 800.0);

    let json = serde_json::to_string(&state).unwrap();
    let back: DocumentState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
