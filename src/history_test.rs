use super::*;
use crate::element::TextElement;
use crate::geometry::Point;

/// Snapshot holding one element per text, in order.
fn snap(texts: &[&str]) -> Snapshot {
    let mut snapshot = Snapshot::default();
    for text in texts {
        snapshot.elements.push_back(TextElement::new(*text, Point::default()));
    }
    snapshot
}

fn texts(checkpoint: &Checkpoint) -> Vec<String> {
    checkpoint.snapshot.elements.iter().map(|e| e.text.clone()).collect()
}

fn head_texts(history: &History) -> Vec<String> {
    history.head().map(texts).unwrap_or_default()
}

// =============================================================
// Basics
// =============================================================

#[test]
fn new_history_has_only_initial_checkpoint() {
    let history = History::new(Snapshot::default());
    assert_eq!(history.len(), 1);
    assert!(!history.is_empty());
    assert_eq!(history.cursor(), 0);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.head().map(|c| c.label), Some(INITIAL_LABEL));
    assert_eq!(history.limit(), 0);
}

#[test]
fn record_advances_cursor() {
    let mut history = History::new(Snapshot::default());
    history.record(snap(&["a"]), "Add text");
    assert_eq!(history.len(), 2);
    assert_eq!(history.cursor(), 1);
    assert!(history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(head_texts(&history), ["a"]);
}

#[test]
fn undo_and_redo_walk_the_cursor() {
    let mut history = History::new(Snapshot::default());
    history.record(snap(&["a"]), "Add text");
    history.record(snap(&["a", "b"]), "Add text");

    let back = history.undo().map(|c| texts(&c));
    assert_eq!(back, Some(vec!["a".to_string()]));
    assert!(history.can_redo());

    let forward = history.redo().map(|c| texts(&c));
    assert_eq!(forward, Some(vec!["a".to_string(), "b".to_string()]));
    assert!(!history.can_redo());
}

#[test]
fn undo_at_oldest_is_none() {
    let mut history = History::new(Snapshot::default());
    assert!(history.undo().is_none());
    assert_eq!(history.cursor(), 0);
}

#[test]
fn redo_at_newest_is_none() {
    let mut history = History::new(Snapshot::default());
    history.record(snap(&["a"]), "Add text");
    assert!(history.redo().is_none());
    assert_eq!(history.cursor(), 1);
}

#[test]
fn record_after_undo_discards_redo_branch() {
    let mut history = History::new(Snapshot::default());
    history.record(snap(&["a"]), "Add text");
    history.record(snap(&["a", "b"]), "Add text");
    history.undo();
    history.record(snap(&["a", "c"]), "Add text");

    assert_eq!(history.len(), 3);
    assert!(!history.can_redo());
    assert_eq!(head_texts(&history), ["a", "c"]);
}

// =============================================================
// Labels
// =============================================================

#[test]
fn labels_follow_cursor() {
    let mut history = History::new(Snapshot::default());
    assert_eq!(history.undo_label(), None);
    history.record(snap(&["a"]), "Add text");
    history.record(snap(&["A"]), "Edit text");
    assert_eq!(history.undo_label(), Some("Edit text"));
    assert_eq!(history.redo_label(), None);

    history.undo();
    assert_eq!(history.undo_label(), Some("Add text"));
    assert_eq!(history.redo_label(), Some("Edit text"));

    history.undo();
    assert_eq!(history.undo_label(), None);
    assert_eq!(history.redo_label(), Some("Add text"));
}

// =============================================================
// Amend
// =============================================================

#[test]
fn amend_replaces_head_in_place() {
    let mut history = History::new(Snapshot::default());
    history.record(snap(&["a"]), "Bold");
    history.amend(snap(&["a2"]));

    assert_eq!(history.len(), 2);
    assert_eq!(history.cursor(), 1);
    assert_eq!(head_texts(&history), ["a2"]);
    assert_eq!(history.head().map(|c| c.label), Some("Bold"));
}

#[test]
fn amend_keeps_redo_branch() {
    let mut history = History::new(Snapshot::default());
    history.record(snap(&["a"]), "Add text");
    history.undo();
    history.amend(snap(&[]));
    assert!(history.can_redo());
    assert_eq!(history.redo_label(), Some("Add text"));
}

#[test]
fn amend_does_not_touch_shared_checkpoints() {
    let mut history = History::new(Snapshot::default());
    history.record(snap(&["a"]), "Add text");
    history.undo();
    let restored = history.redo();
    history.amend(snap(&["b"]));
    assert_eq!(restored.map(|c| texts(&c)), Some(vec!["a".to_string()]));
    assert_eq!(head_texts(&history), ["b"]);
}

// =============================================================
// Limit
// =============================================================

#[test]
fn limit_evicts_oldest_checkpoints() {
    let mut history = History::with_limit(Snapshot::default(), 2);
    history.record(snap(&["a"]), "1");
    history.record(snap(&["b"]), "2");
    history.record(snap(&["c"]), "3");

    assert_eq!(history.len(), 3);
    assert_eq!(history.cursor(), 2);
    history.undo();
    history.undo();
    assert!(!history.can_undo());
    assert_eq!(head_texts(&history), ["a"]);
}

#[test]
fn zero_limit_is_unlimited() {
    let mut history = History::with_limit(Snapshot::default(), 0);
    for i in 0..50 {
        let text = i.to_string();
        history.record(snap(&[text.as_str()]), "Add text");
    }
    assert_eq!(history.len(), 51);
}
