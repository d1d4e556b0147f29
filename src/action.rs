//! Action taxonomy: the closed set of user intents the engine accepts.
//!
//! Actions arrive already resolved by the presentation layer. A tap becomes
//! `SelectElement`, a drag becomes a run of `MoveElement` followed by one
//! `CommitMove`, and a dialog confirmation becomes the matching document
//! action. Styling intents that apply to the current selection are grouped in
//! [`SelectedAction`].

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use crate::element::{ElementId, FontFamily};
use crate::geometry::{Point, Size};

/// Intent applied to the selected element. A no-op when nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectedAction {
    /// Set the font size, clamped into the allowed range.
    SetFontSize(u32),
    IncreaseFontSize,
    DecreaseFontSize,
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    /// Cycle start → center → end → start and reposition accordingly.
    ToggleAlignment,
    ChangeFontFamily(FontFamily),
}

impl SelectedAction {
    /// Short name for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SetFontSize(_) => "set_font_size",
            Self::IncreaseFontSize => "increase_font_size",
            Self::DecreaseFontSize => "decrease_font_size",
            Self::ToggleBold => "toggle_bold",
            Self::ToggleItalic => "toggle_italic",
            Self::ToggleUnderline => "toggle_underline",
            Self::ToggleAlignment => "toggle_alignment",
            Self::ChangeFontFamily(_) => "change_font_family",
        }
    }

    /// Description shown next to undo/redo.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SetFontSize(_) | Self::IncreaseFontSize | Self::DecreaseFontSize => "Font size",
            Self::ToggleBold => "Bold",
            Self::ToggleItalic => "Italic",
            Self::ToggleUnderline => "Underline",
            Self::ToggleAlignment => "Alignment",
            Self::ChangeFontFamily(_) => "Font",
        }
    }
}

/// Every intent the engine understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Place new text at the canvas center. Blank text is rejected.
    AddText(String),
    /// Replace the text of an element.
    UpdateText { id: ElementId, text: String },
    /// Select an element, or clear the selection with `None`.
    SelectElement(Option<ElementId>),
    /// One frame of a drag gesture.
    MoveElement { id: ElementId, position: Point },
    /// End of a drag gesture.
    CommitMove,
    /// The host measured the canvas.
    UpdateCanvasSize(Size),
    /// The host measured a rendered element.
    UpdateElementSize { id: ElementId, size: Size },
    ShowAddDialog,
    HideAddDialog,
    OpenRenameDialog(ElementId),
    CloseRenameDialog,
    OpenFontSizeDialog,
    CloseFontSizeDialog,
    Undo,
    Redo,
    /// Styling intent for the selected element.
    Selected(SelectedAction),
}

impl Action {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddText(_) => "add_text",
            Self::UpdateText { .. } => "update_text",
            Self::SelectElement(_) => "select_element",
            Self::MoveElement { .. } => "move_element",
            Self::CommitMove => "commit_move",
            Self::UpdateCanvasSize(_) => "update_canvas_size",
            Self::UpdateElementSize { .. } => "update_element_size",
            Self::ShowAddDialog => "show_add_dialog",
            Self::HideAddDialog => "hide_add_dialog",
            Self::OpenRenameDialog(_) => "open_rename_dialog",
            Self::CloseRenameDialog => "close_rename_dialog",
            Self::OpenFontSizeDialog => "open_font_size_dialog",
            Self::CloseFontSizeDialog => "close_font_size_dialog",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Selected(action) => action.name(),
        }
    }

    /// Description recorded with the checkpoint this action creates, or
    /// `None` for actions that never create one.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::AddText(_) => Some("Add text"),
            Self::UpdateText { .. } => Some("Edit text"),
            Self::MoveElement { .. } | Self::CommitMove => Some("Move"),
            Self::Selected(action) => Some(action.label()),
            Self::SelectElement(_)
            | Self::UpdateCanvasSize(_)
            | Self::UpdateElementSize { .. }
            | Self::ShowAddDialog
            | Self::HideAddDialog
            | Self::OpenRenameDialog(_)
            | Self::CloseRenameDialog
            | Self::OpenFontSizeDialog
            | Self::CloseFontSizeDialog
            | Self::Undo
            | Self::Redo => None,
        }
    }
}

impl From<SelectedAction> for Action {
    fn from(action: SelectedAction) -> Self {
        Self::Selected(action)
    }
}
