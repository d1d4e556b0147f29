//! State engine for a canvas text-layout editor.
//!
//! The crate turns resolved user intents ("add text", "move element E to P",
//! "toggle bold") into successive document states, with full undo/redo. It
//! never draws anything: the host measures the canvas and rendered text,
//! converts gestures into [`action::Action`]s, and reads
//! [`engine::Engine::current_state`] after every dispatch.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Owns the live state, history and pending drag; `dispatch` entry point |
//! | [`reducer`] | Pure `(state, action) → transition` business rules |
//! | [`history`] | Cursor-based undo/redo over shared snapshots |
//! | [`action`] | The closed set of accepted intents |
//! | [`state`] | Document state and history snapshots |
//! | [`element`] | Text element value type and styling enums |
//! | [`geometry`] | Points, sizes, clamping and alignment offsets |
//! | [`config`] | Environment-driven engine configuration |
//! | [`consts`] | Font-size limits and extent estimation factors |

pub mod action;
pub mod config;
pub mod consts;
pub mod element;
pub mod engine;
pub mod geometry;
pub mod history;
pub mod reducer;
pub mod state;

pub use action::{Action, SelectedAction};
pub use config::{ConfigError, EditorConfig};
pub use element::{Color, ElementId, FontFamily, FontStyle, FontWeight, TextAlign, TextDecoration, TextElement};
pub use engine::{Engine, PendingDrag};
pub use geometry::{Point, Size};
pub use state::{DocumentState, Snapshot};
