//! Shared numeric constants for the editor engine.

// ── Font size ───────────────────────────────────────────────────

/// Smallest font size an element may carry.
pub const MIN_FONT_SIZE: u32 = 10;

/// Largest font size an element may carry.
pub const MAX_FONT_SIZE: u32 = 100;

/// Font size given to newly added text.
pub const DEFAULT_FONT_SIZE: u32 = 24;

/// Amount added or removed by a single increase/decrease step.
pub const FONT_SIZE_STEP: u32 = 2;

// ── Text extent estimation ──────────────────────────────────────

/// Average glyph advance as a fraction of the font size.
pub const GLYPH_WIDTH_FACTOR: f64 = 0.6;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;
