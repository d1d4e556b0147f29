//! Geometry policy: canvas-space points and sizes, clamping, and
//! alignment-derived offsets.
//!
//! Every function here is pure. Callers supply the element extent (measured
//! by the host or estimated from the text) and the canvas size; nothing in
//! this module knows about fonts or rendering.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::{GLYPH_WIDTH_FACTOR, LINE_HEIGHT_FACTOR};
use crate::element::TextAlign;

/// A point in canvas space (device-independent pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A width/height pair in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A canvas size is known once the host has reported a positive extent in
    /// both dimensions. The initial `(0, 0)` is not known.
    #[must_use]
    pub fn is_known(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

/// Clamp a single coordinate into `[0, max(0, canvas - element)]`.
///
/// Non-finite input collapses to `0` so positions stay finite.
#[must_use]
pub fn clamp_axis(value: f64, element: f64, canvas: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    // `max` discards NaN, so the upper bound is never below the lower one.
    let upper = (canvas - element).max(0.0);
    value.clamp(0.0, upper)
}

/// Coerce each coordinate independently into the canvas. An element larger
/// than the canvas in a dimension pins to `0` in that dimension.
#[must_use]
pub fn clamp(position: Point, element: Size, canvas: Size) -> Point {
    Point {
        x: clamp_axis(position.x, element.width, canvas.width),
        y: clamp_axis(position.y, element.height, canvas.height),
    }
}

/// Target x for an element of `element_width` under `align`, already passed
/// through the x clamp rule.
#[must_use]
pub fn alignment_offset_x(align: TextAlign, element_width: f64, canvas_width: f64) -> f64 {
    let raw = match align {
        TextAlign::Start => 0.0,
        TextAlign::Center => (canvas_width - element_width) / 2.0,
        TextAlign::End => canvas_width - element_width,
    };
    clamp_axis(raw, element_width, canvas_width)
}

/// Rough rendered extent of `text` at `font_size`, used until the host
/// reports a real measurement.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn estimate_extent(text: &str, font_size: u32) -> Size {
    let size = f64::from(font_size);
    let chars = text.chars().count() as f64;
    Size { width: size * chars * GLYPH_WIDTH_FACTOR, height: size * LINE_HEIGHT_FACTOR }
}

/// Top-left position that centers `element` within `canvas`.
#[must_use]
pub fn centered(element: Size, canvas: Size) -> Point {
    Point {
        x: (canvas.width - element.width) / 2.0,
        y: (canvas.height - element.height) / 2.0,
    }
}

/// Settle a requested position: clamp it when the canvas is known, otherwise
/// only floor it at the origin.
#[must_use]
pub fn place(position: Point, element: Size, canvas: Size) -> Point {
    if canvas.is_known() {
        clamp(position, element, canvas)
    } else {
        Point { x: floor_at_origin(position.x), y: floor_at_origin(position.y) }
    }
}

fn floor_at_origin(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
