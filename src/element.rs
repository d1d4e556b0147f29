//! Text element model: one placed piece of text and its styling attributes.
//!
//! Elements are plain values. The reducer never edits one in place; it builds
//! a modified copy and swaps it into the document. Two notions of equality
//! apply: `id` answers "which element", full `PartialEq` answers "did
//! anything change".

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_FONT_SIZE, FONT_SIZE_STEP, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::geometry::{Point, Size, estimate_extent};

/// Unique identifier for a text element. Never reused.
pub type ElementId = Uuid;

/// An ARGB color packed into a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Opaque black, the color of newly added text.
    pub const BLACK: Self = Self(0xFF00_0000);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Typeface choices offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Platform default sans-serif.
    #[default]
    Default,
    /// Display script face.
    Lobster,
    /// Serif text face.
    Merriweather,
    /// Monospace face.
    Inconsolata,
}

impl FontFamily {
    /// Every family, in menu order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Lobster, Self::Merriweather, Self::Inconsolata];

    /// Human-readable name for menus.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Lobster => "Lobster",
            Self::Merriweather => "Merriweather",
            Self::Inconsolata => "Inconsolata",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Bold,
            Self::Bold => Self::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Italic,
            Self::Italic => Self::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
}

impl TextDecoration {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::None => Self::Underline,
            Self::Underline => Self::None,
        }
    }
}

/// Horizontal alignment of an element within the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Free horizontal placement.
    #[default]
    Start,
    /// Horizontally centered in the canvas.
    Center,
    /// Flush against the right canvas edge.
    End,
}

impl TextAlign {
    /// Next alignment in the cycle start → center → end → start.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Start => Self::Center,
            Self::Center => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// One placed text item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    /// Identity, assigned at creation.
    pub id: ElementId,
    /// Displayed content.
    pub text: String,
    /// Top-left corner in canvas space.
    pub position: Point,
    /// Font size in points, always within `[MIN_FONT_SIZE, MAX_FONT_SIZE]`.
    pub font_size: u32,
    pub color: Color,
    pub font_family: FontFamily,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_decoration: TextDecoration,
    pub text_align: TextAlign,
    /// Last rendered size reported by the host. Cleared whenever an edit
    /// invalidates it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measured_size: Option<Size>,
    /// Free x position to restore when alignment cycles back to start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_x: Option<f64>,
}

impl TextElement {
    /// Create an element with default styling and a fresh id.
    #[must_use]
    pub fn new(text: impl Into<String>, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            position,
            font_size: DEFAULT_FONT_SIZE,
            color: Color::default(),
            font_family: FontFamily::default(),
            font_weight: FontWeight::default(),
            font_style: FontStyle::default(),
            text_decoration: TextDecoration::default(),
            text_align: TextAlign::default(),
            measured_size: None,
            start_x: None,
        }
    }

    /// Current extent: the host measurement when present, otherwise an
    /// estimate from the text and font size.
    #[must_use]
    pub fn extent(&self) -> Size {
        self.measured_size
            .unwrap_or_else(|| estimate_extent(&self.text, self.font_size))
    }

    // --- Copy-with-change builders ---

    #[must_use]
    pub fn with_text(&self, text: &str) -> Self {
        Self { text: text.to_string(), measured_size: None, ..self.clone() }
    }

    #[must_use]
    pub fn with_position(&self, position: Point) -> Self {
        Self { position, ..self.clone() }
    }

    /// Copy with `size` clamped into the allowed font-size range.
    #[must_use]
    pub fn with_font_size(&self, size: u32) -> Self {
        let font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if font_size == self.font_size {
            return self.clone();
        }
        Self { font_size, measured_size: None, ..self.clone() }
    }

    #[must_use]
    pub fn with_larger_font(&self) -> Self {
        self.with_font_size(self.font_size.saturating_add(FONT_SIZE_STEP))
    }

    #[must_use]
    pub fn with_smaller_font(&self) -> Self {
        self.with_font_size(self.font_size.saturating_sub(FONT_SIZE_STEP))
    }

    #[must_use]
    pub fn with_font_family(&self, font_family: FontFamily) -> Self {
        if font_family == self.font_family {
            return self.clone();
        }
        Self { font_family, measured_size: None, ..self.clone() }
    }

    #[must_use]
    pub fn with_bold_toggled(&self) -> Self {
        Self { font_weight: self.font_weight.toggled(), measured_size: None, ..self.clone() }
    }

    #[must_use]
    pub fn with_italic_toggled(&self) -> Self {
        Self { font_style: self.font_style.toggled(), measured_size: None, ..self.clone() }
    }

    #[must_use]
    pub fn with_underline_toggled(&self) -> Self {
        Self { text_decoration: self.text_decoration.toggled(), ..self.clone() }
    }

    #[must_use]
    pub fn with_measured_size(&self, size: Size) -> Self {
        Self { measured_size: Some(size), ..self.clone() }
    }
}
