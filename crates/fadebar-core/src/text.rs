//! Text styling and measurement.

use crate::color::Color;
use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Light (300)
    Light,
    /// Normal (400)
    #[default]
    Normal,
    /// Medium (500)
    Medium,
    /// Bold (700)
    Bold,
}

/// Measures rendered text extents.
///
/// Layout needs the width of titles and value labels before anything is
/// drawn. Hosts with real font metrics implement this trait; [`FontMetrics`]
/// provides the estimate used when none are available.
pub trait TextMeasurer {
    /// Measure the rendered size of `text` under `style`.
    fn measure(&self, text: &str, style: &TextStyle) -> Size;
}

/// Text measurement from simple font-metric estimates.
///
/// Assumes a proportional font where the average glyph advance is
/// `char_width_em` of the font size and a line occupies `line_height` of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Average glyph advance as a fraction of the font size
    pub char_width_em: f32,
    /// Line height as a fraction of the font size
    pub line_height: f32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            char_width_em: 0.6,
            line_height: 1.2,
        }
    }
}

impl FontMetrics {
    /// Create metrics with the default estimates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextMeasurer for FontMetrics {
    fn measure(&self, text: &str, style: &TextStyle) -> Size {
        let height = style.size * self.line_height;
        if text.is_empty() {
            return Size::new(0.0, height);
        }
        let width = text.chars().count() as f32 * style.size * self.char_width_em;
        Size::new(width, height)
    }
}
