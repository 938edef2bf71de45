//! Chart entries and viewport constraints.

use serde::{Deserialize, Serialize};

/// One labeled numeric data point to render as a bar.
///
/// Entries are immutable once handed to the engine; changing the data means
/// computing a fresh layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarEntry {
    /// Title shown left of the bar
    pub title: String,
    /// Value the bar length is proportional to
    pub value: f64,
}

impl BarEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(title: impl Into<String>, value: f64) -> Self {
        Self {
            title: title.into(),
            value,
        }
    }

    /// The text drawn (and measured) as this entry's value label.
    ///
    /// Whole values print without a fractional part: `5.0` becomes `"5"`.
    #[must_use]
    pub fn value_label(&self) -> String {
        self.value.to_string()
    }
}

/// Fixed geometry of one layout pass.
///
/// Defaults carry the proportions the chart was designed around: 40-unit
/// bars and spacing, 30-unit paddings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConstraints {
    /// Available width for one entry's title, bar, value label, and paddings
    pub width: f32,
    /// Height of each bar
    pub bar_thickness: f32,
    /// Vertical space between entries
    pub inter_entry_spacing: f32,
    /// Horizontal padding between the title block, bar, and value label
    pub horizontal_padding: f32,
    /// Space above the first entry
    pub content_top_padding: f32,
}

impl ViewportConstraints {
    /// Create constraints for the given viewport width with default spacing.
    #[must_use]
    pub const fn new(width: f32) -> Self {
        Self {
            width,
            bar_thickness: 40.0,
            inter_entry_spacing: 40.0,
            horizontal_padding: 30.0,
            content_top_padding: 30.0,
        }
    }

    /// Set the bar thickness.
    #[must_use]
    pub const fn bar_thickness(mut self, thickness: f32) -> Self {
        self.bar_thickness = thickness;
        self
    }

    /// Set the vertical space between entries.
    #[must_use]
    pub const fn inter_entry_spacing(mut self, spacing: f32) -> Self {
        self.inter_entry_spacing = spacing;
        self
    }

    /// Set the horizontal padding between blocks.
    #[must_use]
    pub const fn horizontal_padding(mut self, padding: f32) -> Self {
        self.horizontal_padding = padding;
        self
    }

    /// Set the space above the first entry.
    #[must_use]
    pub const fn content_top_padding(mut self, padding: f32) -> Self {
        self.content_top_padding = padding;
        self
    }

    /// Total scrollable content height for `entry_count` entries.
    #[must_use]
    pub fn content_height(&self, entry_count: usize) -> f32 {
        if entry_count == 0 {
            return 0.0;
        }
        (self.bar_thickness + self.inter_entry_spacing) * entry_count as f32
            + self.content_top_padding
    }
}
