//! The widen-until-fits layout solver.

use crate::entry::{BarEntry, ViewportConstraints};
use crate::error::LayoutError;
use fadebar_core::{Rect, Size, TextMeasurer, TextStyle};
use serde::{Deserialize, Serialize};

/// Scale factor every pass starts from.
pub const INITIAL_FACTOR: f64 = 3.0;

/// Amount the scale factor grows by between passes.
pub const FACTOR_STEP: f64 = 0.2;

/// Extra width added to each measured title and value label.
pub const LABEL_PADDING: f32 = 15.0;

/// Font size titles and value labels are measured (and drawn) at.
pub const LABEL_FONT_SIZE: f32 = 22.0;

/// Hard stop on the number of layout passes.
///
/// The label-only precheck already rejects entries no factor can fit, so
/// this bound is only reached for value magnitudes that would need a factor
/// beyond `INITIAL_FACTOR + MAX_PASSES * FACTOR_STEP`.
pub const MAX_PASSES: u32 = 1024;

/// What a positioned primitive draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// The entry's title text
    Title,
    /// The bar rectangle
    Bar,
    /// The entry's value text
    Value,
}

/// An atomic positioned drawable unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// What this primitive draws
    pub kind: PrimitiveKind,
    /// Position and size within the content area
    pub frame: Rect,
    /// Index of the entry this primitive belongs to
    pub entry: usize,
}

/// A converged layout: positioned primitives under one shared scale factor.
///
/// Produced fresh on every change to the entry list; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    /// Primitives in input order: title, bar, value per entry
    pub primitives: Vec<Primitive>,
    /// The shared scale factor the layout converged on
    pub factor: f64,
    /// Scrollable content size (viewport width, total content height)
    pub content_size: Size,
    /// Number of layout passes it took to converge
    pub passes: u32,
    /// Number of entries laid out
    pub entry_count: usize,
}

impl ChartLayout {
    /// Check if the layout holds no primitives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Total scrollable content height.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.content_size.height
    }

    /// Primitives belonging to one entry, in title/bar/value order.
    pub fn entry_primitives(&self, entry: usize) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.entry == entry)
    }
}

/// Measured label extents for one entry, padding included.
#[derive(Debug, Clone, Copy)]
struct EntryLabels {
    title: Size,
    value: Size,
}

/// Compute a layout where every entry's title, bar, and value label fit the
/// viewport width under one shared scale factor.
///
/// The factor starts at [`INITIAL_FACTOR`]; whenever any entry's combined
/// width overflows the viewport, the whole pass is discarded, the factor
/// grows by [`FACTOR_STEP`], and layout restarts from the first entry. The
/// factor is shared, so one oversized entry invalidates the pass; worst-case
/// cost is quadratic in entry count, which is fine at the list sizes charts
/// show.
///
/// # Errors
///
/// - [`LayoutError::InvalidEntry`] if a value is NaN or infinite.
/// - [`LayoutError::Overflow`] if an entry's labels alone exceed the viewport
///   width, or [`MAX_PASSES`] is reached before the factor catches up.
pub fn compute_layout(
    entries: &[BarEntry],
    constraints: &ViewportConstraints,
    measurer: &dyn TextMeasurer,
) -> Result<ChartLayout, LayoutError> {
    for (index, entry) in entries.iter().enumerate() {
        if !entry.value.is_finite() {
            return Err(LayoutError::InvalidEntry {
                entry: index,
                value: entry.value,
            });
        }
    }

    if entries.is_empty() {
        return Ok(ChartLayout {
            primitives: Vec::new(),
            factor: INITIAL_FACTOR,
            content_size: Size::new(constraints.width, 0.0),
            passes: 0,
            entry_count: 0,
        });
    }

    let style = TextStyle {
        size: LABEL_FONT_SIZE,
        ..TextStyle::default()
    };

    // Labels keep their width no matter how far the factor grows; an entry
    // whose labels alone overflow can never fit.
    let labels: Vec<EntryLabels> = entries
        .iter()
        .map(|entry| {
            let title = measurer.measure(&entry.title, &style);
            let value = measurer.measure(&entry.value_label(), &style);
            EntryLabels {
                title: Size::new(title.width + LABEL_PADDING, title.height),
                value: Size::new(value.width + LABEL_PADDING, value.height),
            }
        })
        .collect();

    for (index, label) in labels.iter().enumerate() {
        let required = 4.0 * constraints.horizontal_padding + label.title.width + label.value.width;
        if required > constraints.width {
            return Err(LayoutError::Overflow {
                entry: index,
                required,
                available: constraints.width,
            });
        }
    }

    let mut factor = INITIAL_FACTOR;
    let mut passes = 0u32;
    let mut primitives = Vec::with_capacity(entries.len() * 3);

    loop {
        passes += 1;
        primitives.clear();

        match run_pass(entries, &labels, constraints, factor, &mut primitives) {
            Ok(()) => break,
            Err((entry, required)) => {
                if passes >= MAX_PASSES {
                    return Err(LayoutError::Overflow {
                        entry,
                        required,
                        available: constraints.width,
                    });
                }
                factor += FACTOR_STEP;
            }
        }
    }

    Ok(ChartLayout {
        primitives,
        factor,
        content_size: Size::new(constraints.width, constraints.content_height(entries.len())),
        passes,
        entry_count: entries.len(),
    })
}

/// Attempt one full pass under `factor`, committing primitives in entry
/// order. Returns the overflowing entry's index and required width if any
/// entry does not fit; the caller discards the pass.
fn run_pass(
    entries: &[BarEntry],
    labels: &[EntryLabels],
    constraints: &ViewportConstraints,
    factor: f64,
    out: &mut Vec<Primitive>,
) -> Result<(), (usize, f32)> {
    let hpad = constraints.horizontal_padding;
    // Bars are scaled against the viewport minus spacing so they grow with
    // larger viewports, independent of label widths.
    let bar_scale = (constraints.width - constraints.inter_entry_spacing).max(0.0);

    for (index, entry) in entries.iter().enumerate() {
        let label = labels[index];
        let bar_width = ((entry.value / factor).abs() as f32) * bar_scale;

        let total = hpad
            + label.title.width
            + hpad
            + bar_width
            + hpad
            + (hpad + label.value.width);
        if total > constraints.width {
            return Err((index, total));
        }

        let row_y = constraints.inter_entry_spacing
            + index as f32 * (constraints.bar_thickness + constraints.inter_entry_spacing);
        let text_y = row_y + constraints.bar_thickness / 4.0;
        let bar_x = hpad + label.title.width + hpad;

        out.push(Primitive {
            kind: PrimitiveKind::Title,
            frame: Rect::new(hpad, text_y, label.title.width, label.title.height),
            entry: index,
        });
        out.push(Primitive {
            kind: PrimitiveKind::Bar,
            frame: Rect::new(bar_x, row_y, bar_width, constraints.bar_thickness),
            entry: index,
        });
        out.push(Primitive {
            kind: PrimitiveKind::Value,
            frame: Rect::new(
                bar_x + bar_width,
                text_y,
                label.value.width,
                label.value.height,
            ),
            entry: index,
        });
    }

    Ok(())
}
