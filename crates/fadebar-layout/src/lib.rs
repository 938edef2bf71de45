//! Fit-to-viewport layout engine for Fadebar bar charts.
//!
//! [`compute_layout`] turns an ordered list of [`BarEntry`] values and a set
//! of [`ViewportConstraints`] into positioned drawable primitives. A single
//! scale factor is shared by every bar; the engine widens it in fixed steps
//! until each entry's title, bar, and value label fit the viewport width, or
//! reports [`LayoutError::Overflow`] when no factor can help.
//!
//! The engine is pure: no rendering, no shared state, identical inputs yield
//! identical layouts.

mod engine;
mod entry;
mod error;

pub use engine::{
    compute_layout, ChartLayout, Primitive, PrimitiveKind, FACTOR_STEP, INITIAL_FACTOR,
    LABEL_FONT_SIZE, LABEL_PADDING, MAX_PASSES,
};
pub use entry::{BarEntry, ViewportConstraints};
pub use error::LayoutError;
