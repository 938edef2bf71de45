//! Fadebar: self-fitting horizontal bar charts with cascading fade-in.
//!
//! Given an ordered list of labeled values and a viewport width, the layout
//! engine searches for a single shared scale factor under which every bar,
//! title, and value label fits without clipping, then the chart widget turns
//! the result into draw commands and a staggered fade-in schedule.
//!
//! # Example
//!
//! ```
//! use fadebar::layout::BarEntry;
//! use fadebar::widgets::BarChart;
//! use fadebar::RecordingCanvas;
//!
//! let mut chart = BarChart::new(400.0);
//! chart
//!     .update(vec![
//!         BarEntry::new("Read", 5.0),
//!         BarEntry::new("Exercise", 12.0),
//!     ])
//!     .expect("entries fit a 400-unit viewport");
//!
//! let mut canvas = RecordingCanvas::new();
//! chart.present(&mut canvas);
//! assert_eq!(canvas.command_count(), 6);
//! ```

pub use fadebar_core::*;
pub use fadebar_layout as layout;
pub use fadebar_widgets as widgets;
