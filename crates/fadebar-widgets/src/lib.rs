//! Widget implementations for the Fadebar chart toolkit.
//!
//! [`BarChart`] consumes layouts from `fadebar-layout` and materializes them
//! as draw commands with paint styling, scrollable content sizing, and a
//! staggered fade-in schedule.

mod bar_chart;
mod scroll;

pub use bar_chart::{BarChart, ChartStyle, BAR_SHADE, FADE_DURATION, FADE_STAGGER};
pub use scroll::ScrollContent;
