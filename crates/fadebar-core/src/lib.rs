//! Core types for the Fadebar chart toolkit.
//!
//! This crate provides the foundational types the layout and widget crates
//! build on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with hue/saturation/brightness shading
//! - Text styling and measurement: [`TextStyle`], [`TextMeasurer`], [`FontMetrics`]
//! - Draw commands and canvases: [`DrawCommand`], [`Canvas`], [`RecordingCanvas`]
//! - Appearance animation: [`Easing`], [`FadeIn`]
//! - Theming: [`Theme`]

mod animation;
mod canvas;
mod color;
mod draw;
mod geometry;
mod text;
mod theme;

pub use animation::{Easing, FadeIn};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use draw::{Canvas, DrawCommand};
pub use geometry::{Point, Rect, Size};
pub use text::{FontMetrics, FontWeight, TextMeasurer, TextStyle};
pub use theme::{Theme, DEFAULT_ACCENT};
