//! Theming: light/dark foreground and the default accent.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Accent color used when the host supplies none.
pub const DEFAULT_ACCENT: Color = Color {
    r: 0.2,
    g: 0.47,
    b: 0.96,
    a: 1.0,
};

/// Interface theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    /// Light background, dark text
    #[default]
    Light,
    /// Dark background, light text
    Dark,
}

impl Theme {
    /// Foreground color for text drawn over this theme's background.
    #[must_use]
    pub const fn foreground(self) -> Color {
        match self {
            Self::Light => Color::BLACK,
            Self::Dark => Color::WHITE,
        }
    }
}
