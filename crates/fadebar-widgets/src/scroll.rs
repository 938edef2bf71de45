//! Scrollable content sizing.

use fadebar_core::Size;
use serde::{Deserialize, Serialize};

/// Content extent of a vertically scrollable container.
///
/// The widget owns this; the host reads it to size whatever actually
/// scrolls. Content size is replaced wholesale on every presentation, never
/// adjusted incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollContent {
    content: Size,
}

impl ScrollContent {
    /// Create an empty scroll extent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content size.
    pub fn set_content(&mut self, size: Size) {
        self.content = size;
    }

    /// Current content size.
    #[must_use]
    pub fn content(&self) -> Size {
        self.content
    }

    /// Whether the content overflows a visible area and needs scrolling.
    #[must_use]
    pub fn overflows(&self, visible: Size) -> bool {
        self.content.height > visible.height
    }
}
