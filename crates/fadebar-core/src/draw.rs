//! Draw commands and the canvas abstraction.
//!
//! All rendering reduces to these primitives.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::text::TextStyle;
use serde::{Deserialize, Serialize};

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A filled rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill color
        color: Color,
    },
    /// A run of text
    Text {
        /// Text content
        content: String,
        /// Top-left position
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Create a filled rectangle command.
    #[must_use]
    pub const fn rect(bounds: Rect, color: Color) -> Self {
        Self::Rect { bounds, color }
    }

    /// Create a text command.
    #[must_use]
    pub fn text(content: impl Into<String>, position: Point, style: TextStyle) -> Self {
        Self::Text {
            content: content.into(),
            position,
            style,
        }
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Remove everything previously painted.
    fn clear(&mut self);

    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw text.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_command() {
        let cmd = DrawCommand::rect(Rect::new(0.0, 0.0, 10.0, 5.0), Color::WHITE);
        match cmd {
            DrawCommand::Rect { bounds, color } => {
                assert_eq!(bounds.width, 10.0);
                assert_eq!(color, Color::WHITE);
            }
            DrawCommand::Text { .. } => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_text_command() {
        let cmd = DrawCommand::text("hi", Point::new(1.0, 2.0), TextStyle::default());
        match cmd {
            DrawCommand::Text {
                content, position, ..
            } => {
                assert_eq!(content, "hi");
                assert_eq!(position, Point::new(1.0, 2.0));
            }
            DrawCommand::Rect { .. } => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_command_serde_roundtrip() {
        let commands = vec![
            DrawCommand::rect(Rect::new(0.0, 40.0, 120.0, 40.0), Color::rgb(0.2, 0.4, 0.8)),
            DrawCommand::text("Read", Point::new(30.0, 50.0), TextStyle::default()),
        ];
        let json = serde_json::to_string(&commands).expect("serialize");
        let back: Vec<DrawCommand> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(commands, back);
    }
}
