//! Canvas implementations for rendering.

use crate::color::Color;
use crate::draw::{Canvas, DrawCommand};
use crate::geometry::{Point, Rect};
use crate::text::TextStyle;

/// A Canvas implementation that records draw operations as [`DrawCommand`]s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (hand commands to a real backend)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_fill_rect() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(10.0, 20.0, 100.0, 50.0), Color::BLACK);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Rect { bounds, color } => {
                assert_eq!(bounds.x, 10.0);
                assert_eq!(bounds.width, 100.0);
                assert_eq!(*color, Color::BLACK);
            }
            DrawCommand::Text { .. } => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_draw_text() {
        let mut canvas = RecordingCanvas::new();
        let style = TextStyle {
            size: 22.0,
            ..TextStyle::default()
        };
        canvas.draw_text("Hello", Point::new(10.0, 20.0), &style);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Text {
                content,
                position,
                style,
            } => {
                assert_eq!(content, "Hello");
                assert_eq!(*position, Point::new(10.0, 20.0));
                assert_eq!(style.size, 22.0);
            }
            DrawCommand::Rect { .. } => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        assert!(!canvas.is_empty());

        canvas.clear();
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_take_commands() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        canvas.draw_text("x", Point::ORIGIN, &TextStyle::default());

        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 2);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_commands_preserve_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_text("first", Point::ORIGIN, &TextStyle::default());
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        canvas.draw_text("last", Point::ORIGIN, &TextStyle::default());

        assert!(matches!(canvas.commands()[0], DrawCommand::Text { .. }));
        assert!(matches!(canvas.commands()[1], DrawCommand::Rect { .. }));
        match &canvas.commands()[2] {
            DrawCommand::Text { content, .. } => assert_eq!(content, "last"),
            DrawCommand::Rect { .. } => panic!("Expected Text command"),
        }
    }
}
