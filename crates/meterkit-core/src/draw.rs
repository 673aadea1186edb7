//! Draw commands.
//!
//! Every paint reduces to these primitives, which makes a frame easy to
//! record, inspect and serialize.

use crate::widget::TextStyle;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Box style for rectangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color
    pub fill: Color,
}

impl BoxStyle {
    /// Create a solid box.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self { fill: color }
    }
}

/// Drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Box style
        style: BoxStyle,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Baseline origin
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            style: BoxStyle::fill(color),
        }
    }

    /// Bounds of a rectangle command.
    #[must_use]
    pub const fn rect_bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect { bounds, .. } => Some(*bounds),
            Self::Text { .. } => None,
        }
    }

    /// Content of a text command.
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            Self::Rect { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_style_fill() {
        assert_eq!(BoxStyle::fill(Color::WHITE).fill, Color::WHITE);
    }

    #[test]
    fn test_filled_rect_accessors() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 5.0);
        let cmd = DrawCommand::filled_rect(bounds, Color::BLACK);
        assert_eq!(cmd.rect_bounds(), Some(bounds));
        assert_eq!(cmd.text_content(), None);
    }

    #[test]
    fn test_text_accessors() {
        let cmd = DrawCommand::Text {
            content: "42%".to_string(),
            position: Point::ORIGIN,
            style: TextStyle::default(),
        };
        assert_eq!(cmd.text_content(), Some("42%"));
        assert_eq!(cmd.rect_bounds(), None);
    }

    #[test]
    fn test_draw_command_serializes() {
        let cmd = DrawCommand::filled_rect(Rect::new(1.0, 2.0, 3.0, 4.0), Color::WHITE);
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.starts_with("{\"Rect\""));
        let back: DrawCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
