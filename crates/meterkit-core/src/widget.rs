//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Accept the bounds the parent allocated
//! 3. **Paint**: Generate draw commands for rendering
//!
//! # Examples
//!
//! ```
//! use meterkit_core::{Canvas, Constraints, MeasureMode, RecordingCanvas, TextStyle};
//!
//! let canvas = RecordingCanvas::new();
//! let style = TextStyle { size: 10.0, ..TextStyle::default() };
//!
//! // Default metrics approximate a glyph advance of 0.6 em.
//! assert_eq!(canvas.measure_text("50%", &style), 18.0);
//! assert!(canvas.font_metrics(&style).ascent < 0.0);
//!
//! let constraints = Constraints::unbounded();
//! assert_eq!(constraints.width_mode(), MeasureMode::Unspecified);
//! ```

use crate::constraints::Constraints;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
///
/// # Lifecycle
///
/// 1. `measure`: Compute intrinsic size given constraints
/// 2. `layout`: Position self within allocated bounds
/// 3. `paint`: Generate draw commands
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position the widget within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Check if this widget is interactive (can receive focus/events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend. Text
/// measurement lives here too, since only the backend knows its fonts.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw text with its baseline starting at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Advance width of `text` in `style`.
    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        text.chars().count() as f32 * style.size * FontMetrics::APPROX_ADVANCE
    }

    /// Vertical metrics of the font selected by `style`.
    fn font_metrics(&self, style: &TextStyle) -> FontMetrics {
        FontMetrics::approximate(style.size)
    }
}

/// Vertical font metrics relative to the baseline.
///
/// `ascent` is negative (above the baseline) and `descent` positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Distance from baseline to the top of tall glyphs (negative).
    pub ascent: f32,
    /// Distance from baseline to the bottom of descenders (positive).
    pub descent: f32,
}

impl FontMetrics {
    /// Approximate advance width of one glyph, in em.
    pub const APPROX_ADVANCE: f32 = 0.6;

    /// Metrics for a generic sans-serif face at `size` pixels.
    #[must_use]
    pub fn approximate(size: f32) -> Self {
        Self {
            ascent: -0.8 * size,
            descent: 0.2 * size,
        }
    }

    /// Total line height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.descent - self.ascent
    }
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font style
    pub style: FontStyle,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            style: FontStyle::Normal,
        }
    }
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontStyle {
    /// Normal style
    Normal,
    /// Italic style
    Italic,
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Static text
    Text,
    /// Progress bar
    ProgressBar,
}
