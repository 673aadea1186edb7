//! Resolved style of a progress indicator.

use meterkit_core::{Color, DisplayMetrics, FontStyle, TextStyle};
use meterkit_yaml::IndicatorAttributes;
use serde::{Deserialize, Serialize};

/// Default fill color, a dark blue.
pub const DEFAULT_PROGRESS_COLOR: [u8; 3] = [0, 0, 100];
/// Default background color, a teal.
pub const DEFAULT_PROGRESS_BACK_COLOR: [u8; 3] = [0, 100, 100];
/// Default label color, a light blue.
pub const DEFAULT_PROGRESS_TEXT_COLOR: [u8; 3] = [80, 100, 200];
/// Default label size, in sp.
pub const DEFAULT_TEXT_SIZE_SP: f32 = 10.0;
/// Default bar thickness, in dp.
pub const DEFAULT_BAR_HEIGHT_DP: f32 = 10.0;
/// Vertical shift of the label baseline relative to the bar, in dp.
pub const LABEL_OFFSET_DP: f32 = -20.0;

/// Pixel-resolved style values, fixed once the widget is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressStyle {
    /// Fill color of the completed part
    pub progress_color: Color,
    /// Color of the remaining part
    pub progress_back_color: Color,
    /// Label color
    pub progress_text_color: Color,
    /// Label font size in pixels
    pub text_size: f32,
    /// Bar thickness in pixels
    pub bar_height: f32,
    /// Offset added to the label baseline in pixels (negative is up)
    pub label_offset: f32,
}

impl ProgressStyle {
    /// Resolve declarative attributes against a display.
    ///
    /// Missing attributes fall back to the defaults above; default
    /// dimensions go through [`DisplayMetrics::dp_to_px`] and
    /// [`DisplayMetrics::sp_to_px`].
    #[must_use]
    pub fn resolve(attributes: &IndicatorAttributes, metrics: &DisplayMetrics) -> Self {
        let color = |attr: Option<meterkit_yaml::HexColor>, [r, g, b]: [u8; 3]| {
            attr.map_or_else(|| Color::from_rgb8(r, g, b), Color::from)
        };

        Self {
            progress_color: color(attributes.progress_color, DEFAULT_PROGRESS_COLOR),
            progress_back_color: color(
                attributes.progress_back_color,
                DEFAULT_PROGRESS_BACK_COLOR,
            ),
            progress_text_color: color(
                attributes.progress_text_color,
                DEFAULT_PROGRESS_TEXT_COLOR,
            ),
            text_size: attributes.progress_text_size.map_or_else(
                || metrics.sp_to_px(DEFAULT_TEXT_SIZE_SP),
                |d| d.to_px(metrics),
            ),
            bar_height: attributes.progress_bar_height.map_or_else(
                || metrics.dp_to_px(DEFAULT_BAR_HEIGHT_DP),
                |d| d.to_px(metrics),
            ),
            label_offset: metrics.dp_to_px(LABEL_OFFSET_DP),
        }
    }

    /// Text style of the percentage label.
    #[must_use]
    pub fn label_style(&self) -> TextStyle {
        TextStyle {
            size: self.text_size,
            color: self.progress_text_color,
            style: FontStyle::Italic,
        }
    }
}

impl Default for ProgressStyle {
    fn default() -> Self {
        Self::resolve(&IndicatorAttributes::default(), &DisplayMetrics::BASELINE)
    }
}
