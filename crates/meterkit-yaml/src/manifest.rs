//! Screen manifest: everything a host needs to build the progress screen.
//!
//! ```yaml
//! indicator:
//!   progress_color: "#000064"
//!   progress_bar_height: 10dp
//! padding:
//!   left: 16
//!   right: 16
//! display:
//!   density: 2.0
//!   scaled_density: 2.0
//! animation:
//!   period_ms: 100
//!   span_ms: 10000
//!   initial_progress: 50
//!   threshold: 80
//!   step: 1
//! ```

use crate::attributes::IndicatorAttributes;
use crate::error::ParseError;
use meterkit_core::{DisplayMetrics, Padding};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root of a screen manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenManifest {
    /// Style attributes of the indicator
    pub indicator: IndicatorAttributes,
    /// Padding around the indicator's content, in pixels
    pub padding: PaddingConfig,
    /// Density of the target display
    pub display: DisplayConfig,
    /// Timer-driven animation settings
    pub animation: AnimationConfig,
}

/// Padding in pixels; missing sides are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaddingConfig {
    /// Left padding
    pub left: f32,
    /// Top padding
    pub top: f32,
    /// Right padding
    pub right: f32,
    /// Bottom padding
    pub bottom: f32,
}

impl From<PaddingConfig> for Padding {
    fn from(p: PaddingConfig) -> Self {
        Self::new(p.left, p.top, p.right, p.bottom)
    }
}

/// Display densities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Pixels per dp
    pub density: f32,
    /// Pixels per sp
    pub scaled_density: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let baseline = DisplayMetrics::BASELINE;
        Self {
            density: baseline.density,
            scaled_density: baseline.scaled_density,
        }
    }
}

impl From<DisplayConfig> for DisplayMetrics {
    fn from(d: DisplayConfig) -> Self {
        Self::new(d.density, d.scaled_density)
    }
}

/// Animation driver settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Time between ticks
    pub period_ms: u64,
    /// Total lifetime of the timer
    pub span_ms: u64,
    /// Progress set before the timer starts
    pub initial_progress: i32,
    /// Progress at which the driver stops itself
    pub threshold: i32,
    /// Increment applied on every tick
    pub step: i32,
}

impl AnimationConfig {
    /// Upper bound on [`tick_count`](Self::tick_count) accepted by validation.
    pub const MAX_TICKS: u64 = 100_000;

    /// Number of ticks the timer delivers over its whole span.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        if self.period_ms == 0 {
            return 0;
        }
        self.span_ms.div_ceil(self.period_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            period_ms: 100,
            span_ms: 10_000,
            initial_progress: 50,
            threshold: 80,
            step: 1,
        }
    }
}

impl ScreenManifest {
    /// Parse and validate a manifest from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or a value is out of range.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let manifest: Self = serde_yaml_ng::from_str(yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read, parse and validate a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "loaded screen manifest");
        Ok(manifest)
    }

    /// Serialize manifest to YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check value ranges that the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ParseError> {
        let display = &self.display;
        if !(display.density.is_finite() && display.density > 0.0) {
            return Err(ParseError::invalid_value("display.density", "must be positive"));
        }
        if !(display.scaled_density.is_finite() && display.scaled_density > 0.0) {
            return Err(ParseError::invalid_value(
                "display.scaled_density",
                "must be positive",
            ));
        }

        let padding = &self.padding;
        for (field, value) in [
            ("padding.left", padding.left),
            ("padding.top", padding.top),
            ("padding.right", padding.right),
            ("padding.bottom", padding.bottom),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ParseError::invalid_value(field, "must be non-negative"));
            }
        }

        let animation = &self.animation;
        if animation.period_ms == 0 {
            return Err(ParseError::invalid_value("animation.period_ms", "must be positive"));
        }
        if animation.tick_count() > AnimationConfig::MAX_TICKS {
            return Err(ParseError::invalid_value(
                "animation.span_ms",
                format!("must not exceed {} periods", AnimationConfig::MAX_TICKS),
            ));
        }
        for (field, value) in [
            ("animation.initial_progress", animation.initial_progress),
            ("animation.threshold", animation.threshold),
        ] {
            if !(0..=100).contains(&value) {
                return Err(ParseError::invalid_value(field, "must be within 0..=100"));
            }
        }

        Ok(())
    }
}
