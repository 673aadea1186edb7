//! Layout constraints for widgets.
//!
//! A parent hands each child a [`Constraints`] box. Widgets that size
//! themselves one axis at a time read it through [`MeasureMode`], which
//! collapses an axis into "exactly this", "at most this" or "anything".

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
///
/// Each axis also records whether the parent asked for an exact extent.
/// Equal bounds alone are not enough: `loose` with a zero axis is still an
/// upper bound of zero, not an exact zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
    #[serde(default)]
    exact_width: bool,
    #[serde(default)]
    exact_height: bool,
}

/// How one axis of a [`Constraints`] box constrains a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MeasureMode {
    /// The parent dictates this exact extent.
    Exactly(f32),
    /// The child may be as large as it likes up to this extent.
    AtMost(f32),
    /// No constraint on this axis.
    Unspecified,
}

impl MeasureMode {
    fn from_axis(exact: bool, max: f32) -> Self {
        if !max.is_finite() {
            Self::Unspecified
        } else if exact {
            Self::Exactly(max)
        } else {
            Self::AtMost(max)
        }
    }
}

impl Constraints {
    /// Create new constraints.
    ///
    /// An axis whose bounds are equal is treated as exact.
    #[must_use]
    pub fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
            exact_width: min_width == max_width,
            exact_height: min_height == max_height,
        }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub fn loose(size: Size) -> Self {
        Self {
            exact_width: false,
            exact_height: false,
            ..Self::new(0.0, size.width, 0.0, size.height)
        }
    }

    /// Create unbounded constraints.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Measure mode of the horizontal axis.
    #[must_use]
    pub fn width_mode(&self) -> MeasureMode {
        MeasureMode::from_axis(self.exact_width, self.max_width)
    }

    /// Measure mode of the vertical axis.
    #[must_use]
    pub fn height_mode(&self) -> MeasureMode {
        MeasureMode::from_axis(self.exact_height, self.max_height)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}
