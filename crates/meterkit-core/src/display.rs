//! Display density and unit conversion.

use serde::{Deserialize, Serialize};

/// Pixel density of the surface a widget renders to.
///
/// `density` scales density-independent units (dp) and `scaled_density`
/// scales text units (sp), which additionally track the user's font scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// Pixels per dp.
    pub density: f32,
    /// Pixels per sp.
    pub scaled_density: f32,
}

impl DisplayMetrics {
    /// Baseline density: one dp and one sp are one pixel each.
    pub const BASELINE: Self = Self {
        density: 1.0,
        scaled_density: 1.0,
    };

    /// Create metrics with the given densities.
    #[must_use]
    pub const fn new(density: f32, scaled_density: f32) -> Self {
        Self {
            density,
            scaled_density,
        }
    }

    /// Convert dp to pixels, rounding half up the way layout code does.
    ///
    /// The `+ 0.5` bias is applied before any truncation a caller does, so
    /// `dp_to_px(-20.0)` at density 1 is `-19.5`.
    #[must_use]
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.density + 0.5
    }

    /// Convert sp to pixels.
    #[must_use]
    pub fn sp_to_px(&self, sp: f32) -> f32 {
        sp * self.scaled_density
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::BASELINE
    }
}
