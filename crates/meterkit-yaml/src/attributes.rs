//! Style attributes for the progress indicator.
//!
//! Colors are written as hex strings and sizes as dimensions with a unit
//! suffix:
//!
//! ```yaml
//! progress_color: "#000064"
//! progress_back_color: "#006464"
//! progress_text_color: "#5064c8"
//! progress_text_size: 10sp
//! progress_bar_height: 10dp
//! ```
//!
//! Every attribute is optional; the widget supplies the defaults.

use crate::error::ParseError;
use meterkit_core::{Color, DisplayMetrics};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of a [`Dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DimensionUnit {
    /// Physical pixels
    #[default]
    Px,
    /// Density-independent pixels
    Dp,
    /// Scale-independent pixels (text)
    Sp,
}

impl DimensionUnit {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Dp => "dp",
            Self::Sp => "sp",
        }
    }
}

/// A length with a unit, e.g. `10dp`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDimension", into = "String")]
pub struct Dimension {
    /// Magnitude
    pub value: f32,
    /// Unit the magnitude is expressed in
    pub unit: DimensionUnit,
}

impl Dimension {
    /// Create a dimension.
    #[must_use]
    pub const fn new(value: f32, unit: DimensionUnit) -> Self {
        Self { value, unit }
    }

    /// Dimension in density-independent pixels.
    #[must_use]
    pub const fn dp(value: f32) -> Self {
        Self::new(value, DimensionUnit::Dp)
    }

    /// Dimension in scale-independent pixels.
    #[must_use]
    pub const fn sp(value: f32) -> Self {
        Self::new(value, DimensionUnit::Sp)
    }

    /// Dimension in physical pixels.
    #[must_use]
    pub const fn px(value: f32) -> Self {
        Self::new(value, DimensionUnit::Px)
    }

    /// Resolve to physical pixels.
    ///
    /// Unlike [`DisplayMetrics::dp_to_px`] this applies no rounding bias:
    /// a configured `10dp` at density 2 is exactly 20 px.
    #[must_use]
    pub fn to_px(&self, metrics: &DisplayMetrics) -> f32 {
        match self.unit {
            DimensionUnit::Px => self.value,
            DimensionUnit::Dp => self.value * metrics.density,
            DimensionUnit::Sp => self.value * metrics.scaled_density,
        }
    }
}

impl FromStr for Dimension {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ParseError::InvalidDimension {
            value: s.to_string(),
        };

        let (number, unit) = [DimensionUnit::Dp, DimensionUnit::Sp, DimensionUnit::Px]
            .into_iter()
            .find_map(|unit| {
                trimmed
                    .strip_suffix(unit.suffix())
                    .map(|number| (number.trim_end(), unit))
            })
            .unwrap_or((trimmed, DimensionUnit::Px));

        let value: f32 = number.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(Self::new(value, unit))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl From<Dimension> for String {
    fn from(d: Dimension) -> Self {
        d.to_string()
    }
}

/// Dimensions may be written bare (`12`, meaning px) or with a suffix.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDimension {
    Number(f32),
    Text(String),
}

impl TryFrom<RawDimension> for Dimension {
    type Error = ParseError;

    fn try_from(raw: RawDimension) -> Result<Self, Self::Error> {
        match raw {
            RawDimension::Number(value) => Ok(Self::px(value)),
            RawDimension::Text(text) => text.parse(),
        }
    }
}

/// A color written as `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub Color);

impl TryFrom<String> for HexColor {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
            .map(Self)
            .map_err(|source| ParseError::InvalidColor { value, source })
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        let [_, _, _, a] = c.0.to_rgba8();
        if a == u8::MAX {
            c.0.to_hex()
        } else {
            format!("{}{a:02x}", c.0.to_hex())
        }
    }
}

impl From<HexColor> for Color {
    fn from(c: HexColor) -> Self {
        c.0
    }
}

/// Declarative style attributes of one progress indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorAttributes {
    /// Fill color of the completed part of the bar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_color: Option<HexColor>,
    /// Color of the remaining part of the bar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_back_color: Option<HexColor>,
    /// Color of the percentage label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_text_color: Option<HexColor>,
    /// Size of the percentage label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_text_size: Option<Dimension>,
    /// Thickness of the bar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_bar_height: Option<Dimension>,
}

impl IndicatorAttributes {
    /// Parse attributes from a YAML mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid, names an unknown attribute,
    /// or a value does not parse.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }
}
