//! YAML configuration for meterkit screens.

mod attributes;
mod error;
mod manifest;

pub use attributes::{Dimension, DimensionUnit, HexColor, IndicatorAttributes};
pub use error::ParseError;
pub use manifest::{AnimationConfig, DisplayConfig, PaddingConfig, ScreenManifest};
