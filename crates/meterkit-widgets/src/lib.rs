//! Widgets for meterkit.
//!
//! Currently a single widget, the [`ProgressIndicator`]: a horizontal bar
//! with a filled part, a background part and a percentage label.

pub mod progress_indicator;
pub mod style;

pub use progress_indicator::{Progress, ProgressGeometry, ProgressIndicator, ProgressListener};
pub use style::ProgressStyle;
