//! meterkit: a progress indicator widget animated by a timer.
//!
//! # Example
//!
//! ```
//! use meterkit::{DisplayMetrics, ProgressScreen, Rect, RecordingCanvas, ScreenManifest};
//!
//! let mut screen = ProgressScreen::on_create(&ScreenManifest::default(), &DisplayMetrics::BASELINE);
//! screen.advance(10_000);
//! assert_eq!(screen.indicator().progress(), 80);
//!
//! let mut canvas = RecordingCanvas::new();
//! screen.render(&mut canvas, Rect::new(0.0, 0.0, 320.0, 48.0));
//! assert_eq!(canvas.command_count(), 3);
//! ```

pub use meterkit_core::*;
pub use meterkit_widgets as widgets;
pub use meterkit_yaml as yaml;

pub mod driver;
pub mod screen;

pub use driver::{AnimationDriver, DriverState};
pub use meterkit_widgets::{Progress, ProgressIndicator, ProgressListener, ProgressStyle};
pub use meterkit_yaml::{AnimationConfig, ParseError, ScreenManifest};
pub use screen::{ProgressScreen, SnapToMax};
