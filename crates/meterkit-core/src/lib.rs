//! Core types and traits for meterkit.
//!
//! This crate provides foundational types used throughout meterkit:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Padding`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`] and per-axis [`MeasureMode`]
//! - The [`Widget`] and [`Canvas`] traits, plus a [`RecordingCanvas`]
//! - Density conversion: [`DisplayMetrics`]
//! - Host-driven timers: [`Timer`], [`CountdownTimer`]

mod canvas;
mod color;
mod constraints;
mod display;
pub mod draw;
mod geometry;
mod timer;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::{Constraints, MeasureMode};
pub use display::DisplayMetrics;
pub use draw::{BoxStyle, DrawCommand};
pub use geometry::{Padding, Point, Rect, Size};
pub use timer::{CountdownTimer, Timer, TimerEvent, TimerState};
pub use widget::{
    AccessibleRole, Canvas, FontMetrics, FontStyle, LayoutResult, TextStyle, TypeId,
    Widget,
};
