//! Progress indicator widget.
//!
//! A horizontal bar split into a filled part and a background part, with a
//! `NN%` label that rides along the fill's leading edge.
//!
//! Out-of-range values are ignored rather than clamped: `set_progress(120)`
//! leaves the previous value in place and raises no error.

use crate::style::ProgressStyle;
use meterkit_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, DisplayMetrics, MeasureMode, Padding, Point, Rect, Size, TypeId, Widget,
};
use meterkit_yaml::IndicatorAttributes;
use std::fmt;

/// The bounded value shown by a [`ProgressIndicator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    value: i32,
    redraw_requested: bool,
}

impl Progress {
    /// Smallest accepted value.
    pub const MIN: i32 = 0;
    /// Largest accepted value.
    pub const MAX: i32 = 100;

    /// Current value.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.value
    }

    /// Store `value` if it lies in `MIN..=MAX`; otherwise do nothing.
    pub fn set(&mut self, value: i32) {
        if (Self::MIN..=Self::MAX).contains(&value) {
            self.value = value;
            self.redraw_requested = true;
        } else {
            tracing::trace!(value, "ignoring out-of-range progress");
        }
    }

    /// Whether a change is waiting to be painted.
    #[must_use]
    pub const fn is_redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Clear and return the pending redraw flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

/// Receives a notification every time progress is incremented.
///
/// The listener gets mutable access to the widget's [`Progress`] so it can
/// react (for example by snapping the value) without holding a reference
/// back to the widget.
pub trait ProgressListener: Send + Sync {
    /// Called with the progress after the increment and the maximum.
    fn on_progress_update(&mut self, progress: &mut Progress, current: i32, max: i32);
}

impl<F> ProgressListener for F
where
    F: FnMut(&mut Progress, i32, i32) + Send + Sync,
{
    fn on_progress_update(&mut self, progress: &mut Progress, current: i32, max: i32) {
        self(progress, current, max);
    }
}

/// Geometry of one frame, in coordinates local to the widget's bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressGeometry {
    /// Completed part of the bar; absent at 0%
    pub fill: Option<Rect>,
    /// Remaining part of the bar
    pub back: Rect,
    /// Label text, e.g. `42%`
    pub label: String,
    /// Baseline origin of the label
    pub label_origin: Point,
    /// Measured width of the label
    pub label_width: f32,
}

/// Progress indicator widget.
pub struct ProgressIndicator {
    progress: Progress,
    style: ProgressStyle,
    padding: Padding,
    listener: Option<Box<dyn ProgressListener>>,
    accessible_name_value: Option<String>,
    test_id_value: Option<String>,
    bounds: Rect,
}

impl fmt::Debug for ProgressIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressIndicator")
            .field("progress", &self.progress)
            .field("style", &self.style)
            .field("padding", &self.padding)
            .field("has_listener", &self.listener.is_some())
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Default for ProgressIndicator {
    fn default() -> Self {
        Self::new(ProgressStyle::default())
    }
}

impl ProgressIndicator {
    /// Create an indicator at 0% with a fixed style.
    #[must_use]
    pub fn new(style: ProgressStyle) -> Self {
        Self {
            progress: Progress::default(),
            style,
            padding: Padding::ZERO,
            listener: None,
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Create an indicator from declarative attributes resolved for `metrics`.
    #[must_use]
    pub fn from_attributes(attributes: &IndicatorAttributes, metrics: &DisplayMetrics) -> Self {
        Self::new(ProgressStyle::resolve(attributes, metrics))
    }

    /// Set the padding.
    #[must_use]
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set the progress if it lies in `0..=100`; otherwise do nothing.
    ///
    /// Does not notify the listener.
    pub fn set_progress(&mut self, value: i32) {
        self.progress.set(value);
    }

    /// Get the current progress.
    #[must_use]
    pub const fn progress(&self) -> i32 {
        self.progress.get()
    }

    /// Add `delta` to the progress, then notify the listener.
    ///
    /// A non-positive `delta`, or one that would pass 100, leaves the value
    /// unchanged. The listener is notified either way, with whatever the
    /// value is afterwards.
    pub fn increment_progress(&mut self, delta: i32) {
        if delta > 0 {
            self.progress
                .set(self.progress.get().saturating_add(delta));
        } else {
            tracing::trace!(delta, "ignoring non-positive increment");
        }

        let current = self.progress.get();
        if let Some(listener) = self.listener.as_mut() {
            listener.on_progress_update(&mut self.progress, current, Progress::MAX);
        }
    }

    /// Register the listener, replacing any previous one.
    pub fn set_on_progress_listener(&mut self, listener: impl ProgressListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the listener.
    pub fn clear_on_progress_listener(&mut self) {
        self.listener = None;
    }

    /// Check if a listener is registered.
    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Whether the progress changed since the last paint request was taken.
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.progress.is_redraw_requested()
    }

    /// Clear and return the pending redraw flag.
    pub fn take_redraw_request(&mut self) -> bool {
        self.progress.take_redraw_request()
    }

    /// Get the resolved style.
    #[must_use]
    pub const fn style(&self) -> &ProgressStyle {
        &self.style
    }

    /// Get the padding.
    #[must_use]
    pub const fn get_padding(&self) -> Padding {
        self.padding
    }

    /// Smallest content size before padding.
    fn minimum_size(&self) -> Size {
        let text = self.style.text_size.trunc();
        Size::new(text, text.max(self.style.bar_height.trunc()))
    }

    /// Compute this frame's rectangles and label placement.
    ///
    /// `canvas` is only used to measure the label.
    #[must_use]
    pub fn geometry(&self, canvas: &dyn Canvas) -> ProgressGeometry {
        let width = self.bounds.width;
        let height = self.bounds.height;
        let pad = self.padding;
        let progress = self.progress.get();

        let label = format!("{progress}%");
        let text_style = self.style.label_style();
        let label_width = canvas.measure_text(&label, &text_style);

        let half_bar = self.style.bar_height / 2.0;
        let top = height / 2.0 - half_bar;
        let bottom = height / 2.0 + half_bar;
        let right_limit = width - pad.right;

        let (fill, back, mut label_x) = if progress == 0 {
            (
                None,
                Rect::from_edges(pad.left, top, right_limit, bottom),
                pad.left,
            )
        } else {
            let fill_right =
                (width - pad.left - pad.right) / 100.0 * progress as f32 + pad.left;
            let label_x = if progress > 2 {
                fill_right - label_width / 2.0
            } else {
                pad.left
            };
            (
                Some(Rect::from_edges(pad.left, top, fill_right, bottom)),
                Rect::from_edges(fill_right, top, right_limit, bottom),
                label_x,
            )
        };

        if label_x + label_width >= right_limit {
            label_x = right_limit - label_width;
        }

        let metrics = canvas.font_metrics(&text_style);
        let baseline =
            (height / 2.0 - (metrics.descent + metrics.ascent) / 2.0).trunc() + self.style.label_offset;

        ProgressGeometry {
            fill,
            back,
            label,
            label_origin: Point::new(label_x, baseline),
            label_width,
        }
    }
}

/// Resolve one axis: exact sizes win, bounded axes combine the desired
/// size with the bound via `bounded`.
fn resolve_axis(mode: MeasureMode, desired: f32, bounded: fn(f32, f32) -> f32) -> f32 {
    match mode {
        MeasureMode::Exactly(size) => size,
        MeasureMode::AtMost(size) => bounded(desired, size),
        MeasureMode::Unspecified => desired,
    }
}

impl Widget for ProgressIndicator {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let min = self.minimum_size();
        Size::new(
            resolve_axis(
                constraints.width_mode(),
                min.width + self.padding.horizontal(),
                f32::max,
            ),
            resolve_axis(
                constraints.height_mode(),
                min.height + self.padding.vertical(),
                f32::min,
            ),
        )
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let geometry = self.geometry(&*canvas);
        let origin = self.bounds.origin();

        if let Some(fill) = geometry.fill {
            canvas.fill_rect(fill.translate(origin), self.style.progress_color);
        }
        canvas.fill_rect(
            geometry.back.translate(origin),
            self.style.progress_back_color,
        );
        canvas.draw_text(
            &geometry.label,
            geometry.label_origin + origin,
            &self.style.label_style(),
        );
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ProgressBar
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meterkit_core::{DrawCommand, RecordingCanvas};
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};

    /// Default colors, a 10px bar and 10px text; every glyph 6px wide.
    fn test_style() -> ProgressStyle {
        ProgressStyle {
            text_size: 10.0,
            bar_height: 10.0,
            ..ProgressStyle::default()
        }
    }

    fn canvas() -> RecordingCanvas {
        RecordingCanvas::new().with_char_width(6.0)
    }

    fn laid_out(progress: i32, bounds: Rect) -> ProgressIndicator {
        let mut pi = ProgressIndicator::new(test_style());
        pi.set_progress(progress);
        pi.layout(bounds);
        pi
    }

    fn recorder() -> (Arc<Mutex<Vec<(i32, i32)>>>, impl ProgressListener) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let listener = move |_: &mut Progress, current: i32, max: i32| {
            sink.lock().unwrap().push((current, max));
        };
        (calls, listener)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    // ===== Progress Value Tests =====

    #[test]
    fn test_progress_starts_at_zero() {
        let pi = ProgressIndicator::default();
        assert_eq!(pi.progress(), 0);
        assert!(!pi.needs_redraw());
    }

    #[test]
    fn test_set_progress_bounds_inclusive() {
        let mut pi = ProgressIndicator::default();
        pi.set_progress(100);
        assert_eq!(pi.progress(), 100);
        pi.set_progress(0);
        assert_eq!(pi.progress(), 0);
    }

    #[test]
    fn test_set_progress_rejects_not_clamps() {
        let mut pi = ProgressIndicator::default();
        pi.set_progress(40);
        pi.set_progress(101);
        assert_eq!(pi.progress(), 40);
        pi.set_progress(-1);
        assert_eq!(pi.progress(), 40);
        pi.set_progress(i32::MIN);
        assert_eq!(pi.progress(), 40);
    }

    #[test]
    fn test_set_progress_requests_redraw() {
        let mut pi = ProgressIndicator::default();
        pi.set_progress(10);
        assert!(pi.needs_redraw());
        assert!(pi.take_redraw_request());
        assert!(!pi.needs_redraw());

        pi.set_progress(500);
        assert!(!pi.needs_redraw());
    }

    #[test]
    fn test_set_progress_does_not_notify() {
        let (calls, listener) = recorder();
        let mut pi = ProgressIndicator::default();
        pi.set_on_progress_listener(listener);
        pi.set_progress(30);
        assert!(calls.lock().unwrap().is_empty());
    }

    // ===== Increment Tests =====

    #[test]
    fn test_increment_adds_and_notifies() {
        let (calls, listener) = recorder();
        let mut pi = ProgressIndicator::default();
        pi.set_on_progress_listener(listener);
        pi.set_progress(50);
        pi.increment_progress(1);
        assert_eq!(pi.progress(), 51);
        assert_eq!(*calls.lock().unwrap(), vec![(51, 100)]);
    }

    #[test]
    fn test_increment_to_exact_cap_notifies_max() {
        let (calls, listener) = recorder();
        let mut pi = ProgressIndicator::default();
        pi.set_on_progress_listener(listener);
        pi.set_progress(95);
        pi.increment_progress(5);
        assert_eq!(pi.progress(), 100);
        assert_eq!(*calls.lock().unwrap(), vec![(100, 100)]);
    }

    #[test]
    fn test_increment_past_cap_is_rejected_but_notifies() {
        let (calls, listener) = recorder();
        let mut pi = ProgressIndicator::default();
        pi.set_on_progress_listener(listener);
        pi.set_progress(95);
        pi.increment_progress(10);
        pi.increment_progress(10);
        assert_eq!(pi.progress(), 95);
        assert_eq!(*calls.lock().unwrap(), vec![(95, 100), (95, 100)]);
    }

    #[test]
    fn test_increment_non_positive_still_notifies() {
        let (calls, listener) = recorder();
        let mut pi = ProgressIndicator::default();
        pi.set_on_progress_listener(listener);
        pi.set_progress(20);
        pi.increment_progress(0);
        pi.increment_progress(-7);
        assert_eq!(pi.progress(), 20);
        assert_eq!(*calls.lock().unwrap(), vec![(20, 100), (20, 100)]);
    }

    #[test]
    fn test_increment_overflow_is_rejected() {
        let mut pi = ProgressIndicator::default();
        pi.set_progress(1);
        pi.increment_progress(i32::MAX);
        assert_eq!(pi.progress(), 1);
    }

    #[test]
    fn test_increment_without_listener() {
        let mut pi = ProgressIndicator::default();
        pi.increment_progress(3);
        assert_eq!(pi.progress(), 3);
    }

    // ===== Listener Tests =====

    #[test]
    fn test_last_listener_wins() {
        let (first_calls, first) = recorder();
        let (second_calls, second) = recorder();
        let mut pi = ProgressIndicator::default();
        pi.set_on_progress_listener(first);
        pi.set_on_progress_listener(second);
        pi.increment_progress(1);
        assert!(first_calls.lock().unwrap().is_empty());
        assert_eq!(*second_calls.lock().unwrap(), vec![(1, 100)]);
    }

    #[test]
    fn test_clear_listener() {
        let (calls, listener) = recorder();
        let mut pi = ProgressIndicator::default();
        pi.set_on_progress_listener(listener);
        assert!(pi.has_listener());
        pi.clear_on_progress_listener();
        assert!(!pi.has_listener());
        pi.increment_progress(1);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_listener_can_write_progress() {
        struct JumpTo(i32);
        impl ProgressListener for JumpTo {
            fn on_progress_update(&mut self, progress: &mut Progress, _: i32, _: i32) {
                progress.set(self.0);
            }
        }

        let mut pi = ProgressIndicator::default();
        pi.set_on_progress_listener(JumpTo(77));
        pi.increment_progress(1);
        assert_eq!(pi.progress(), 77);
    }

    // ===== Measure Tests =====

    #[test]
    fn test_measure_unspecified_adds_padding() {
        let pi = ProgressIndicator::new(test_style()).padding(Padding::new(1.0, 2.0, 3.0, 4.0));
        let size = pi.measure(Constraints::unbounded());
        assert_eq!(size, Size::new(14.0, 16.0));
    }

    #[test]
    fn test_measure_exactly() {
        let pi = ProgressIndicator::new(test_style()).padding(Padding::uniform(8.0));
        let size = pi.measure(Constraints::tight(Size::new(300.0, 48.0)));
        assert_eq!(size, Size::new(300.0, 48.0));
    }

    #[test]
    fn test_measure_at_most_fills_width_hugs_height() {
        let pi = ProgressIndicator::new(test_style());
        let size = pi.measure(Constraints::loose(Size::new(300.0, 48.0)));
        assert_eq!(size, Size::new(300.0, 10.0));
    }

    #[test]
    fn test_measure_at_most_height_caps() {
        let pi = ProgressIndicator::new(test_style());
        let size = pi.measure(Constraints::loose(Size::new(300.0, 5.0)));
        assert_eq!(size.height, 5.0);
    }

    #[test]
    fn test_measure_at_most_zero_width_keeps_desired() {
        let pi = ProgressIndicator::new(test_style());
        let size = pi.measure(Constraints::loose(Size::new(0.0, 48.0)));
        assert_eq!(size, Size::new(10.0, 10.0));
    }

    #[test]
    fn test_measure_minimum_truncates_and_takes_taller() {
        let style = ProgressStyle {
            text_size: 24.7,
            bar_height: 10.5,
            ..ProgressStyle::default()
        };
        let size = ProgressIndicator::new(style).measure(Constraints::unbounded());
        assert_eq!(size, Size::new(24.0, 24.0));

        let style = ProgressStyle {
            text_size: 8.0,
            bar_height: 30.9,
            ..ProgressStyle::default()
        };
        let size = ProgressIndicator::new(style).measure(Constraints::unbounded());
        assert_eq!(size, Size::new(8.0, 30.0));
    }

    // ===== Geometry Tests =====

    #[test]
    fn test_geometry_quarter() {
        let pi = laid_out(25, Rect::new(0.0, 0.0, 200.0, 40.0));
        let g = pi.geometry(&canvas());
        assert_eq!(g.fill, Some(Rect::new(0.0, 15.0, 50.0, 10.0)));
        assert_eq!(g.back, Rect::from_edges(50.0, 15.0, 200.0, 25.0));
        assert_eq!(g.label, "25%");
        assert_eq!(g.label_width, 18.0);
        assert_eq!(g.label_origin.x, 41.0);
    }

    #[test]
    fn test_geometry_zero_has_no_fill() {
        let pi = laid_out(0, Rect::new(0.0, 0.0, 200.0, 40.0));
        let g = pi.geometry(&canvas());
        assert_eq!(g.fill, None);
        assert_eq!(g.back, Rect::new(0.0, 15.0, 200.0, 10.0));
        assert_eq!(g.label, "0%");
        assert_eq!(g.label_origin.x, 0.0);
    }

    #[test]
    fn test_geometry_respects_padding() {
        let mut pi = ProgressIndicator::new(test_style()).padding(Padding::new(10.0, 0.0, 30.0, 0.0));
        pi.set_progress(50);
        pi.layout(Rect::new(0.0, 0.0, 200.0, 40.0));
        let g = pi.geometry(&canvas());

        let fill = g.fill.unwrap();
        assert_eq!(fill.left(), 10.0);
        assert!(approx(fill.right(), 90.0));
        assert!(approx(g.back.left(), 90.0));
        assert!(approx(g.back.right(), 170.0));
    }

    #[test]
    fn test_geometry_padding_at_zero() {
        let mut pi = ProgressIndicator::new(test_style()).padding(Padding::new(10.0, 0.0, 30.0, 0.0));
        pi.layout(Rect::new(0.0, 0.0, 200.0, 40.0));
        let g = pi.geometry(&canvas());
        assert_eq!(g.back.left(), 10.0);
        assert_eq!(g.back.right(), 170.0);
        assert_eq!(g.label_origin.x, 10.0);
    }

    #[test]
    fn test_label_pinned_left_for_small_values() {
        for p in [1, 2] {
            let pi = laid_out(p, Rect::new(0.0, 0.0, 200.0, 40.0));
            assert_eq!(pi.geometry(&canvas()).label_origin.x, 0.0, "progress {p}");
        }
    }

    #[test]
    fn test_label_centers_on_fill_edge_from_three() {
        // fill edge at 6, label "3%" is 12 wide
        let pi = laid_out(3, Rect::new(0.0, 0.0, 200.0, 40.0));
        assert_eq!(pi.geometry(&canvas()).label_origin.x, 0.0);

        // fill edge at 8, label "4%" is 12 wide; no left clamp applies
        let pi = laid_out(4, Rect::new(0.0, 0.0, 200.0, 40.0));
        assert_eq!(pi.geometry(&canvas()).label_origin.x, 2.0);
    }

    #[test]
    fn test_label_clamped_at_right_edge() {
        let pi = laid_out(100, Rect::new(0.0, 0.0, 200.0, 40.0));
        let g = pi.geometry(&canvas());
        assert_eq!(g.label_width, 24.0);
        assert_eq!(g.label_origin.x, 176.0);
        assert_eq!(g.back.width, 0.0);
    }

    #[test]
    fn test_label_clamp_uses_right_padding() {
        let mut pi = ProgressIndicator::new(test_style()).padding(Padding::new(0.0, 0.0, 20.0, 0.0));
        pi.set_progress(99);
        pi.layout(Rect::new(0.0, 0.0, 200.0, 40.0));
        let g = pi.geometry(&canvas());
        assert_eq!(g.label_origin.x, 180.0 - 18.0);
    }

    #[test]
    fn test_label_baseline() {
        // approximate metrics at 10px: ascent -8, descent 2
        let pi = laid_out(50, Rect::new(0.0, 0.0, 200.0, 40.0));
        assert_eq!(pi.geometry(&canvas()).label_origin.y, 23.0 - 19.5);

        // 20.5 + 3 truncates to 23
        let pi = laid_out(50, Rect::new(0.0, 0.0, 200.0, 41.0));
        assert_eq!(pi.geometry(&canvas()).label_origin.y, 23.0 - 19.5);
    }

    #[test]
    fn test_geometry_recomputed_after_change() {
        let mut pi = laid_out(10, Rect::new(0.0, 0.0, 100.0, 20.0));
        let before = pi.geometry(&canvas());
        pi.set_progress(60);
        let after = pi.geometry(&canvas());
        assert_ne!(before.fill, after.fill);
        assert!(approx(after.fill.unwrap().right(), 60.0));
    }

    // ===== Paint Tests =====

    #[test]
    fn test_paint_order_with_fill() {
        let pi = laid_out(25, Rect::new(0.0, 0.0, 200.0, 40.0));
        let mut canvas = canvas();
        pi.paint(&mut canvas);

        let cmds = canvas.commands();
        assert_eq!(cmds.len(), 3);
        match &cmds[0] {
            DrawCommand::Rect { bounds, style } => {
                assert_eq!(bounds.right(), 50.0);
                assert_eq!(style.fill, pi.style().progress_color);
            }
            DrawCommand::Text { .. } => panic!("Expected fill Rect"),
        }
        match &cmds[1] {
            DrawCommand::Rect { bounds, style } => {
                assert_eq!(bounds.left(), 50.0);
                assert_eq!(bounds.right(), 200.0);
                assert_eq!(style.fill, pi.style().progress_back_color);
            }
            DrawCommand::Text { .. } => panic!("Expected back Rect"),
        }
        match &cmds[2] {
            DrawCommand::Text {
                content, style, ..
            } => {
                assert_eq!(content, "25%");
                assert_eq!(style.color, pi.style().progress_text_color);
            }
            DrawCommand::Rect { .. } => panic!("Expected label Text"),
        }
    }

    #[test]
    fn test_paint_zero_skips_fill() {
        let pi = laid_out(0, Rect::new(0.0, 0.0, 200.0, 40.0));
        let mut canvas = canvas();
        pi.paint(&mut canvas);

        let cmds = canvas.commands();
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].rect_bounds(), Some(Rect::new(0.0, 15.0, 200.0, 10.0)));
        assert_eq!(cmds[1].text_content(), Some("0%"));
    }

    #[test]
    fn test_paint_offsets_by_bounds_origin() {
        let pi = laid_out(50, Rect::new(50.0, 100.0, 200.0, 40.0));
        let mut canvas = canvas();
        pi.paint(&mut canvas);

        let fill = canvas.commands()[0].rect_bounds().unwrap();
        assert_eq!(fill.origin(), Point::new(50.0, 115.0));
        assert_eq!(fill.width, 100.0);
        match &canvas.commands()[2] {
            DrawCommand::Text { position, .. } => {
                assert_eq!(position.x, 50.0 + 100.0 - 9.0);
                assert_eq!(position.y, 100.0 + 3.5);
            }
            DrawCommand::Rect { .. } => panic!("Expected label Text"),
        }
    }

    // ===== Widget Trait Tests =====

    #[test]
    fn test_widget_plumbing() {
        let mut pi = ProgressIndicator::default()
            .accessible_name("Upload progress")
            .test_id("upload");
        let result = pi.layout(Rect::new(1.0, 2.0, 30.0, 40.0));

        assert_eq!(result.size, Size::new(30.0, 40.0));
        assert_eq!(Widget::bounds(&pi), Rect::new(1.0, 2.0, 30.0, 40.0));
        assert_eq!(Widget::type_id(&pi), TypeId::of::<ProgressIndicator>());
        assert_eq!(Widget::accessible_name(&pi), Some("Upload progress"));
        assert_eq!(Widget::test_id(&pi), Some("upload"));
        assert_eq!(pi.accessible_role(), AccessibleRole::ProgressBar);
        assert!(!pi.is_interactive());
    }

    #[test]
    fn test_from_attributes_resolves_style() {
        let attrs = IndicatorAttributes::from_yaml("progress_bar_height: 4dp").unwrap();
        let pi = ProgressIndicator::from_attributes(&attrs, &DisplayMetrics::new(2.0, 2.0));
        assert_eq!(pi.style().bar_height, 8.0);
        assert_eq!(pi.style().text_size, 20.0);
        assert_eq!(pi.progress(), 0);
    }

    #[test]
    fn test_debug_hides_listener() {
        let mut pi = ProgressIndicator::default();
        pi.set_on_progress_listener(|_: &mut Progress, _: i32, _: i32| {});
        let dbg = format!("{pi:?}");
        assert!(dbg.contains("has_listener: true"));
    }

    proptest! {
        #[test]
        fn prop_set_in_range_roundtrips(v in 0i32..=100) {
            let mut pi = ProgressIndicator::default();
            pi.set_progress(v);
            prop_assert_eq!(pi.progress(), v);
        }

        #[test]
        fn prop_set_out_of_range_is_ignored(
            start in 0i32..=100,
            v in prop_oneof![i32::MIN..0i32, 101i32..=i32::MAX],
        ) {
            let mut pi = ProgressIndicator::default();
            pi.set_progress(start);
            pi.set_progress(v);
            prop_assert_eq!(pi.progress(), start);
        }

        #[test]
        fn prop_fill_width_tracks_progress(p in 1i32..=100, width in 50.0f32..2000.0) {
            let pi = laid_out(p, Rect::new(0.0, 0.0, width, 40.0));
            let g = pi.geometry(&canvas());
            let fill = g.fill.unwrap();
            prop_assert!(approx(fill.width, width * p as f32 / 100.0));
            prop_assert!(approx(fill.right(), g.back.left()));
            prop_assert!(approx(g.back.right(), width));
        }

        #[test]
        fn prop_label_never_overflows_right(p in 0i32..=100, width in 30.0f32..2000.0, right in 0.0f32..20.0) {
            let mut pi = ProgressIndicator::new(test_style()).padding(Padding::new(0.0, 0.0, right, 0.0));
            pi.set_progress(p);
            pi.layout(Rect::new(0.0, 0.0, width, 40.0));
            let g = pi.geometry(&canvas());
            prop_assert!(g.label_origin.x + g.label_width <= width - right + 1e-3);
        }
    }
}
