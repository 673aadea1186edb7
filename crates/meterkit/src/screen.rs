//! Host screen: one animated progress indicator.

use crate::driver::{AnimationDriver, DriverState};
use meterkit_core::{
    Canvas, Constraints, CountdownTimer, DisplayMetrics, Rect, Size, Timer, Widget,
};
use meterkit_widgets::{Progress, ProgressIndicator, ProgressListener};
use meterkit_yaml::ScreenManifest;

/// Listener that pins the value to exactly `max` once it gets there.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapToMax;

impl ProgressListener for SnapToMax {
    fn on_progress_update(&mut self, progress: &mut Progress, current: i32, max: i32) {
        if current == max {
            progress.set(current);
        }
    }
}

/// Owns a [`ProgressIndicator`] and the [`AnimationDriver`] moving it.
#[derive(Debug)]
pub struct ProgressScreen<T: Timer = CountdownTimer> {
    indicator: ProgressIndicator,
    driver: AnimationDriver<T>,
}

impl ProgressScreen {
    /// Build the screen and start its animation.
    #[must_use]
    pub fn on_create(manifest: &ScreenManifest, metrics: &DisplayMetrics) -> Self {
        Self::on_create_with_timer(manifest, metrics, CountdownTimer::new())
    }
}

impl<T: Timer> ProgressScreen<T> {
    /// Build the screen around a caller-supplied timer and start it.
    #[must_use]
    pub fn on_create_with_timer(
        manifest: &ScreenManifest,
        metrics: &DisplayMetrics,
        timer: T,
    ) -> Self {
        let mut indicator = ProgressIndicator::from_attributes(&manifest.indicator, metrics)
            .padding(manifest.padding.into())
            .accessible_name("Progress");
        indicator.set_on_progress_listener(SnapToMax);
        indicator.set_progress(manifest.animation.initial_progress);

        let mut driver = AnimationDriver::with_timer(manifest.animation, timer);
        driver.start();

        tracing::info!(
            progress = indicator.progress(),
            density = metrics.density,
            "progress screen created"
        );
        Self { indicator, driver }
    }

    /// Feed elapsed time to the animation. Returns the ticks handled.
    pub fn advance(&mut self, elapsed_ms: u64) -> usize {
        self.driver.advance(elapsed_ms, &mut self.indicator)
    }

    /// Measure within `viewport`, lay out at its origin and paint.
    ///
    /// Returns the bounds the indicator was laid out in.
    pub fn render(&mut self, canvas: &mut dyn Canvas, viewport: Rect) -> Rect {
        let size: Size = self
            .indicator
            .measure(Constraints::loose(viewport.size()));
        let bounds = Rect::new(viewport.x, viewport.y, size.width, size.height);
        self.indicator.layout(bounds);
        self.indicator.paint(canvas);
        self.indicator.take_redraw_request();
        bounds
    }

    /// Stop the animation.
    pub fn on_destroy(&mut self) {
        self.driver.cancel();
        tracing::info!(progress = self.indicator.progress(), "progress screen destroyed");
    }

    /// Whether the indicator changed since the last render.
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.indicator.needs_redraw()
    }

    /// Whether the animation is over, by threshold or teardown.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.driver.state() == DriverState::Stopped
    }

    /// The animated indicator.
    #[must_use]
    pub const fn indicator(&self) -> &ProgressIndicator {
        &self.indicator
    }

    /// Mutable access to the indicator, e.g. to set progress directly.
    pub fn indicator_mut(&mut self) -> &mut ProgressIndicator {
        &mut self.indicator
    }

    /// The animation driver.
    #[must_use]
    pub const fn driver(&self) -> &AnimationDriver<T> {
        &self.driver
    }
}
