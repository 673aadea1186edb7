//! Timer-driven animation of a progress indicator.
//!
//! The driver owns a [`Timer`] and, on every tick, nudges the indicator
//! towards a threshold. Once the threshold is reached it cancels the timer
//! and drops it, after which further events are ignored.

use meterkit_core::{CountdownTimer, Timer, TimerEvent};
use meterkit_widgets::ProgressIndicator;
use meterkit_yaml::AnimationConfig;

/// Lifecycle of an [`AnimationDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    /// Created, timer not started yet.
    #[default]
    Idle,
    /// Timer running, progress being incremented.
    Running,
    /// Threshold reached or cancelled. Terminal.
    Stopped,
}

/// Increments a [`ProgressIndicator`] on every timer tick until it reaches
/// a threshold.
#[derive(Debug)]
pub struct AnimationDriver<T: Timer = CountdownTimer> {
    config: AnimationConfig,
    timer: Option<T>,
    state: DriverState,
    ticks: u64,
}

impl AnimationDriver {
    /// Create an idle driver backed by a [`CountdownTimer`].
    #[must_use]
    pub fn new(config: AnimationConfig) -> Self {
        Self::with_timer(config, CountdownTimer::new())
    }
}

impl<T: Timer> AnimationDriver<T> {
    /// Create an idle driver backed by `timer`.
    #[must_use]
    pub const fn with_timer(config: AnimationConfig, timer: T) -> Self {
        Self {
            config,
            timer: Some(timer),
            state: DriverState::Idle,
            ticks: 0,
        }
    }

    /// Start the timer. Only an idle driver can be started.
    pub fn start(&mut self) {
        if self.state != DriverState::Idle {
            tracing::debug!(state = ?self.state, "driver already started");
            return;
        }
        let Some(timer) = self.timer.as_mut() else {
            return;
        };

        timer.start(self.config.period_ms, self.config.span_ms);
        self.state = DriverState::Running;
        tracing::info!(
            period_ms = self.config.period_ms,
            span_ms = self.config.span_ms,
            threshold = self.config.threshold,
            "animation started"
        );
    }

    /// Advance the timer by `elapsed_ms` and apply the due events to
    /// `indicator`.
    ///
    /// Returns the number of ticks handled. Events that were due after the
    /// driver stopped itself in the same batch are dropped.
    pub fn advance(&mut self, elapsed_ms: u64, indicator: &mut ProgressIndicator) -> usize {
        let events = match self.timer.as_mut() {
            Some(timer) => timer.advance(elapsed_ms),
            None => return 0,
        };

        let mut handled = 0;
        for event in events {
            if self.timer.is_none() {
                break;
            }
            match event {
                TimerEvent::Tick { remaining_ms } => {
                    self.on_tick(indicator, remaining_ms);
                    handled += 1;
                }
                TimerEvent::Finish => {
                    tracing::info!(ticks = self.ticks, "animation timer finished");
                }
            }
        }
        handled
    }

    /// Checks the threshold again right after incrementing, so the tick that
    /// reaches it stops the driver instead of the next one.
    fn on_tick(&mut self, indicator: &mut ProgressIndicator, remaining_ms: u64) {
        self.ticks += 1;
        if indicator.progress() < self.config.threshold {
            indicator.increment_progress(self.config.step);
        }
        tracing::debug!(
            tick = self.ticks,
            remaining_ms,
            progress = indicator.progress(),
            "animation tick"
        );

        if indicator.progress() >= self.config.threshold {
            tracing::info!(
                progress = indicator.progress(),
                ticks = self.ticks,
                "threshold reached, stopping animation"
            );
            self.cancel();
        }
    }

    /// Cancel and release the timer. Safe to call in any state, any number
    /// of times.
    pub fn cancel(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        self.state = DriverState::Stopped;
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> DriverState {
        self.state
    }

    /// Whether the driver still holds its timer.
    #[must_use]
    pub const fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Whether the held timer can still deliver events.
    #[must_use]
    pub fn is_timer_active(&self) -> bool {
        self.timer.as_ref().is_some_and(T::is_active)
    }

    /// Number of ticks handled so far.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Settings the driver was built with.
    #[must_use]
    pub const fn config(&self) -> &AnimationConfig {
        &self.config
    }
}
