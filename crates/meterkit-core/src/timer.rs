//! Fixed-period timers driven by the host's event loop.
//!
//! Nothing here owns a thread. The host feeds elapsed time into
//! [`Timer::advance`] and dispatches the returned [`TimerEvent`]s on its
//! own (UI) thread, so cancelling from inside an event handler is
//! synchronous and no later event can sneak through.
//!
//! # Examples
//!
//! ```
//! use meterkit_core::{CountdownTimer, Timer, TimerEvent};
//!
//! let mut timer = CountdownTimer::new();
//! timer.start(100, 300);
//!
//! // The first tick fires as soon as the timer starts.
//! assert_eq!(timer.advance(0), vec![TimerEvent::Tick { remaining_ms: 300 }]);
//! assert_eq!(timer.advance(250).len(), 2);
//! assert_eq!(timer.advance(50), vec![TimerEvent::Finish]);
//! assert!(!timer.is_active());
//! ```

use serde::{Deserialize, Serialize};

/// Something the host should dispatch on behalf of a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    /// A period boundary was crossed.
    Tick {
        /// Time left until the timer finishes.
        remaining_ms: u64,
    },
    /// The total span elapsed without the timer being cancelled.
    Finish,
}

/// Lifecycle of a [`CountdownTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimerState {
    /// Created but never started.
    #[default]
    Idle,
    /// Delivering ticks.
    Running,
    /// Stopped by [`Timer::cancel`].
    Cancelled,
    /// Ran for its whole span.
    Finished,
}

/// A repeating timer primitive.
pub trait Timer {
    /// Start ticking every `period_ms` until `span_ms` has elapsed.
    ///
    /// Restarting a running timer resets it.
    fn start(&mut self, period_ms: u64, span_ms: u64);

    /// Stop delivering events. Safe to call any number of times.
    fn cancel(&mut self);

    /// Whether the timer can still deliver events.
    fn is_active(&self) -> bool;

    /// Advance the timer clock by `elapsed_ms` and collect the events that
    /// became due, in order.
    fn advance(&mut self, elapsed_ms: u64) -> Vec<TimerEvent>;
}

/// A timer that ticks at a fixed period for a fixed total span, then
/// finishes.
///
/// Ticks fire at `0, period, 2 * period, ...` for every boundary strictly
/// before the span; `Finish` fires once the span is reached.
#[derive(Debug, Clone, Default)]
pub struct CountdownTimer {
    period_ms: u64,
    span_ms: u64,
    elapsed_ms: u64,
    next_tick_ms: u64,
    state: TimerState,
}

impl CountdownTimer {
    /// Create an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Time since the timer was started.
    #[must_use]
    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Time left until the timer finishes.
    #[must_use]
    pub const fn remaining_ms(&self) -> u64 {
        self.span_ms.saturating_sub(self.elapsed_ms)
    }
}

impl Timer for CountdownTimer {
    fn start(&mut self, period_ms: u64, span_ms: u64) {
        // A zero period would never advance past its own boundary.
        self.period_ms = period_ms.max(1);
        self.span_ms = span_ms;
        self.elapsed_ms = 0;
        self.next_tick_ms = 0;
        self.state = TimerState::Running;
    }

    fn cancel(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Cancelled;
        }
    }

    fn is_active(&self) -> bool {
        self.state == TimerState::Running
    }

    fn advance(&mut self, elapsed_ms: u64) -> Vec<TimerEvent> {
        if self.state != TimerState::Running {
            return Vec::new();
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);

        let mut events = Vec::new();
        while self.next_tick_ms < self.span_ms && self.next_tick_ms <= self.elapsed_ms {
            events.push(TimerEvent::Tick {
                remaining_ms: self.span_ms - self.next_tick_ms,
            });
            self.next_tick_ms = self.next_tick_ms.saturating_add(self.period_ms);
        }

        if self.elapsed_ms >= self.span_ms {
            events.push(TimerEvent::Finish);
            self.state = TimerState::Finished;
        }

        events
    }
}
