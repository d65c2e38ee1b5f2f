//! Frame tick scheduling.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller polls with the current time; nothing here sleeps.

use embassy_time::{Duration, Instant};

/// Default animation frame period.
pub const DEFAULT_FRAME_PERIOD: Duration = Duration::from_millis(250);

/// Absolute deadline ticker.
///
/// Each fired tick moves the deadline forward by exactly one period from the
/// previous deadline, not from the poll time, so polling latency never
/// accumulates into the cadence.
///
/// # Usage
///
/// ```ignore
/// let mut ticks = TickScheduler::new(Instant::now(), DEFAULT_FRAME_PERIOD);
///
/// loop {
///     if ticks.poll(Instant::now()) {
///         // advance animation
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    next_deadline: Instant,
    period: Duration,
}

impl TickScheduler {
    /// Create a scheduler whose first tick is due at `start`.
    pub const fn new(start: Instant, period: Duration) -> Self {
        Self {
            next_deadline: start,
            period,
        }
    }

    /// Check the deadline and advance it if reached.
    ///
    /// Fires at most once per call. After a stall the missed ticks fire on
    /// consecutive polls until the deadline catches up.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_deadline {
            return false;
        }
        self.next_deadline += self.period;
        true
    }

    /// Deadline of the next tick.
    pub const fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Tick period.
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next tick (zero if already due).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_deadline
            .checked_duration_since(now)
            .unwrap_or(Duration::from_ticks(0))
    }
}
