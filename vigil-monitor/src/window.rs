//! Sliding time window over wrong-prediction timestamps.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

use vigil_core::constants::MAX_WINDOW_SECS;

/// Counts events inside a trailing time window.
///
/// Timestamps are stored in arrival order and evicted lazily: expiry is
/// checked only when [`observe`](Self::observe) runs, so an idle window
/// costs nothing. An event aged exactly to the window edge still counts;
/// only events strictly older than `now - window` are dropped.
#[derive(Debug)]
pub struct SlidingWindow {
    window: Duration,
    timestamps: VecDeque<DateTime<Utc>>,
}

impl SlidingWindow {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            timestamps: VecDeque::new(),
        }
    }

    /// Build a window of `secs` seconds, capped at [`MAX_WINDOW_SECS`] so
    /// the length always fits the underlying duration.
    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::seconds(secs.min(MAX_WINDOW_SECS) as i64))
    }

    /// Record an event at `now` and return how many events the window
    /// currently holds, the new one included.
    ///
    /// Callers are expected to feed non-decreasing timestamps. An earlier
    /// `now` is still accepted; it evicts against the earlier cutoff and
    /// never drops events newer than itself.
    pub fn observe(&mut self, now: DateTime<Utc>) -> usize {
        self.timestamps.push_back(now);
        // A window reaching past the representable past expires nothing.
        if let Some(cutoff) = now.checked_sub_signed(self.window) {
            while let Some(&front) = self.timestamps.front() {
                if front < cutoff {
                    self.timestamps.pop_front();
                } else {
                    break;
                }
            }
        }
        self.timestamps.len()
    }

    /// Events retained as of the last [`observe`](Self::observe) call.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Window length in minutes, used when describing an alert.
    pub fn window_minutes(&self) -> f64 {
        self.window.num_milliseconds() as f64 / 60_000.0
    }
}
