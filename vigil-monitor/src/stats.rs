//! Lock-free running counters for prediction volume and quality.

use std::sync::atomic::{AtomicU64, Ordering};

use vigil_core::models::StatsSnapshot;

/// Monotonic counters incremented on every prediction and every confirmed
/// wrong prediction.
///
/// Counters use relaxed atomics: each is independently consistent, and a
/// snapshot taken mid-traffic may straddle concurrent increments. That is
/// acceptable for a monitoring read surface; neither counter ever loses
/// an increment.
#[derive(Debug, Default)]
pub struct RunningStats {
    total_predictions: AtomicU64,
    total_wrong: AtomicU64,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_prediction(&self) {
        self.total_predictions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_wrong(&self) {
        self.total_wrong.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total_predictions(&self) -> u64 {
        self.total_predictions.load(Ordering::Relaxed)
    }

    pub fn total_wrong(&self) -> u64 {
        self.total_wrong.load(Ordering::Relaxed)
    }

    /// Current totals plus the derived error rate. The rate is 0.0 while
    /// no predictions have been recorded, even if wrong feedback arrived
    /// for predictions made before the counters existed.
    pub fn snapshot(&self) -> StatsSnapshot {
        let total_predictions = self.total_predictions();
        let total_wrong_predictions = self.total_wrong();
        let error_rate = if total_predictions == 0 {
            0.0
        } else {
            total_wrong_predictions as f64 / total_predictions as f64
        };
        StatsSnapshot {
            total_predictions,
            total_wrong_predictions,
            error_rate,
        }
    }
}
