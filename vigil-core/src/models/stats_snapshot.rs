use serde::{Deserialize, Serialize};

/// Point-in-time view of the running counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_predictions: u64,
    pub total_wrong_predictions: u64,
    /// Wrong over total, or 0.0 before any traffic.
    pub error_rate: f64,
}
