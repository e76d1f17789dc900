use serde::{Deserialize, Serialize};

use super::defaults;

/// Alert engine and in-memory history configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Wrong predictions within the window required to raise an alert.
    pub alert_threshold: usize,
    /// Trailing window size (seconds).
    pub window_secs: u64,
    /// Capacity of the recent-wrong ring buffer.
    pub recent_capacity: usize,
    /// Character limit for sample text carried inside alerts.
    pub sample_truncate_chars: usize,
    /// Character limit for event text written to the audit log.
    pub audit_truncate_chars: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            alert_threshold: defaults::DEFAULT_ALERT_THRESHOLD,
            window_secs: defaults::DEFAULT_WINDOW_SECS,
            recent_capacity: defaults::DEFAULT_RECENT_CAPACITY,
            sample_truncate_chars: defaults::DEFAULT_SAMPLE_TRUNCATE_CHARS,
            audit_truncate_chars: defaults::DEFAULT_AUDIT_TRUNCATE_CHARS,
        }
    }
}
