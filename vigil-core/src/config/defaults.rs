/// Wrong predictions within the window required to raise an alert.
pub const DEFAULT_ALERT_THRESHOLD: usize = 3;

/// Trailing window size in seconds (5 minutes).
pub const DEFAULT_WINDOW_SECS: u64 = 300;

/// Capacity of the recent-wrong ring buffer.
pub const DEFAULT_RECENT_CAPACITY: usize = 100;

/// Character limit for sample text carried inside alerts.
pub const DEFAULT_SAMPLE_TRUNCATE_CHARS: usize = 100;

/// Character limit for event text written to the audit log.
pub const DEFAULT_AUDIT_TRUNCATE_CHARS: usize = 200;

/// Audit log target.
pub const DEFAULT_AUDIT_PATH: &str = "logs/feedback.log";

/// Webhook request timeout in seconds.
pub const DEFAULT_NOTIFIER_TIMEOUT_SECS: u64 = 5;
