/// Vigil system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of sample events attached to a single alert.
pub const ALERT_SAMPLE_COUNT: usize = 3;

/// Upper bound on the alerting window, in seconds (one year). Keeps window
/// lengths far from the duration type's millisecond limit.
pub const MAX_WINDOW_SECS: u64 = 31_536_000;

/// Audit type tag for a wrong-prediction event entry.
pub const AUDIT_TAG_WRONG_PREDICTION: &str = "WRONG_PREDICTION";

/// Audit type tag for an alert entry.
pub const AUDIT_TAG_ALERT: &str = "ALERT";

/// Marker appended to truncated text.
pub const TRUNCATION_MARKER: char = '…';
