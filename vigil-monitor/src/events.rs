//! Structured tracing events emitted by the monitoring pipeline.
//!
//! Every noteworthy transition goes through a named helper so call sites
//! stay terse and field names stay consistent across the crate.

use tracing_subscriber::EnvFilter;

use vigil_core::errors::{AuditError, NotifyError};

/// Install the global tracing subscriber.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Safe to call more
/// than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// A wrong prediction entered the window.
pub fn wrong_prediction_recorded(window_count: usize) {
    tracing::debug!(window_count, "wrong prediction recorded");
}

/// The in-window count reached the alert threshold.
pub fn alert_triggered(window_count: usize, threshold: usize, window_minutes: f64) {
    tracing::warn!(
        window_count,
        threshold,
        window_minutes,
        "wrong-prediction alert triggered"
    );
}

/// An audit append failed; the event itself was still processed.
pub fn audit_append_failed(kind: &str, error: &AuditError) {
    tracing::warn!(kind, error = %error, "audit append failed");
}

/// Alert delivery failed; recording is unaffected.
pub fn notify_failed(error: &NotifyError) {
    tracing::warn!(error = %error, "alert notification failed");
}

/// Notifications are switched off in configuration.
pub fn notifier_disabled() {
    tracing::debug!("notifier disabled, alerts will be logged only");
}

/// The configured notifier could not be built; alerts degrade to log-only.
pub fn notifier_degraded(reason: &str) {
    tracing::warn!(reason, "notifier unavailable, alerts will be logged only");
}

/// A webhook notifier is configured and ready.
pub fn notifier_ready(url: &str) {
    tracing::info!(url, "webhook notifier ready");
}
