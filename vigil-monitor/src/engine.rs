//! Alert evaluation over the wrong-prediction stream.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use vigil_core::config::MonitorConfig;
use vigil_core::constants::ALERT_SAMPLE_COUNT;
use vigil_core::models::{AlertRecord, AlertSample, AuditEntry, WrongPrediction};
use vigil_core::text::truncate;
use vigil_core::traits::IAuditSink;

use crate::events;
use crate::message::compose_message;
use crate::recent::RecentBuffer;
use crate::window::SlidingWindow;

/// What a triggering event produced: the structured record already written
/// to the audit log, and the composed notification message.
#[derive(Debug, Clone)]
pub struct AlertOutcome {
    pub record: AlertRecord,
    pub message: String,
}

/// Level-triggered alert engine.
///
/// Owns the sliding window, the recent buffer, and the audit sink. The
/// caller serializes access (the monitor holds one lock around
/// [`record_wrong`](Self::record_wrong)), so the threshold check never
/// races an audit append. Re-fires on every qualifying event while the
/// in-window count stays at or above the threshold.
pub struct AlertEngine {
    threshold: usize,
    sample_truncate_chars: usize,
    audit_truncate_chars: usize,
    window: SlidingWindow,
    recent: RecentBuffer,
    sink: Arc<dyn IAuditSink>,
}

impl AlertEngine {
    pub fn new(config: &MonitorConfig, sink: Arc<dyn IAuditSink>) -> Self {
        Self {
            threshold: config.alert_threshold.max(1),
            sample_truncate_chars: config.sample_truncate_chars,
            audit_truncate_chars: config.audit_truncate_chars,
            window: SlidingWindow::from_secs(config.window_secs),
            recent: RecentBuffer::new(config.recent_capacity),
            sink,
        }
    }

    /// Process one wrong prediction: audit it, remember it, count it, and
    /// evaluate the alert condition.
    ///
    /// Never fails. Audit append errors are traced and swallowed so a full
    /// disk cannot stop recording. When an alert fires, its audit entry is
    /// written before this returns; the caller notifies afterwards.
    pub fn record_wrong(
        &mut self,
        event: WrongPrediction,
        now: DateTime<Utc>,
    ) -> Option<AlertOutcome> {
        let audited = WrongPrediction {
            text: truncate(&event.text, self.audit_truncate_chars).into_owned(),
            predicted_label: event.predicted_label,
            proba: event.proba,
            occurred_at: event.occurred_at,
        };
        if let Err(e) = self.sink.append(&AuditEntry::wrong_prediction(now, audited)) {
            events::audit_append_failed("wrong_prediction", &e);
        }

        self.recent.push(event);
        let window_count = self.window.observe(now);
        events::wrong_prediction_recorded(window_count);

        if window_count < self.threshold {
            return None;
        }

        let record = self.build_alert(now, window_count);
        events::alert_triggered(window_count, self.threshold, record.window_minutes);
        if let Err(e) = self.sink.append(&AuditEntry::alert(now, record.clone())) {
            events::audit_append_failed("alert", &e);
        }
        let message = compose_message(&record);
        Some(AlertOutcome { record, message })
    }

    fn build_alert(&self, now: DateTime<Utc>, window_count: usize) -> AlertRecord {
        let samples = self
            .recent
            .recent(ALERT_SAMPLE_COUNT)
            .into_iter()
            .map(|event| AlertSample {
                text: truncate(&event.text, self.sample_truncate_chars).into_owned(),
                predicted_label: event.predicted_label,
                proba: event.proba,
                occurred_at: event.occurred_at,
            })
            .collect();
        AlertRecord {
            triggered_at: now,
            window_count,
            window_minutes: self.window.window_minutes(),
            samples,
        }
    }

    /// Up to `limit` recent wrong predictions, newest first, untruncated.
    pub fn recent(&self, limit: usize) -> Vec<WrongPrediction> {
        self.recent.recent(limit)
    }

    /// Wrong predictions counted by the window as of the last event.
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}
