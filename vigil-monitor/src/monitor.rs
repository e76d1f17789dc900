//! Thread-safe monitoring facade.

use std::sync::{Arc, Mutex, PoisonError};

use vigil_core::config::{MonitorConfig, VigilConfig};
use vigil_core::errors::VigilResult;
use vigil_core::models::{Label, StatsSnapshot, WrongPrediction};
use vigil_core::traits::{IAuditSink, IClock, INotifier, SystemClock};

use crate::audit::JsonlAuditSink;
use crate::engine::AlertEngine;
use crate::events;
use crate::notify::build_notifier;
use crate::stats::RunningStats;

/// Entry point for recording predictions and feedback.
///
/// Cheap to clone; all clones share one engine behind a mutex, one set of
/// counters, and one notifier. Prediction counting is lock-free; feedback
/// takes the engine lock for the audit-and-evaluate step and releases it
/// before any notification goes out, so a slow webhook never blocks other
/// recorders.
#[derive(Clone)]
pub struct ModelMonitor {
    inner: Arc<MonitorInner>,
}

struct MonitorInner {
    engine: Mutex<AlertEngine>,
    stats: RunningStats,
    notifier: Arc<dyn INotifier>,
    clock: Arc<dyn IClock>,
}

impl ModelMonitor {
    /// Build a monitor from configuration: JSONL audit log at the
    /// configured path, the configured notifier (or a no-op stand-in),
    /// and the system clock.
    pub fn new(config: &VigilConfig) -> VigilResult<Self> {
        let sink: Arc<dyn IAuditSink> = Arc::new(JsonlAuditSink::open(&config.audit.path)?);
        let notifier = build_notifier(&config.notifier);
        Ok(Self::with_components(
            &config.monitor,
            sink,
            notifier,
            Arc::new(SystemClock),
        ))
    }

    /// Build a monitor from explicit components. Tests inject a manual
    /// clock and in-memory sinks here; embedders wire their own channels.
    pub fn with_components(
        config: &MonitorConfig,
        sink: Arc<dyn IAuditSink>,
        notifier: Arc<dyn INotifier>,
        clock: Arc<dyn IClock>,
    ) -> Self {
        Self {
            inner: Arc::new(MonitorInner {
                engine: Mutex::new(AlertEngine::new(config, sink)),
                stats: RunningStats::new(),
                notifier,
                clock,
            }),
        }
    }

    /// Count one served prediction. Lock-free; call it on every inference.
    pub fn record_prediction(&self) {
        self.inner.stats.record_prediction();
    }

    /// Record the ground-truth verdict for a served prediction.
    ///
    /// Correct feedback is a no-op. Wrong feedback is counted, audited,
    /// pushed into the recent buffer, and evaluated against the alert
    /// threshold; a triggered alert is delivered after the engine lock is
    /// released. Never fails and never panics: audit and delivery errors
    /// are traced and swallowed, and a poisoned lock is taken over rather
    /// than dropping the event.
    pub fn record_feedback(
        &self,
        text: impl Into<String>,
        predicted_label: Label,
        proba: Option<f64>,
        is_correct: bool,
    ) {
        if is_correct {
            return;
        }
        self.inner.stats.record_wrong();
        let now = self.inner.clock.now();
        let event = WrongPrediction {
            text: text.into(),
            predicted_label,
            proba,
            occurred_at: now,
        };
        let outcome = {
            let mut engine = self
                .inner
                .engine
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            engine.record_wrong(event, now)
        };
        if let Some(outcome) = outcome {
            if let Err(e) = self.inner.notifier.notify(&outcome.message) {
                events::notify_failed(&e);
            }
        }
    }

    /// Current totals and error rate.
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.stats.snapshot()
    }

    /// Up to `limit` recent wrong predictions, newest first.
    pub fn recent_wrong(&self, limit: usize) -> Vec<WrongPrediction> {
        self.inner
            .engine
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .recent(limit)
    }
}
