use std::sync::{Arc, Mutex};
use std::thread;

use chrono::{DateTime, Duration, TimeZone, Utc};
use vigil_core::config::{MonitorConfig, VigilConfig};
use vigil_core::errors::NotifyError;
use vigil_core::models::{AuditPayload, Label};
use vigil_core::traits::{INotifier, ManualClock};
use vigil_monitor::audit::MemoryAuditSink;
use vigil_monitor::notify::NoopNotifier;
use vigil_monitor::ModelMonitor;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
}

struct Harness {
    monitor: ModelMonitor,
    sink: Arc<MemoryAuditSink>,
    clock: Arc<ManualClock>,
}

fn harness_with_notifier(notifier: Arc<dyn INotifier>) -> Harness {
    let sink = Arc::new(MemoryAuditSink::new());
    let clock = Arc::new(ManualClock::new(t0()));
    let monitor = ModelMonitor::with_components(
        &MonitorConfig::default(),
        sink.clone(),
        notifier,
        clock.clone(),
    );
    Harness {
        monitor,
        sink,
        clock,
    }
}

/// Captures delivered messages and checks the alert was already audited
/// when delivery happens.
struct CapturingNotifier {
    messages: Mutex<Vec<String>>,
    audit: Arc<MemoryAuditSink>,
}

impl CapturingNotifier {
    fn new(audit: Arc<MemoryAuditSink>) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            audit,
        }
    }

    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl INotifier for CapturingNotifier {
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let audited = self
            .audit
            .entries()
            .iter()
            .any(|entry| matches!(entry.payload, AuditPayload::Alert(_)));
        assert!(audited, "alert must reach the audit log before delivery");
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

enum FailureMode {
    Transport,
    Disabled,
}

struct FailingNotifier(FailureMode);

impl INotifier for FailingNotifier {
    fn notify(&self, _message: &str) -> Result<(), NotifyError> {
        Err(match self.0 {
            FailureMode::Transport => NotifyError::Transport {
                reason: "connection refused".to_string(),
            },
            FailureMode::Disabled => NotifyError::Disabled,
        })
    }
}

// ── Counters ─────────────────────────────────────────────────────────────

#[test]
fn predictions_only_touch_the_counters() {
    let h = harness_with_notifier(Arc::new(NoopNotifier));
    for _ in 0..5 {
        h.monitor.record_prediction();
    }
    let stats = h.monitor.stats();
    assert_eq!(stats.total_predictions, 5);
    assert_eq!(stats.total_wrong_predictions, 0);
    assert!(h.sink.is_empty(), "counting a prediction writes no audit entry");
    assert!(h.monitor.recent_wrong(10).is_empty());
}

#[test]
fn correct_feedback_changes_nothing() {
    let h = harness_with_notifier(Arc::new(NoopNotifier));
    h.monitor.record_prediction();
    h.monitor
        .record_feedback("great flight", Label::Positive, Some(0.98), true);

    let stats = h.monitor.stats();
    assert_eq!(stats.total_wrong_predictions, 0);
    assert_eq!(stats.error_rate, 0.0);
    assert!(h.sink.is_empty());
    assert!(h.monitor.recent_wrong(10).is_empty());
}

#[test]
fn wrong_feedback_is_counted_audited_and_remembered() {
    let h = harness_with_notifier(Arc::new(NoopNotifier));
    h.monitor.record_prediction();
    h.clock.advance(Duration::seconds(42));
    h.monitor
        .record_feedback("late and rude crew", Label::Positive, Some(0.83), false);

    let stats = h.monitor.stats();
    assert_eq!(stats.total_predictions, 1);
    assert_eq!(stats.total_wrong_predictions, 1);
    assert_eq!(stats.error_rate, 1.0);

    let recent = h.monitor.recent_wrong(10);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].text, "late and rude crew");
    assert_eq!(
        recent[0].occurred_at,
        t0() + Duration::seconds(42),
        "event time comes from the injected clock"
    );

    let entries = h.sink.entries();
    assert_eq!(entries.len(), 1);
    assert!(matches!(
        entries[0].payload,
        AuditPayload::WrongPrediction(_)
    ));
}

#[test]
fn error_rate_combines_both_counters() {
    let h = harness_with_notifier(Arc::new(NoopNotifier));
    for _ in 0..10 {
        h.monitor.record_prediction();
    }
    for _ in 0..2 {
        h.monitor
            .record_feedback("bad", Label::Negative, None, false);
    }
    let stats = h.monitor.stats();
    assert!(
        (stats.error_rate - 0.2).abs() < 1e-12,
        "expected 0.2, got {}",
        stats.error_rate
    );
}

// ── Alert delivery ───────────────────────────────────────────────────────

#[test]
fn threshold_breach_delivers_one_message_per_qualifying_event() {
    let sink = Arc::new(MemoryAuditSink::new());
    let notifier = Arc::new(CapturingNotifier::new(sink.clone()));
    let clock = Arc::new(ManualClock::new(t0()));
    let monitor = ModelMonitor::with_components(
        &MonitorConfig::default(),
        sink,
        notifier.clone(),
        clock,
    );

    for text in ["a", "b", "c"] {
        monitor.record_feedback(text, Label::Positive, Some(0.9), false);
    }
    let messages = notifier.messages();
    assert_eq!(messages.len(), 1, "only the third event crosses the threshold");
    assert!(messages[0].contains("3 wrong predictions"), "got: {}", messages[0]);

    // A fourth qualifying event re-fires.
    monitor.record_feedback("d", Label::Positive, Some(0.9), false);
    assert_eq!(notifier.messages().len(), 2);
}

#[test]
fn notifier_transport_failure_never_disturbs_recording() {
    let h = harness_with_notifier(Arc::new(FailingNotifier(FailureMode::Transport)));
    for _ in 0..4 {
        h.monitor
            .record_feedback("bad", Label::Negative, None, false);
    }
    assert_eq!(h.monitor.stats().total_wrong_predictions, 4);
    let alerts = h
        .sink
        .entries()
        .iter()
        .filter(|entry| matches!(entry.payload, AuditPayload::Alert(_)))
        .count();
    assert_eq!(alerts, 2, "alerts are audited even when delivery fails");
}

#[test]
fn disabled_notifier_error_is_swallowed_too() {
    let h = harness_with_notifier(Arc::new(FailingNotifier(FailureMode::Disabled)));
    for _ in 0..3 {
        h.monitor
            .record_feedback("bad", Label::Negative, None, false);
    }
    assert_eq!(h.monitor.stats().total_wrong_predictions, 3);
}

// ── Clock ────────────────────────────────────────────────────────────────

#[test]
fn expiry_follows_the_injected_clock() {
    let sink = Arc::new(MemoryAuditSink::new());
    let notifier = Arc::new(CapturingNotifier::new(sink.clone()));
    let clock = Arc::new(ManualClock::new(t0()));
    let monitor = ModelMonitor::with_components(
        &MonitorConfig::default(),
        sink,
        notifier.clone(),
        clock.clone(),
    );

    monitor.record_feedback("a", Label::Positive, None, false);
    clock.advance(Duration::seconds(10));
    monitor.record_feedback("b", Label::Positive, None, false);

    // Both events age out before the next one arrives.
    clock.set(t0() + Duration::seconds(610));
    monitor.record_feedback("c", Label::Positive, None, false);

    assert!(notifier.messages().is_empty(), "expired events must not alert");
    // The recent buffer is history, not a window; it keeps all three.
    assert_eq!(monitor.recent_wrong(10).len(), 3);
    assert_eq!(monitor.recent_wrong(10)[0].text, "c");
}

// ── Concurrency ──────────────────────────────────────────────────────────

#[test]
fn concurrent_recording_keeps_exact_totals() {
    let h = harness_with_notifier(Arc::new(NoopNotifier));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let monitor = h.monitor.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..250 {
                monitor.record_prediction();
            }
        }));
    }
    for t in 0..4 {
        let monitor = h.monitor.clone();
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                let text = format!("wrong {t}-{i}");
                monitor.record_feedback(text, Label::Negative, Some(0.7), false);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let stats = h.monitor.stats();
    assert_eq!(stats.total_predictions, 2_000);
    assert_eq!(stats.total_wrong_predictions, 400);
    assert_eq!(
        h.monitor.recent_wrong(1_000).len(),
        100,
        "recent history is capped at its configured capacity"
    );
    let events = h
        .sink
        .entries()
        .iter()
        .filter(|entry| matches!(entry.payload, AuditPayload::WrongPrediction(_)))
        .count();
    assert_eq!(events, 400, "every wrong event is audited exactly once");
}

// ── Tracing setup ────────────────────────────────────────────────────────

#[test]
fn tracing_init_is_idempotent() {
    vigil_monitor::events::init_tracing();
    // A second call must leave the installed subscriber in place.
    vigil_monitor::events::init_tracing();
}

// ── Config wiring ────────────────────────────────────────────────────────

#[test]
fn monitor_built_from_config_writes_jsonl_to_the_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs/feedback.log");

    let mut config = VigilConfig::default();
    config.audit.path = path.to_string_lossy().into_owned();

    let monitor = ModelMonitor::new(&config).unwrap();
    monitor.record_prediction();
    monitor.record_feedback("terrible seats", Label::Positive, Some(0.77), false);

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    let entry: vigil_core::models::AuditEntry = serde_json::from_str(lines[0]).unwrap();
    assert!(matches!(entry.payload, AuditPayload::WrongPrediction(_)));
}
