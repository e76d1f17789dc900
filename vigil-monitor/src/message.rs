//! Rendering of alert records into notification text.

use std::fmt::Write;

use vigil_core::models::AlertRecord;

/// Render the human-readable message delivered to the notifier.
///
/// One summary line with the in-window count, the window length, and the
/// trigger time, followed by one line per sample. Sample text arrives
/// already truncated by the alert engine.
pub fn compose_message(record: &AlertRecord) -> String {
    let mut message = format!(
        "ALERT: {} wrong predictions in the last {} minutes (at {})",
        record.window_count,
        record.window_minutes,
        record.triggered_at.format("%Y-%m-%d %H:%M:%S UTC"),
    );
    for sample in &record.samples {
        let _ = write!(
            message,
            "\n- \"{}\" (predicted {}",
            sample.text, sample.predicted_label
        );
        if let Some(proba) = sample.proba {
            let _ = write!(message, ", proba {proba:.3}");
        }
        message.push(')');
    }
    message
}
