use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::label::Label;

/// Raised when the wrong-prediction count inside the trailing window
/// reaches the configured threshold. Level-triggered: a record is built for
/// every qualifying event while the condition holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub triggered_at: DateTime<Utc>,
    /// Wrong predictions counted inside the window, the triggering one included.
    pub window_count: usize,
    /// Window size in minutes.
    pub window_minutes: f64,
    /// Newest offending events, text truncated for transport.
    pub samples: Vec<AlertSample>,
}

/// View of a wrong prediction carried inside an alert. Only the text is
/// bounded; every other event field is preserved as recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSample {
    pub text: String,
    pub predicted_label: Label,
    pub proba: Option<f64>,
    pub occurred_at: DateTime<Utc>,
}
