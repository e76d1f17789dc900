use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::label::Label;

/// A single wrong-prediction event as reported by the feedback surface.
/// Immutable once created; the monitor copies it into its own structures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrongPrediction {
    /// Raw input text the model got wrong.
    pub text: String,
    /// Class the model predicted.
    pub predicted_label: Label,
    /// Model confidence for the predicted class, when the caller had one.
    pub proba: Option<f64>,
    /// When the prediction was served.
    pub occurred_at: DateTime<Utc>,
}
