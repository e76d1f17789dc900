use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::alert::AlertRecord;
use super::wrong_prediction::WrongPrediction;

/// One line of the append-only audit log. `timestamp` is the ingestion
/// time; payloads keep their own event times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: AuditPayload,
}

/// Audit payload, tagged so each JSONL line names its own kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuditPayload {
    #[serde(rename = "WRONG_PREDICTION")]
    WrongPrediction(WrongPrediction),
    #[serde(rename = "ALERT")]
    Alert(AlertRecord),
}

impl AuditEntry {
    pub fn wrong_prediction(timestamp: DateTime<Utc>, event: WrongPrediction) -> Self {
        Self {
            timestamp,
            payload: AuditPayload::WrongPrediction(event),
        }
    }

    pub fn alert(timestamp: DateTime<Utc>, record: AlertRecord) -> Self {
        Self {
            timestamp,
            payload: AuditPayload::Alert(record),
        }
    }
}
