pub mod alert;
pub mod audit_entry;
pub mod label;
pub mod stats_snapshot;
pub mod wrong_prediction;

pub use alert::{AlertRecord, AlertSample};
pub use audit_entry::{AuditEntry, AuditPayload};
pub use label::Label;
pub use stats_snapshot::StatsSnapshot;
pub use wrong_prediction::WrongPrediction;
