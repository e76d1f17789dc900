use crate::errors::AuditError;
use crate::models::AuditEntry;

/// Append-only audit sink. One entry per wrong prediction and one per
/// alert; entries are never rewritten or read back by the monitor.
pub trait IAuditSink: Send + Sync {
    /// Durably append one entry.
    fn append(&self, entry: &AuditEntry) -> Result<(), AuditError>;
}
